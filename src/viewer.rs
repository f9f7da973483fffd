//! Standalone window backed by winit.
//!
//! ```no_run
//! # use niebla::{Options, Viewer};
//! Viewer::builder()
//!     .with_options(Options::default())
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    error::NieblaError, input::dispatcher::PIXEL_SCROLL_SCALE, options::Options, InputEvent,
    MouseButton, SceneEngine,
};

/// Default window title.
pub const WINDOW_TITLE: &str = "Niebla Project 1";
/// Default window size in logical pixels.
pub const WINDOW_SIZE: (u32, u32) = (800, 600);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
    size: (u32, u32),
}

impl ViewerBuilder {
    /// Create a builder with the default title, size and options.
    fn new() -> Self {
        Self {
            options: None,
            title: WINDOW_TITLE.into(),
            size: WINDOW_SIZE,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
            size: self.size,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the desk scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
    size: (u32, u32),
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns the startup failure (window, GPU, shaders, textures) if the
    /// scene could not be initialized, or [`NieblaError::Viewer`] if the
    /// event loop itself fails.
    pub fn run(self) -> Result<(), NieblaError> {
        let event_loop =
            EventLoop::new().map_err(|e| NieblaError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: Some(self.options),
            title: self.title,
            size: self.size,
            look_source: LookSource::CursorPosition,
            startup_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| NieblaError::Viewer(e.to_string()))?;

        app.startup_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<SceneEngine>,
    options: Option<Options>,
    title: String,
    size: (u32, u32),
    look_source: LookSource,
    startup_error: Option<NieblaError>,
}

/// Where look deltas are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookSource {
    /// Raw device motion. Keeps flowing when a grabbed cursor sits at the
    /// window edge.
    DeviceMotion,
    /// Window cursor positions, differenced by the pointer tracker. Only
    /// used when the cursor could not be grabbed.
    CursorPosition,
}

impl LookSource {
    fn for_grab(grab: Option<CursorGrabMode>) -> Self {
        grab.map_or(Self::CursorPosition, |_| Self::DeviceMotion)
    }
}

/// Grab and hide the cursor, confined if possible, else locked. Returns
/// the mode that took effect.
fn grab_cursor(window: &Window) -> Option<CursorGrabMode> {
    window.set_cursor_visible(false);
    let grab = [CursorGrabMode::Confined, CursorGrabMode::Locked]
        .into_iter()
        .find(|&mode| window.set_cursor_grab(mode).is_ok());
    if grab.is_none() {
        log::warn!("Cursor grab unavailable, look input follows the cursor");
    }
    grab
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: NieblaError) {
        self.startup_error = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine) else {
            return;
        };

        let _ = engine.update();
        if engine.should_close() {
            event_loop.exit();
            return;
        }

        match engine.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                engine.reconfigure_surface();
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }
        window.request_redraw();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(self.size.0, self.size.1));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(
                    event_loop,
                    NieblaError::Viewer(format!("failed to create window: {e}")),
                );
                return;
            }
        };

        self.look_source = LookSource::for_grab(grab_cursor(&window));

        let options = self.options.take().unwrap_or_default();
        let size = window.inner_size();
        let engine = match pollster::block_on(SceneEngine::new(
            window.clone(),
            (size.width, size.height),
            &options,
        )) {
            Ok(e) => e,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if matches!(event, WindowEvent::RedrawRequested) {
            self.redraw(event_loop);
            return;
        }

        let input = match event {
            WindowEvent::Resized(size) => InputEvent::Resized {
                width: size.width,
                height: size.height,
            },
            WindowEvent::Focused(false) => InputEvent::FocusLost,
            WindowEvent::Focused(true) => {
                if let Some(window) = &self.window {
                    self.look_source = LookSource::for_grab(grab_cursor(window));
                }
                if let Some(engine) = &mut self.engine {
                    engine.reset_pointer();
                }
                return;
            }
            WindowEvent::MouseInput { button, state, .. } => InputEvent::MouseButton {
                button: MouseButton::from(button),
                pressed: state == ElementState::Pressed,
            },
            WindowEvent::CursorMoved { position, .. }
                if self.look_source == LookSource::CursorPosition =>
            {
                InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                }
            }
            WindowEvent::MouseWheel { delta, .. } => InputEvent::Scroll {
                delta: match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * PIXEL_SCROLL_SCALE,
                },
            },
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                InputEvent::Key {
                    code: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                    repeat: event.repeat,
                }
            }
            _ => return,
        };

        if let Some(engine) = &mut self.engine {
            let _ = engine.handle_input(input);
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if self.look_source != LookSource::DeviceMotion {
            return;
        }
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if let Some(engine) = &mut self.engine {
                let _ = engine.handle_input(InputEvent::PointerMotion {
                    dx: dx as f32,
                    dy: dy as f32,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_grab_reads_raw_motion() {
        for mode in [CursorGrabMode::Confined, CursorGrabMode::Locked] {
            assert_eq!(LookSource::for_grab(Some(mode)), LookSource::DeviceMotion);
        }
    }

    #[test]
    fn ungrabbed_cursor_falls_back_to_positions() {
        assert_eq!(LookSource::for_grab(None), LookSource::CursorPosition);
    }
}
