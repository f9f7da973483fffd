// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert freely.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! First-person viewer for a small textured desk scene, built on wgpu.
//!
//! Niebla opens a window, uploads a fixed set of meshes (countertop, book,
//! ball, candle, topper, cable segments) and their textures, and draws them
//! every frame with one Phong lighting model under a fly-through camera.
//!
//! # Key entry points
//!
//! - [`engine::SceneEngine`] - owns the GPU context, renderer and scene state
//! - [`camera::Camera`] - yaw/pitch fly camera driven by mouse and keyboard
//! - [`input::InputDispatcher`] - routes window events to the camera
//! - [`renderer::FrameRenderer`] - per-frame draw orchestration
//! - [`options::Options`] - TOML-backed tuning (camera, lighting, keys)
//!
//! # Architecture
//!
//! Everything runs on the event-loop thread. Each frame the dispatcher
//! applies held keys to the camera, the engine builds a
//! [`renderer::FramePlan`] from the camera and the fixed placement list,
//! uploads the matrices, records one render pass and presents.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{Camera, MoveDirection, ProjectionMode};
pub use engine::SceneEngine;
pub use error::NieblaError;
pub use input::{InputDispatcher, InputEvent, MouseButton};
pub use options::Options;
pub use scene::SceneState;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
