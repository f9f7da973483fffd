//! Per-frame rendering: the GPU-free [`FramePlan`] and the
//! [`FrameRenderer`] that records it.
//!
//! Frame uniforms live in one buffer bound at group 0. Every draw gets its
//! own model slot in a second buffer, addressed by dynamic offset at group
//! 1, so all slots can be written before the pass is submitted without
//! later writes clobbering earlier ones. Lit draws bind their texture at
//! group 2.

pub mod plan;

pub use plan::{DrawCall, FramePlan, PipelineKind};

use crate::error::NieblaError;
use crate::gpu::mesh::{GpuMesh, Vertex};
use crate::gpu::pipeline_helpers;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::{ShaderComposer, LAMP_SHADER, LIT_SHADER};
use crate::gpu::texture::{DecodedImage, DepthTarget, GpuTexture, TextureError};
use crate::gpu::uniforms::{FrameUniform, ModelUniform};
use crate::options::Options;
use crate::scene::{MeshKind, TextureKind, PLACEMENTS};

const MODEL_UNIFORM_SIZE: u64 = size_of::<ModelUniform>() as u64;

/// Owns every GPU resource needed to draw the scene.
pub struct FrameRenderer {
    lit_pipeline: wgpu::RenderPipeline,
    lamp_pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    model_layout: wgpu::BindGroupLayout,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
    model_stride: u64,
    model_slots: usize,
    meshes: Vec<GpuMesh>,
    textures: Vec<GpuTexture>,
    depth: DepthTarget,
    options: Options,
}

impl FrameRenderer {
    /// Compose shaders, build both pipelines and upload every mesh and
    /// texture. `load_texture` is called once per [`TextureKind`].
    ///
    /// # Errors
    ///
    /// Returns [`NieblaError::Shader`] if composition fails and
    /// [`NieblaError::Texture`] if any texture fails to load or exceeds the
    /// device's texture size limit.
    pub async fn new(
        context: &RenderContext,
        options: &Options,
        mut load_texture: impl FnMut(TextureKind) -> Result<DecodedImage, TextureError>,
    ) -> Result<Self, NieblaError> {
        let device = &context.device;

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[pipeline_helpers::uniform_buffer(
                0,
                false,
                size_of::<FrameUniform>() as u64,
            )],
        });
        let model_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Model Bind Group Layout"),
            entries: &[pipeline_helpers::uniform_buffer(0, true, MODEL_UNIFORM_SIZE)],
        });
        let texture_layout = pipeline_helpers::texture_bind_group_layout(device);

        let mut composer = ShaderComposer::new()?;
        let lit_shader = composer
            .compose(device, "Lit Shader", LIT_SHADER, "lit.wgsl")
            .await?;
        let lamp_shader = composer
            .compose(device, "Lamp Shader", LAMP_SHADER, "lamp.wgsl")
            .await?;

        let lit_pipeline = pipeline_helpers::create_scene_pipeline(
            device,
            "Lit",
            &lit_shader,
            context.format(),
            Vertex::layout(),
            &[&frame_layout, &model_layout, &texture_layout],
        );
        let lamp_pipeline = pipeline_helpers::create_scene_pipeline(
            device,
            "Lamp",
            &lamp_shader,
            context.format(),
            Vertex::position_layout(),
            &[&frame_layout, &model_layout],
        );

        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Uniform Buffer"),
            size: size_of::<FrameUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let model_stride = ModelUniform::slot_stride(context.uniform_offset_alignment());
        let model_slots = PLACEMENTS.len() + 1;
        let (model_buffer, model_bind_group) =
            create_model_slots(device, &model_layout, model_stride, model_slots);

        let meshes = MeshKind::ALL
            .iter()
            .map(|kind| GpuMesh::upload(device, &format!("{kind:?} Vertices"), kind.vertices()))
            .collect();

        let mut textures = Vec::with_capacity(TextureKind::ALL.len());
        for kind in TextureKind::ALL {
            let image = load_texture(kind)?;
            log::info!(
                "Loaded {} ({}x{}, {} channels)",
                kind.file_name(),
                image.width,
                image.height,
                image.channels
            );
            textures.push(GpuTexture::upload(
                device,
                &context.queue,
                &texture_layout,
                &image,
                kind.file_name(),
            )?);
        }

        let (width, height) = context.size();
        Ok(Self {
            lit_pipeline,
            lamp_pipeline,
            frame_buffer,
            frame_bind_group,
            model_layout,
            model_buffer,
            model_bind_group,
            model_stride,
            model_slots,
            meshes,
            textures,
            depth: DepthTarget::new(device, width, height),
            options: options.clone(),
        })
    }

    /// Recreate the depth target for a new surface size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.depth = DepthTarget::new(device, width, height);
        }
    }

    /// Upload the plan's uniforms, record one pass and present.
    ///
    /// # Errors
    ///
    /// Returns the [`wgpu::SurfaceError`] if no swapchain texture could be
    /// acquired; nothing is drawn in that case.
    pub fn render(
        &mut self,
        context: &RenderContext,
        plan: &FramePlan,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.write_uniforms(context, plan);

        let mut encoder = context.create_encoder();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            let mut bound: Option<PipelineKind> = None;
            for (slot, draw) in plan.draws.iter().enumerate() {
                if bound != Some(draw.pipeline) {
                    pass.set_pipeline(match draw.pipeline {
                        PipelineKind::Lit => &self.lit_pipeline,
                        PipelineKind::Lamp => &self.lamp_pipeline,
                    });
                    // Bindings do not survive a pipeline switch.
                    pass.set_bind_group(0, &self.frame_bind_group, &[]);
                    bound = Some(draw.pipeline);
                }

                let offset = (slot as u64 * self.model_stride) as wgpu::DynamicOffset;
                pass.set_bind_group(1, &self.model_bind_group, &[offset]);
                if let Some(texture) = draw.texture {
                    pass.set_bind_group(2, &self.textures[texture.index()].bind_group, &[]);
                }

                let mesh = &self.meshes[draw.mesh.index()];
                pass.set_vertex_buffer(0, mesh.buffer.slice(..));
                pass.draw(0..draw.vertex_count.min(mesh.vertex_count), 0..1);
            }
        }

        context.submit(encoder);
        frame.present();
        Ok(())
    }

    fn write_uniforms(&mut self, context: &RenderContext, plan: &FramePlan) {
        let frame = FrameUniform::new(
            plan.view,
            plan.projection,
            plan.camera_position,
            &self.options.lighting,
            &self.options.textures,
        );
        context
            .queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&frame));

        if plan.draws.len() > self.model_slots {
            self.model_slots = plan.draws.len();
            (self.model_buffer, self.model_bind_group) = create_model_slots(
                &context.device,
                &self.model_layout,
                self.model_stride,
                self.model_slots,
            );
        }

        for (slot, draw) in plan.draws.iter().enumerate() {
            let uniform = ModelUniform::new(draw.model);
            context.queue.write_buffer(
                &self.model_buffer,
                slot as u64 * self.model_stride,
                bytemuck::bytes_of(&uniform),
            );
        }
    }
}

fn create_model_slots(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    stride: u64,
    slots: usize,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Model Uniform Slots"),
        size: stride * slots.max(1) as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Model Bind Group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &buffer,
                offset: 0,
                size: wgpu::BufferSize::new(MODEL_UNIFORM_SIZE),
            }),
        }],
    });
    (buffer, bind_group)
}
