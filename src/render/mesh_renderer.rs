//! Renderer für das Rotations-Mesh.
//!
//! Vertex- und Index-Buffer werden nur neu beschrieben, wenn sich die
//! Mesh-Revision ändert; bei zu kleiner Kapazität werden sie neu angelegt.

use super::types::{interleave, MeshVertex, Uniforms, DEPTH_FORMAT, LIGHT_DIRECTION, MSAA_SAMPLES};
use crate::shared::RenderScene;
use eframe::{egui_wgpu, wgpu};

/// GPU-Buffer einer hochgeladenen Mesh-Revision
struct MeshBuffers {
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    index_buffer: wgpu::Buffer,
    index_capacity: usize,
    index_count: u32,
    revision: u64,
}

/// Renderer für das Rotations-Mesh
pub struct MeshRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    buffers: Option<MeshBuffers>,
}

impl MeshRenderer {
    /// Erstellt einen neuen Mesh-Renderer
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Mesh Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Mesh Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Mesh Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mesh Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[MeshVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Beide Seiten zeichnen, der Shader spiegelt die Normale
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: MSAA_SAMPLES,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            buffers: None,
        }
    }

    /// Lädt Mesh und Uniforms hoch (im `prepare`-Schritt des Callbacks).
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, scene: &RenderScene) {
        let [w, h] = scene.viewport_size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return;
        }

        let uniforms = Uniforms {
            view_proj: scene.view_proj.to_cols_array_2d(),
            color: scene.mesh_color,
            eye: scene.eye.extend(1.0).to_array(),
            light_dir: [
                LIGHT_DIRECTION[0],
                LIGHT_DIRECTION[1],
                LIGHT_DIRECTION[2],
                0.0,
            ],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        let Some(mesh) = scene.mesh.as_deref().filter(|m| !m.is_empty()) else {
            self.buffers = None;
            return;
        };
        if self
            .buffers
            .as_ref()
            .is_some_and(|b| b.revision == scene.mesh_revision)
        {
            return;
        }

        let vertices = interleave(mesh);
        log::debug!(
            "Mesh-Upload Revision {}: {} Vertices, {} Indizes",
            scene.mesh_revision,
            vertices.len(),
            mesh.indices.len()
        );

        let reuse = self.buffers.take().filter(|b| {
            b.vertex_capacity >= vertices.len() && b.index_capacity >= mesh.indices.len()
        });
        let mut buffers = match reuse {
            Some(b) => b,
            None => MeshBuffers {
                vertex_buffer: device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("Mesh Vertex Buffer"),
                    size: std::mem::size_of_val(vertices.as_slice()) as u64,
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                }),
                vertex_capacity: vertices.len(),
                index_buffer: device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("Mesh Index Buffer"),
                    size: std::mem::size_of_val(mesh.indices.as_slice()) as u64,
                    usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                }),
                index_capacity: mesh.indices.len(),
                index_count: 0,
                revision: 0,
            },
        };

        queue.write_buffer(&buffers.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        queue.write_buffer(&buffers.index_buffer, 0, bytemuck::cast_slice(&mesh.indices));
        buffers.index_count = mesh.indices.len() as u32;
        buffers.revision = scene.mesh_revision;
        self.buffers = Some(buffers);
    }

    /// Zeichnet das zuletzt hochgeladene Mesh.
    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'static>) {
        let Some(buffers) = self.buffers.as_ref() else {
            return;
        };
        if buffers.index_count == 0 {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, buffers.vertex_buffer.slice(..));
        render_pass.set_index_buffer(buffers.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..buffers.index_count, 0, 0..1);
    }
}
