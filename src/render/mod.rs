//! GPU-Rendering mit wgpu.

mod callback;
mod mesh_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use mesh_renderer::MeshRenderer;
pub use types::{DEPTH_FORMAT, MSAA_SAMPLES};

use eframe::egui_wgpu;

/// Haupt-Renderer der 3D-Vorschau.
///
/// Verwaltet GPU-Buffer und Pipeline selbst; Daten kommen pro Frame als
/// `RenderScene` herein.
pub struct Renderer {
    mesh_renderer: MeshRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Revolution Mesh Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("mesh.wgsl").into()),
        });

        Self {
            mesh_renderer: MeshRenderer::new(render_state, &shader),
        }
    }

    /// Lädt geänderte Daten der Szene auf die GPU.
    pub fn prepare_scene(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        scene: &RenderScene,
    ) {
        self.mesh_renderer.prepare(device, queue, scene);
    }

    /// Rendert die Szene in den egui-Render-Pass.
    pub fn render_scene(&self, render_pass: &mut eframe::wgpu::RenderPass<'static>) {
        self.mesh_renderer.render(render_pass);
    }
}
