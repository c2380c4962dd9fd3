//! Rendering-Typen für die 3D-Vorschau.

use crate::core::RevolutionMesh;
use bytemuck::{Pod, Zeroable};

/// Tiefenformat des egui-Render-Passes (`NativeOptions::depth_buffer = 24`).
pub const DEPTH_FORMAT: eframe::wgpu::TextureFormat = eframe::wgpu::TextureFormat::Depth24Plus;

/// MSAA-Samples, passend zu `NativeOptions::multisampling`.
pub const MSAA_SAMPLES: u32 = 4;

/// Lichtrichtung (zur Lichtquelle hin, Weltraum).
pub const LIGHT_DIRECTION: [f32; 3] = [0.4, 0.8, 0.45];

/// Vertex des Rotations-Meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in cm
    pub position: [f32; 3],
    /// Vertex-Normale
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Uniform-Buffer für Projektion und Beleuchtung
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
    /// Grundfarbe RGBA
    pub color: [f32; 4],
    /// Kameraposition (w ungenutzt)
    pub eye: [f32; 4],
    /// Lichtrichtung (w ungenutzt)
    pub light_dir: [f32; 4],
}

/// Verschränkt Positionen und Normalen zu GPU-Vertices.
pub(crate) fn interleave(mesh: &RevolutionMesh) -> Vec<MeshVertex> {
    mesh.vertices
        .iter()
        .zip(&mesh.normals)
        .map(|(p, n)| MeshVertex {
            position: p.to_array(),
            normal: n.to_array(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn interleave_pairs_positions_with_normals() {
        let mesh = RevolutionMesh {
            vertices: vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)],
            normals: vec![Vec3::X, Vec3::Y],
            indices: Vec::new(),
        };

        let vertices = interleave(&mesh);

        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[1].position, [4.0, 5.0, 6.0]);
        assert_eq!(vertices[1].normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn uniforms_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<Uniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
    }
}
