//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::RevolutionMesh;
use glam::{Mat4, Vec3};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Aktuelles Rotations-Mesh (Arc für O(1)-Clone pro Frame)
    pub mesh: Option<Arc<RevolutionMesh>>,
    /// Revision des Meshes; nur bei Änderung werden Buffer neu hochgeladen
    pub mesh_revision: u64,
    /// View-Projection-Matrix für diesen Frame
    pub view_proj: Mat4,
    /// Kameraposition (für die Beleuchtung)
    pub eye: Vec3,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Grundfarbe des Meshes
    pub mesh_color: [f32; 4],
}

impl RenderScene {
    /// Gibt zurück, ob ein zeichenbares Mesh vorhanden ist.
    pub fn has_mesh(&self) -> bool {
        self.mesh.as_ref().is_some_and(|m| !m.is_empty())
    }
}
