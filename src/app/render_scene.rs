//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;
use std::sync::Arc;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let [w, h] = viewport_size;
    let aspect = if w > 0.0 && h > 0.0 { w / h } else { 1.0 };
    let mesh = state.derived.mesh();

    RenderScene {
        mesh: (!mesh.is_empty()).then(|| Arc::clone(mesh)),
        mesh_revision: state.derived.revision(),
        view_proj: state.camera.view_projection(aspect),
        eye: state.camera.pose().position(),
        viewport_size,
        mesh_color: state.options.mesh_color,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use std::sync::Arc;

    #[test]
    fn build_shares_mesh_without_copy() {
        let state = AppState::new();

        let scene = build(&state, [800.0, 600.0]);

        let mesh = scene.mesh.as_ref().expect("Mesh vorhanden");
        assert!(Arc::ptr_eq(mesh, state.derived.mesh()));
        assert_eq!(scene.mesh_revision, state.derived.revision());
        assert!(scene.has_mesh());
    }

    #[test]
    fn build_tolerates_zero_viewport() {
        let state = AppState::new();

        let scene = build(&state, [0.0, 0.0]);

        assert!(scene.view_proj.is_finite());
        assert_eq!(scene.eye, state.camera.pose().position());
    }
}
