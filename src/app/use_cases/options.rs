//! Use-Case: Editor-Optionen übernehmen oder zurücksetzen.
//!
//! Persistiert wird beim Beenden der Anwendung oder explizit per
//! `save_options`, nicht bei jeder Änderung im Dialog.

use crate::app::use_cases::geometry;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen und rechnet abhängige Geometrie neu.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let options = options.sanitized();
    state.profile.canvas_size = [options.canvas_width, options.canvas_height];
    state.camera.set_sensitivity(options.orbit_sensitivity());
    state.options = options;

    if geometry::refresh(state) {
        log::info!(
            "Optionen übernommen, Mesh neu berechnet ({} Vertices)",
            state.derived.mesh().vertex_count()
        );
    } else {
        log::debug!("Optionen übernommen");
    }
}

/// Setzt alle Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    apply_options(state, EditorOptions::default());
}

/// Schreibt die Optionen nach `path`; Fehler landen zusätzlich in der Statuszeile.
pub fn save_options(state: &mut AppState, path: &std::path::Path) -> anyhow::Result<()> {
    match state.options.save_to_file(path) {
        Ok(()) => {
            state.ui.status_message = Some(format!("Optionen gespeichert: {}", path.display()));
            Ok(())
        }
        Err(e) => {
            state.ui.status_message = Some("Optionen konnten nicht gespeichert werden".into());
            Err(e.context(format!("Optionen nach {} speichern", path.display())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_resolution_rebuilds_mesh() {
        let mut state = AppState::new();
        let options = EditorOptions {
            sample_count: 50,
            radial_segments: 16,
            ..EditorOptions::default()
        };

        apply_options(&mut state, options);

        assert_eq!(state.derived.mesh().vertex_count(), 50 * 17);
        assert_eq!(state.derived.mesh().index_count(), 49 * 16 * 6);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut state = AppState::new();
        let options = EditorOptions {
            sample_count: 0,
            radial_segments: 100_000,
            ..EditorOptions::default()
        };

        apply_options(&mut state, options);

        assert_eq!(state.options.sample_count, 2);
        assert_eq!(state.options.radial_segments, 256);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = AppState::new();
        state.options.camera_rotate_sensitivity = 1.0;

        reset_options(&mut state);

        assert_eq!(state.options, EditorOptions::default());
    }

    #[test]
    fn save_writes_loadable_file() {
        let mut state = AppState::new();
        state.options.sample_count = 42;
        let path = std::env::temp_dir().join(format!(
            "amigurumi_options_save_{}.toml",
            std::process::id()
        ));

        save_options(&mut state, &path).expect("Speichern muss gelingen");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.sample_count, 42);
        assert!(state.ui.status_message.is_some());
    }
}
