//! Use-Case: abgeleitete Geometrie nach einer Änderung aktualisieren.

use crate::app::derived::GeometryInputs;
use crate::app::AppState;

/// Rechnet Kurve und Mesh bei Bedarf neu und passt die Kamera an neue
/// Mesh-Grenzen an. Gibt `true` zurück, wenn neu gerechnet wurde.
pub fn refresh(state: &mut AppState) -> bool {
    let inputs = GeometryInputs {
        points: &state.profile.points,
        scale: state.options.unit_scale(),
        sample_count: state.options.sample_count,
        radial_segments: state.options.radial_segments,
    };
    let rebuilt = state.derived.update(inputs);
    if rebuilt {
        state.camera.refit(state.derived.bounds());
    }
    rebuilt
}
