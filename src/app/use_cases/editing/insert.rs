//! Use-Case: Kontrollpunkt einfügen.

use crate::app::use_cases::geometry;
use crate::app::AppState;

/// Fügt einen Punkt zwischen dem nächstgelegenen Paar ein und wählt ihn aus.
pub fn insert_control_point(state: &mut AppState, pos: glam::Vec2) {
    if !pos.is_finite() {
        log::warn!("Einfügen ignoriert: ungültige Position {:?}", pos);
        return;
    }

    let index = state.profile.points.insert(pos);
    state.profile.selected = Some(index);
    state.ui.status_message = None;
    log::info!(
        "Kontrollpunkt {} eingefügt bei ({:.1}, {:.1}), jetzt {} Punkte",
        index,
        pos.x,
        pos.y,
        state.profile.points.len()
    );

    geometry::refresh(state);
}
