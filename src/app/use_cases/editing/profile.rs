//! Use-Case: Profil als Ganzes (Werkzeug, Zurücksetzen, Wiederherstellen).

use crate::app::state::ProfileTool;
use crate::app::use_cases::geometry;
use crate::app::AppState;
use crate::core::{ControlPointSet, MIN_CONTROL_POINTS};

/// Wechselt das Werkzeug und bricht einen laufenden Drag ab.
pub fn set_profile_tool(state: &mut AppState, tool: ProfileTool) {
    state.profile.active_tool = tool;
    state.profile.dragging = None;
    log::debug!("Profil-Werkzeug: {:?}", tool);
}

/// Setzt das Profil auf die Standardform der aktuellen Canvas-Höhe zurück.
pub fn reset_profile(state: &mut AppState) {
    state.profile.points = ControlPointSet::default_shape(state.profile.canvas_size[1]);
    state.profile.selected = None;
    state.profile.dragging = None;
    state.ui.status_message = None;
    log::info!("Profil zurückgesetzt");
    geometry::refresh(state);
}

/// Übernimmt gespeicherte Kontrollpunkte, sofern sie gültig sind.
///
/// Gültig heißt: mindestens 3 endliche Punkte, Start- und Endpunkt auf der
/// Achse. Ungültige Daten werden verworfen (Standardform bleibt).
pub fn restore_control_points(state: &mut AppState, points: ControlPointSet) {
    let valid = points.len() >= MIN_CONTROL_POINTS
        && points.points().iter().all(|p| p.is_finite())
        && points.get(0).is_some_and(|p| p.x == 0.0)
        && points.get(points.len() - 1).is_some_and(|p| p.x == 0.0);

    if !valid {
        log::warn!(
            "Gespeicherte Kontrollpunkte ungültig ({} Punkte), verwende Standardform",
            points.len()
        );
        return;
    }

    log::info!("{} Kontrollpunkte wiederhergestellt", points.len());
    state.profile.points = points;
    state.profile.selected = None;
    state.profile.dragging = None;
    geometry::refresh(state);
}

/// Aktualisiert die Canvas-Größe (Punkte bleiben in Pixeln erhalten).
pub fn set_canvas_size(state: &mut AppState, size: [f32; 2]) {
    if size.iter().all(|v| v.is_finite() && *v > 0.0) {
        state.profile.canvas_size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn reset_restores_default_shape() {
        let mut state = AppState::new();
        state.profile.points.insert(Vec2::new(90.0, 300.0));

        reset_profile(&mut state);

        assert_eq!(state.profile.points, ControlPointSet::default());
        assert_eq!(state.derived.curve().segment_count(), 4);
    }

    #[test]
    fn restore_accepts_valid_points() {
        let mut state = AppState::new();
        let points = ControlPointSet::from_points(vec![
            Vec2::new(0.0, 10.0),
            Vec2::new(40.0, 60.0),
            Vec2::new(30.0, 120.0),
            Vec2::new(0.0, 180.0),
        ]);

        restore_control_points(&mut state, points.clone());

        assert_eq!(state.profile.points, points);
        assert_eq!(state.derived.curve().segment_count(), 3);
    }

    #[test]
    fn restore_rejects_points_off_axis() {
        let mut state = AppState::new();
        let points = ControlPointSet::from_points(vec![
            Vec2::new(5.0, 10.0),
            Vec2::new(40.0, 60.0),
            Vec2::new(0.0, 180.0),
        ]);

        restore_control_points(&mut state, points);

        assert_eq!(state.profile.points, ControlPointSet::default());
    }

    #[test]
    fn switching_tool_cancels_drag() {
        let mut state = AppState::new();
        state.profile.dragging = Some(1);

        set_profile_tool(&mut state, ProfileTool::Delete);

        assert_eq!(state.profile.active_tool, ProfileTool::Delete);
        assert_eq!(state.profile.dragging, None);
    }
}
