//! Use-Case: Kontrollpunkt per Drag verschieben.

use super::report_rejection;
use crate::app::use_cases::geometry;
use crate::app::AppState;

/// Greift den nächstgelegenen Punkt innerhalb von `max_distance`.
pub fn begin_drag(state: &mut AppState, pos: glam::Vec2, max_distance: f32) {
    match state.profile.points.nearest(pos, max_distance) {
        Some(index) => {
            state.profile.dragging = Some(index);
            state.profile.selected = Some(index);
            log::debug!("Drag gestartet für Kontrollpunkt {}", index);
        }
        None => {
            state.profile.dragging = None;
            log::debug!("Kein Kontrollpunkt in Reichweite von {:?}", pos);
        }
    }
}

/// Verschiebt einen Punkt; Anker bleiben auf der Achse.
pub fn move_control_point(state: &mut AppState, index: usize, pos: glam::Vec2) {
    if !pos.is_finite() {
        return;
    }
    match state.profile.points.move_point(index, pos) {
        Ok(()) => {
            geometry::refresh(state);
        }
        Err(rejection) => {
            state.profile.dragging = None;
            report_rejection(state, rejection);
        }
    }
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    if let Some(index) = state.profile.dragging.take() {
        if let Some(p) = state.profile.points.get(index) {
            log::info!(
                "Kontrollpunkt {} verschoben nach ({:.1}, {:.1})",
                index,
                p.x,
                p.y
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn drag_lifecycle_moves_point_and_rebuilds_mesh() {
        let mut state = AppState::new();
        let revision = state.derived.revision();

        begin_drag(&mut state, Vec2::new(81.0, 126.0), 10.0);
        assert_eq!(state.profile.dragging, Some(1));

        move_control_point(&mut state, 1, Vec2::new(60.0, 140.0));
        end_drag(&mut state);

        assert_eq!(state.profile.points.get(1), Some(Vec2::new(60.0, 140.0)));
        assert_eq!(state.profile.dragging, None);
        assert!(state.derived.revision() > revision);
    }

    #[test]
    fn dragging_anchor_keeps_it_on_axis() {
        let mut state = AppState::new();

        begin_drag(&mut state, Vec2::new(2.0, 52.0), 10.0);
        assert_eq!(state.profile.dragging, Some(0));
        move_control_point(&mut state, 0, Vec2::new(35.0, 20.0));

        assert_eq!(state.profile.points.get(0), Some(Vec2::new(0.0, 20.0)));
        assert_eq!(state.derived.curve().start_radius, 0.0);
    }

    #[test]
    fn miss_does_not_start_drag() {
        let mut state = AppState::new();

        begin_drag(&mut state, Vec2::new(250.0, 10.0), 10.0);

        assert_eq!(state.profile.dragging, None);
    }

    #[test]
    fn move_of_unknown_index_sets_status() {
        let mut state = AppState::new();

        move_control_point(&mut state, 42, Vec2::new(1.0, 1.0));

        assert!(state.ui.status_message.is_some());
        assert_eq!(state.point_count(), 5);
    }
}
