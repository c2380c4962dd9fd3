//! Use-Case: Kontrollpunkt löschen.

use super::report_rejection;
use crate::app::use_cases::geometry;
use crate::app::AppState;

/// Löscht den nächstgelegenen Punkt innerhalb von `max_distance`.
///
/// Anker und das Unterschreiten der Mindestanzahl werden abgelehnt; die
/// Punkte bleiben dann unverändert.
pub fn delete_control_point_at(state: &mut AppState, pos: glam::Vec2, max_distance: f32) {
    let Some(index) = state.profile.points.nearest(pos, max_distance) else {
        log::debug!("Löschen: kein Kontrollpunkt in Reichweite");
        return;
    };

    match state.profile.points.delete(index) {
        Ok(removed) => {
            state.profile.selected = None;
            state.profile.dragging = None;
            state.ui.status_message = None;
            log::info!(
                "Kontrollpunkt {} gelöscht ({:.1}, {:.1}), noch {} Punkte",
                index,
                removed.x,
                removed.y,
                state.profile.points.len()
            );
            geometry::refresh(state);
        }
        Err(rejection) => report_rejection(state, rejection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ControlPointSet, EditRejection};
    use glam::Vec2;

    #[test]
    fn delete_interior_point_removes_segment() {
        let mut state = AppState::new();

        delete_control_point_at(&mut state, Vec2::new(100.0, 250.0), 10.0);

        assert_eq!(state.point_count(), 4);
        assert_eq!(state.derived.curve().segment_count(), 3);
        assert!(state.ui.status_message.is_none());
    }

    #[test]
    fn delete_anchor_is_rejected_with_status() {
        let mut state = AppState::new();
        let revision = state.derived.revision();

        delete_control_point_at(&mut state, Vec2::new(0.0, 450.0), 10.0);

        assert_eq!(state.point_count(), 5);
        assert_eq!(state.derived.revision(), revision);
        assert_eq!(
            state.ui.status_message.as_deref(),
            Some(EditRejection::AnchoredPoint.to_string().as_str())
        );
    }

    #[test]
    fn delete_below_minimum_is_rejected() {
        let mut state = AppState::new();
        state.profile.points = ControlPointSet::from_points(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(60.0, 100.0),
            Vec2::new(0.0, 200.0),
        ]);

        delete_control_point_at(&mut state, Vec2::new(60.0, 100.0), 10.0);

        assert_eq!(state.point_count(), 3);
        assert!(state.ui.status_message.is_some());
    }

    #[test]
    fn delete_outside_hit_radius_does_nothing() {
        let mut state = AppState::new();

        delete_control_point_at(&mut state, Vec2::new(200.0, 20.0), 10.0);

        assert_eq!(state.point_count(), 5);
        assert!(state.ui.status_message.is_none());
    }
}
