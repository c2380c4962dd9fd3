//! Handler für das Bearbeiten des Profils im Canvas.

use crate::app::state::ProfileTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ControlPointSet;

/// Aktiviert ein Profil-Werkzeug.
pub fn set_profile_tool(state: &mut AppState, tool: ProfileTool) {
    use_cases::editing::set_profile_tool(state, tool);
}

/// Fügt einen Kontrollpunkt ein.
pub fn insert_point(state: &mut AppState, pos: glam::Vec2) {
    use_cases::editing::insert_control_point(state, pos);
}

/// Startet einen Drag auf dem nächstgelegenen Punkt.
pub fn begin_drag(state: &mut AppState, pos: glam::Vec2, max_distance: f32) {
    use_cases::editing::begin_drag(state, pos, max_distance);
}

/// Verschiebt einen Kontrollpunkt.
pub fn move_point(state: &mut AppState, index: usize, pos: glam::Vec2) {
    use_cases::editing::move_control_point(state, index, pos);
}

/// Beendet einen Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_drag(state);
}

/// Löscht den nächstgelegenen Kontrollpunkt.
pub fn delete_point_at(state: &mut AppState, pos: glam::Vec2, max_distance: f32) {
    use_cases::editing::delete_control_point_at(state, pos, max_distance);
}

/// Setzt das Profil auf die Standardform zurück.
pub fn reset_profile(state: &mut AppState) {
    use_cases::editing::reset_profile(state);
}

/// Ersetzt die Kontrollpunkte durch gespeicherte.
pub fn restore_points(state: &mut AppState, points: ControlPointSet) {
    use_cases::editing::restore_control_points(state, points);
}

/// Aktualisiert die Canvas-Größe.
pub fn set_canvas_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::editing::set_canvas_size(state, size);
}
