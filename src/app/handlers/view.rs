//! Handler für Kamera und Viewport der 3D-Vorschau.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CameraInput;

/// Reicht eine Viewport-Eingabe an die Orbit-Kamera weiter.
pub fn apply_camera_input(state: &mut AppState, input: CameraInput) {
    use_cases::camera::apply_input(state, input);
}

/// Setzt die Kamera auf die Startansicht zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}
