//! Use-Case-Funktionen für die Orbit-Kamera.

use crate::app::AppState;
use crate::core::CameraInput;

/// Leitet ein Viewport-Eingabe-Ereignis an die Kamera-Zustandsmaschine weiter.
pub fn apply_input(state: &mut AppState, input: CameraInput) {
    state.camera.handle(input);
}

/// Setzt die Kamera auf die Startpose zurück.
pub fn reset_camera(state: &mut AppState) {
    state.camera.reset();
    log::debug!("Kamera zurückgesetzt");
}
