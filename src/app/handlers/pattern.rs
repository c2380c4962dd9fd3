//! Handler für die Mustergenerierung.

use crate::app::use_cases;
use crate::app::AppState;

/// Stellt eine Musteranfrage für die aktuelle Kurve.
pub fn request(state: &mut AppState) {
    use_cases::pattern::request_pattern(state);
}

/// Schließt das Musterfenster.
pub fn close_window(state: &mut AppState) {
    use_cases::pattern::close_pattern_window(state);
}
