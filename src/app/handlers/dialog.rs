//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    use_cases::options::apply_options(state, options);
}

/// Setzt Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    use_cases::options::reset_options(state);
}

/// Speichert die aktuellen Optionen in die Konfigurationsdatei.
pub fn save_options(state: &mut AppState, path: &std::path::Path) -> anyhow::Result<()> {
    use_cases::options::save_options(state, path)
}
