//! Use-Case: Häkelmuster über den Muster-Endpunkt anfordern und abholen.
//!
//! Die Anfrage läuft asynchron im Worker-Thread. `poll_pattern` wird einmal
//! pro Frame aufgerufen und übernimmt das Ergebnis der eigenen Anfrage.

use crate::app::AppState;
use crate::pattern::endpoint;

/// Schickt die aktuelle Kurve an den Muster-Endpunkt.
///
/// Während eine Anfrage offen ist, wird keine zweite gestellt.
pub fn request_pattern(state: &mut AppState) {
    if let Some(id) = state.pattern.pending {
        log::debug!("Musteranfrage {} läuft noch, neue Anfrage ignoriert", id);
        return;
    }

    state.ui.show_pattern_window = true;
    let revision = state.derived.revision();
    match endpoint::submit(
        state.derived.curve(),
        &state.options.pattern,
        state.options.pattern_timeout(),
    ) {
        Ok(id) => {
            log::info!("Musteranfrage {} gestellt (Revision {})", id, revision);
            state.pattern.pending = Some(id);
            state.pattern.requested_revision = Some(revision);
            state.pattern.error = None;
            state.ui.status_message = Some("Muster wird erzeugt …".to_string());
        }
        Err(e) => {
            log::warn!("Musteranfrage abgelehnt: {}", e);
            state.pattern.error = Some(e.to_string());
            state.ui.status_message = Some(e.to_string());
        }
    }
}

/// Holt ein fertiges Ergebnis der offenen Anfrage ab.
///
/// Gibt `true` zurück, wenn sich der Musterzustand geändert hat.
pub fn poll_pattern(state: &mut AppState) -> bool {
    let Some(id) = state.pattern.pending else {
        return false;
    };

    endpoint::poll();
    let Some(result) = endpoint::take(id) else {
        return false;
    };

    state.pattern.pending = None;
    match result {
        Ok(pattern) => {
            log::info!(
                "Muster {} erhalten: {} Reihen, {} Maschen",
                id,
                pattern.row_count(),
                pattern.total_stitches
            );
            state.ui.status_message = Some(format!(
                "Muster: {} Reihen, {} Maschen",
                pattern.row_count(),
                pattern.total_stitches
            ));
            state.pattern.last = Some(pattern);
            state.pattern.last_revision = state.pattern.requested_revision.take();
            state.pattern.error = None;
        }
        Err(e) => {
            log::warn!("Musteranfrage {} fehlgeschlagen: {}", id, e);
            state.pattern.requested_revision = None;
            state.ui.status_message = Some(e.to_string());
            state.pattern.error = Some(e.to_string());
        }
    }
    true
}

/// Schließt das Musterfenster (eine offene Anfrage läuft weiter).
pub fn close_pattern_window(state: &mut AppState) {
    state.ui.show_pattern_window = false;
}
