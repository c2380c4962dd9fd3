//! Use-Case-Funktionen für das Bearbeiten der Kontrollpunkte.
//!
//! Aufgeteilt nach Operation:
//! - `insert`: Punkt zwischen dem nächstgelegenen Paar einfügen
//! - `drag`: Punkt greifen, verschieben, loslassen
//! - `delete`: Punkt löschen (Anker und Mindestanzahl geschützt)
//! - `profile`: Werkzeug, Zurücksetzen, Wiederherstellen, Canvas-Größe
//!
//! Abgelehnte Edits setzen eine Statusmeldung und lassen die Punkte unverändert.

mod delete;
mod drag;
mod insert;
mod profile;

pub use delete::delete_control_point_at;
pub use drag::{begin_drag, end_drag, move_control_point};
pub use insert::insert_control_point;
pub use profile::{reset_profile, restore_control_points, set_canvas_size, set_profile_tool};

use crate::app::AppState;
use crate::core::EditRejection;

/// Meldet einen abgelehnten Edit an Log und Statuszeile.
fn report_rejection(state: &mut AppState, rejection: EditRejection) {
    log::warn!("Edit abgelehnt: {}", rejection);
    state.ui.status_message = Some(rejection.to_string());
}
