//! Fenster mit dem generierten Häkelmuster.

use crate::app::{AppIntent, AppState};

/// Zeigt das Musterfenster und gibt erzeugte Events zurück.
pub fn show_pattern_window(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_pattern_window {
        return events;
    }

    let mut open = true;
    egui::Window::new("Häkelmuster")
        .open(&mut open)
        .resizable(true)
        .default_width(320.0)
        .default_height(420.0)
        .show(ctx, |ui| {
            if state.pattern.is_busy() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Muster wird erzeugt …");
                });
                ui.separator();
            }

            if let Some(ref error) = state.pattern.error {
                ui.colored_label(egui::Color32::LIGHT_RED, format!("Fehler: {}", error));
                ui.separator();
            }

            let Some(pattern) = state.pattern.last.as_ref() else {
                if !state.pattern.is_busy() {
                    ui.label("Noch kein Muster erzeugt.");
                }
                return;
            };

            if state.pattern.is_stale(state.derived.revision()) {
                ui.colored_label(
                    egui::Color32::YELLOW,
                    "Profil wurde geändert, Muster ist veraltet.",
                );
                if ui
                    .add_enabled(!state.pattern.is_busy(), egui::Button::new("Neu erzeugen"))
                    .clicked()
                {
                    events.push(AppIntent::GeneratePatternRequested);
                }
                ui.separator();
            }

            let info = &pattern.mesh_info;
            ui.label(format!(
                "{} Runden | {} Maschen",
                pattern.row_count(),
                pattern.total_stitches
            ));
            ui.label(format!(
                "Bogenlänge {:.1} cm | Höhe {:.1} cm | max. Radius {:.1} cm",
                info.arc_length, info.height, info.max_radius
            ));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for row in &pattern.rows {
                    ui.monospace(row.instruction());
                }
            });
        });

    if !open {
        events.push(AppIntent::PatternWindowClosed);
    }

    events
}
