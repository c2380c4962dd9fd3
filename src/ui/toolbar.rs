//! Toolbar für Profil-Werkzeuge und Musteranforderung.

use crate::app::{AppIntent, AppState, ProfileTool};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.profile.active_tool;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            for (i, tool) in ProfileTool::ALL.into_iter().enumerate() {
                let text = format!("{} ({})", tool.label(), i + 1);
                if ui.add(egui::Button::new(text).selected(active == tool)).clicked() {
                    events.push(AppIntent::ProfileToolSelected { tool });
                }
            }

            ui.separator();

            if ui.button("⟲ Profil zurücksetzen").clicked() {
                events.push(AppIntent::ProfileResetRequested);
            }
            if ui.button("🎥 Kamera zurücksetzen").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }

            ui.separator();

            let busy = state.pattern.is_busy();
            if ui
                .add_enabled(!busy, egui::Button::new("🧶 Muster erzeugen"))
                .clicked()
            {
                events.push(AppIntent::GeneratePatternRequested);
            }
            if busy {
                ui.spinner();
            }
        });
    });

    // Werkzeug-Shortcuts 1–3, solange kein Textfeld den Fokus hat
    if !ctx.wants_keyboard_input() {
        let keys = [egui::Key::Num1, egui::Key::Num2, egui::Key::Num3];
        for (key, tool) in keys.into_iter().zip(ProfileTool::ALL) {
            if ctx.input(|i| i.key_pressed(key)) && tool != active {
                events.push(AppIntent::ProfileToolSelected { tool });
            }
        }
    }

    events
}
