//! Top-Menü (Datei, Bearbeiten, Ansicht, Extras).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                if ui.button("Profil zurücksetzen").clicked() {
                    events.push(AppIntent::ProfileResetRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Kamera zurücksetzen").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }
            });

            ui.menu_button("Extras", |ui| {
                let busy = state.pattern.is_busy();
                if ui
                    .add_enabled(!busy, egui::Button::new("Muster erzeugen"))
                    .clicked()
                {
                    events.push(AppIntent::GeneratePatternRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
