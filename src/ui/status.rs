//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let curve = state.derived.curve();
            ui.label(format!(
                "Punkte: {} | Segmente: {}",
                state.point_count(),
                curve.segment_count()
            ));

            ui.separator();

            let mesh = state.derived.mesh();
            ui.label(format!(
                "Mesh: {} Vertices, {} Dreiecke",
                mesh.vertex_count(),
                mesh.index_count() / 3
            ));

            if let Some(bounds) = state.derived.bounds() {
                ui.separator();
                ui.label(format!(
                    "Höhe: {:.1} cm | Ø {:.1} cm",
                    bounds.height_span(),
                    bounds.diameter()
                ));
            }

            ui.separator();
            ui.label(format!("Werkzeug: {}", state.profile.active_tool.label()));

            if state.pattern.is_busy() {
                ui.separator();
                ui.spinner();
                ui.label("Muster wird erzeugt …");
            } else if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
