//! Optionen-Dialog für Geometrie, Darstellung, Kamera und Muster.

use crate::app::{AppIntent, AppState};
use crate::shared::options::{
    PATTERN_TIMEOUT_RANGE, RADIAL_SEGMENTS_MAX, SAMPLE_COUNT_MAX, STITCH_SIZE_RANGE,
};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Geometrie ───────────────────────────────────
                    ui.collapsing("Geometrie", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Abtastpunkte:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.sample_count)
                                        .range(2..=SAMPLE_COUNT_MAX),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Radiale Segmente:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.radial_segments)
                                        .range(3..=RADIAL_SEGMENTS_MAX),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Pixel pro cm:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pixels_per_unit)
                                        .range(1.0..=100.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });

                    // ── Zeichenfläche ────────────────────────────────
                    ui.collapsing("Zeichenfläche", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Breite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.canvas_width)
                                        .range(100.0..=1000.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Höhe (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.canvas_height)
                                        .range(100.0..=1500.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Pick-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.hit_radius_px)
                                        .range(2.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Punktradius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.point_radius_px)
                                        .range(1.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Linienstärke (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.curve_stroke_px)
                                        .range(0.5..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Kurve:", &mut opts.curve_color);
                        changed |= color_edit(ui, "Punkte:", &mut opts.point_color);
                        changed |= color_edit(ui, "Anker:", &mut opts.anchor_color);
                        changed |= color_edit(ui, "Ausgewählt:", &mut opts.selected_color);
                    });

                    // ── 3D-Vorschau ─────────────────────────────────
                    ui.collapsing("3D-Vorschau", |ui| {
                        changed |= color_edit(ui, "Mesh-Farbe:", &mut opts.mesh_color);
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.viewport_background);
                        ui.horizontal(|ui| {
                            ui.label("Rotation:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_rotate_sensitivity)
                                        .range(0.001..=0.1)
                                        .speed(0.001),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Verschieben:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_pan_sensitivity)
                                        .range(0.001..=1.0)
                                        .speed(0.001),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zoom:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_zoom_sensitivity)
                                        .range(0.0001..=0.01)
                                        .speed(0.0001),
                                )
                                .changed();
                        });
                    });

                    // ── Muster ──────────────────────────────────────
                    ui.collapsing("Muster", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Maschenbreite (cm):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pattern.stitch_width)
                                        .range(STITCH_SIZE_RANGE)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Maschenhöhe (cm):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pattern.stitch_height)
                                        .range(STITCH_SIZE_RANGE)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        changed |= ui
                            .checkbox(&mut opts.pattern.start_with_magic_ring, "Fadenring am Anfang")
                            .changed();
                        ui.horizontal(|ui| {
                            ui.label("Frist (s):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pattern_timeout_secs)
                                        .range(PATTERN_TIMEOUT_RANGE)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
