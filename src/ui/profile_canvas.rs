//! Zeichenfläche für das 2D-Profil.
//!
//! Der Canvas arbeitet im Profil-Pixelraum: Ursprung unten links, y nach
//! oben, die linke Kante ist die Rotationsachse. Eingaben werden in diesen
//! Raum umgerechnet und als `AppIntent` weitergegeben.

use crate::app::{AppIntent, AppState};
use crate::core::{evaluate, ProfileCurve, UnitScale};
use glam::Vec2;

/// Stützpunkte pro Segment für die Kurvendarstellung.
const CURVE_STEPS_PER_SEGMENT: usize = 24;
/// Rasterabstand in cm.
const GRID_SPACING_UNITS: f32 = 5.0;

/// Bildschirmposition → Profil-Pixel (auf den Canvas begrenzt).
pub fn screen_to_profile(rect: egui::Rect, pos: egui::Pos2) -> Vec2 {
    let x = (pos.x - rect.left()).clamp(0.0, rect.width());
    let y = (rect.bottom() - pos.y).clamp(0.0, rect.height());
    Vec2::new(x, y)
}

/// Profil-Pixel → Bildschirmposition.
pub fn profile_to_screen(rect: egui::Rect, p: Vec2) -> egui::Pos2 {
    egui::pos2(rect.left() + p.x, rect.bottom() - p.y)
}

/// Polyline der Kurve in Profil-Pixeln.
pub fn curve_polyline(curve: &ProfileCurve, scale: UnitScale, steps_per_segment: usize) -> Vec<Vec2> {
    let steps = steps_per_segment.max(1);
    let mut points = Vec::with_capacity(curve.segment_count() * steps + 1);
    for (i, segment) in curve.segments.iter().enumerate() {
        // Startpunkt nur beim ersten Segment, sonst doppelt
        let first = if i == 0 { 0 } else { 1 };
        for k in first..=steps {
            let t = k as f32 / steps as f32;
            points.push(scale.to_pixels(evaluate(segment, t)));
        }
    }
    points
}

/// Rendert den Profil-Canvas und gibt erzeugte Events zurück.
pub fn render_profile_canvas(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let opts = &state.options;
    let size = egui::vec2(opts.canvas_width, opts.canvas_height);

    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

    if state.profile.canvas_size != [rect.width(), rect.height()] {
        events.push(AppIntent::CanvasResized {
            size: [rect.width(), rect.height()],
        });
    }

    collect_pointer_events(ui, &response, rect, state, &mut events);
    paint(ui.painter_at(rect), rect, state);

    events
}

fn collect_pointer_events(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    state: &AppState,
    events: &mut Vec<AppIntent>,
) {
    let (pressed, released, pointer) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
        )
    });

    if pressed && response.hovered() {
        if let Some(pos) = pointer {
            events.push(AppIntent::ProfilePointerPressed {
                pos: screen_to_profile(rect, pos),
            });
        }
    }

    if state.profile.dragging.is_some() && response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = pointer {
            if response.drag_delta() != egui::Vec2::ZERO {
                events.push(AppIntent::ProfilePointerDragged {
                    pos: screen_to_profile(rect, pos),
                });
            }
        }
    }

    if released && state.profile.dragging.is_some() {
        events.push(AppIntent::ProfilePointerReleased);
    }
}

fn paint(painter: egui::Painter, rect: egui::Rect, state: &AppState) {
    let opts = &state.options;
    let visuals = painter.ctx().style().visuals.clone();

    painter.rect_filled(rect, 0.0, visuals.extreme_bg_color);

    // Raster im cm-Abstand
    let step = opts.pixels_per_unit * GRID_SPACING_UNITS;
    if step >= 4.0 {
        let grid = egui::Stroke::new(1.0, visuals.faint_bg_color);
        let mut x = step;
        while x < rect.width() {
            painter.vline(rect.left() + x, rect.y_range(), grid);
            x += step;
        }
        let mut y = step;
        while y < rect.height() {
            painter.hline(rect.x_range(), rect.bottom() - y, grid);
            y += step;
        }
    }

    // Rotationsachse
    painter.add(egui::Shape::dashed_line(
        &[rect.left_top(), rect.left_bottom()],
        egui::Stroke::new(1.5, visuals.weak_text_color()),
        6.0,
        4.0,
    ));

    let polyline: Vec<egui::Pos2> = curve_polyline(
        state.derived.curve(),
        opts.unit_scale(),
        CURVE_STEPS_PER_SEGMENT,
    )
    .into_iter()
    .map(|p| profile_to_screen(rect, p))
    .collect();
    if polyline.len() >= 2 {
        painter.add(egui::Shape::line(
            polyline,
            egui::Stroke::new(opts.curve_stroke_px, super::color32(opts.curve_color)),
        ));
    }

    let points = &state.profile.points;
    for (i, &p) in points.points().iter().enumerate() {
        let color = if state.profile.selected == Some(i) {
            opts.selected_color
        } else if points.is_anchor(i) {
            opts.anchor_color
        } else {
            opts.point_color
        };
        painter.circle_filled(profile_to_screen(rect, p), opts.point_radius_px, super::color32(color));
    }

    painter.rect_stroke(
        rect,
        0.0,
        visuals.widgets.noninteractive.bg_stroke,
        egui::StrokeKind::Inside,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(20.0, 40.0), egui::vec2(300.0, 500.0))
    }

    #[test]
    fn screen_bottom_left_is_profile_origin() {
        let p = screen_to_profile(canvas(), egui::pos2(20.0, 540.0));
        assert_eq!(p, Vec2::ZERO);
    }

    #[test]
    fn conversion_round_trips_inside_canvas() {
        let rect = canvas();
        let p = Vec2::new(80.0, 125.0);
        let screen = profile_to_screen(rect, p);
        assert_eq!(screen, egui::pos2(100.0, 415.0));
        assert_eq!(screen_to_profile(rect, screen), p);
    }

    #[test]
    fn positions_outside_are_clamped_to_canvas() {
        let p = screen_to_profile(canvas(), egui::pos2(0.0, 0.0));
        assert_eq!(p, Vec2::new(0.0, 500.0));
    }

    #[test]
    fn polyline_passes_through_control_points() {
        let scale = UnitScale::default();
        let pixels = [
            Vec2::new(0.0, 50.0),
            Vec2::new(100.0, 250.0),
            Vec2::new(0.0, 450.0),
        ];
        let physical: Vec<Vec2> = pixels.iter().map(|&p| scale.to_physical(p)).collect();
        let curve = ProfileCurve::from_points(&physical);

        let line = curve_polyline(&curve, scale, 8);

        assert_eq!(line.len(), 2 * 8 + 1);
        assert_relative_eq!(line[0].y, 50.0, epsilon = 1e-3);
        assert_relative_eq!(line[8].x, 100.0, epsilon = 1e-3);
        assert_relative_eq!(line[16].y, 450.0, epsilon = 1e-3);
    }
}
