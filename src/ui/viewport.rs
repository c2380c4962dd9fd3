//! Viewport-Input der 3D-Vorschau: egui-Pointer → `CameraInput`-Intents.

use crate::app::AppIntent;
use crate::core::{CameraInput, PointerButton};
use glam::Vec2;

/// Merkt sich, ob der Pointer im letzten Frame über dem Viewport lag.
#[derive(Debug, Default)]
pub struct ViewportInput {
    pointer_inside: bool,
}

fn to_local(rect: egui::Rect, pos: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x - rect.left(), pos.y - rect.top())
}

impl ViewportInput {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Kamera-Eingaben aus egui und gibt AppIntents zurück.
    ///
    /// Positionen sind relativ zur linken oberen Viewport-Ecke (y nach unten).
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = response.rect;
        let inside = response.contains_pointer();

        let (latest, moving, scroll, pressed, released) = ui.input(|i| {
            let pressed = [
                (egui::PointerButton::Primary, PointerButton::Primary),
                (egui::PointerButton::Secondary, PointerButton::Secondary),
                (egui::PointerButton::Middle, PointerButton::Middle),
            ]
            .into_iter()
            .find(|(b, _)| i.pointer.button_pressed(*b))
            .map(|(_, b)| b);
            (
                i.pointer.latest_pos(),
                i.pointer.is_moving(),
                i.smooth_scroll_delta.y,
                pressed,
                i.pointer.any_released(),
            )
        });

        if response.double_clicked() {
            events.push(AppIntent::ViewportInput {
                input: CameraInput::DoubleClick,
            });
        } else if let (Some(button), Some(pos), true) = (pressed, latest, inside) {
            events.push(AppIntent::ViewportInput {
                input: CameraInput::PointerDown {
                    button,
                    pos: to_local(rect, pos),
                },
            });
        }

        if moving && inside {
            if let Some(pos) = latest {
                events.push(AppIntent::ViewportInput {
                    input: CameraInput::PointerMove {
                        pos: to_local(rect, pos),
                    },
                });
            }
        }

        if released {
            events.push(AppIntent::ViewportInput {
                input: CameraInput::PointerUp,
            });
        }

        if self.pointer_inside && !inside {
            events.push(AppIntent::ViewportInput {
                input: CameraInput::PointerLeave,
            });
        }
        self.pointer_inside = inside;

        if inside && scroll != 0.0 {
            // egui: positiv = nach oben scrollen → heranzoomen
            events.push(AppIntent::ViewportInput {
                input: CameraInput::Wheel { delta: -scroll },
            });
        }

        events
    }
}
