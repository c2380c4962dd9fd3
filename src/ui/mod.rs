//! UI-Layer mit egui: Menü, Toolbar, Profil-Canvas, Viewport-Input, Dialoge.

pub mod menu;
pub mod options_dialog;
pub mod pattern_window;
pub mod profile_canvas;
pub mod status;
pub mod toolbar;
pub mod viewport;

pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use pattern_window::show_pattern_window;
pub use profile_canvas::render_profile_canvas;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
pub use viewport::ViewportInput;

/// `[f32; 4]` (RGBA, 0..1) → `Color32`.
pub(crate) fn color32(c: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
        (c[3] * 255.0) as u8,
    )
}
