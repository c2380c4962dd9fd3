//! Amigurumi Profile Editor.
//!
//! Profil zeichnen, Rotationskörper in 3D ansehen und daraus ein
//! Häkelmuster erzeugen lassen. egui + wgpu.

use amigurumi_profile_editor::pattern::endpoint;
use amigurumi_profile_editor::{
    render, ui, AppController, AppIntent, AppState, ControlPointSet, EditorOptions,
};
use eframe::egui;
use eframe::egui_wgpu;

/// Schlüssel der Kontrollpunkte im eframe-Speicher.
const STORAGE_KEY_POINTS: &str = "control_points";

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Amigurumi Profile Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Amigurumi Profile Editor"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: render::MSAA_SAMPLES as u16,
            depth_buffer: 24,
            ..Default::default()
        };

        eframe::run_native(
            "Amigurumi Profile Editor",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                let saved_points = cc
                    .storage
                    .and_then(|s| eframe::get_value::<ControlPointSet>(s, STORAGE_KEY_POINTS));
                Ok(Box::new(EditorApp::new(render_state, saved_points)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: std::sync::Arc<std::sync::Mutex<render::Renderer>>,
    viewport_input: ui::ViewportInput,
}

impl EditorApp {
    fn new(render_state: &egui_wgpu::RenderState, saved_points: Option<ControlPointSet>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut app = Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer: std::sync::Arc::new(std::sync::Mutex::new(render::Renderer::new(
                render_state,
            ))),
            viewport_input: ui::ViewportInput::new(),
        };

        if let Some(points) = saved_points {
            app.process_events(vec![AppIntent::ProfileRestoreRequested { points }]);
        }

        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let pattern_changed = self.controller.poll_pattern(&mut self.state);

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events || pattern_changed);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, STORAGE_KEY_POINTS, &self.state.profile.points);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        endpoint::shutdown();
        let path = EditorOptions::config_path();
        if let Err(e) = self.state.options.save_to_file(&path) {
            log::error!("Optionen konnten nicht gespeichert werden: {:#}", e);
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_options_dialog(ctx, &self.state));
        events.extend(ui::show_pattern_window(ctx, &self.state));

        egui::SidePanel::left("profile_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Profil");
                egui::ScrollArea::both().show(ui, |ui| {
                    events.extend(ui::render_profile_canvas(ui, &self.state));
                });
            });

        let background = self.state.options.viewport_background;
        let fill = egui::Rgba::from_rgba_unmultiplied(
            background[0],
            background[1],
            background[2],
            background[3],
        );

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(fill.into()))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];
                events.push(AppIntent::ViewportResized {
                    size: viewport_size,
                });
                events.extend(self.viewport_input.collect_viewport_events(ui, &response));

                let render_data = render::WgpuRenderData {
                    scene: self
                        .controller
                        .build_render_scene(&self.state, viewport_size),
                };

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        render_data,
                    },
                );

                ui.painter().add(callback);

                if self.state.derived.mesh().is_empty() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Kein Mesh: Profil braucht mindestens zwei Punkte",
                        egui::FontId::proportional(18.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
        // Auf die Musterantwort warten, ohne dass der Nutzer die Maus bewegt
        if self.state.pattern.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
