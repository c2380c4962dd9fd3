//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Profil ===
            AppCommand::SetProfileTool { tool } => handlers::editing::set_profile_tool(state, tool),
            AppCommand::InsertControlPoint { pos } => handlers::editing::insert_point(state, pos),
            AppCommand::BeginDragControlPoint { pos, max_distance } => {
                handlers::editing::begin_drag(state, pos, max_distance)
            }
            AppCommand::MoveControlPoint { index, pos } => {
                handlers::editing::move_point(state, index, pos)
            }
            AppCommand::EndDragControlPoint => handlers::editing::end_drag(state),
            AppCommand::DeleteControlPointAt { pos, max_distance } => {
                handlers::editing::delete_point_at(state, pos, max_distance)
            }
            AppCommand::ResetProfile => handlers::editing::reset_profile(state),
            AppCommand::RestoreControlPoints { points } => {
                handlers::editing::restore_points(state, points)
            }
            AppCommand::SetCanvasSize { size } => handlers::editing::set_canvas_size(state, size),

            // === Kamera & Viewport ===
            AppCommand::ApplyCameraInput { input } => {
                handlers::view::apply_camera_input(state, input)
            }
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Muster ===
            AppCommand::RequestPattern => handlers::pattern::request(state),
            AppCommand::ClosePatternWindow => handlers::pattern::close_window(state),

            // === Dialoge & Anwendung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, *options),
            AppCommand::ResetOptions => handlers::dialog::reset_options(state),
            AppCommand::SaveOptions { path } => handlers::dialog::save_options(state, &path)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Holt fertige Musterantworten ab (einmal pro Frame aufrufen).
    ///
    /// Gibt `true` zurück, wenn sich der Musterzustand geändert hat.
    pub fn poll_pattern(&mut self, state: &mut AppState) -> bool {
        super::use_cases::pattern::poll_pattern(state)
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
