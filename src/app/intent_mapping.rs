//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::ProfileTool;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{CameraInput, CameraMode};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ProfilePointerPressed { pos } => {
            let max_distance = state.options.hit_radius_px;
            match state.profile.active_tool {
                ProfileTool::Add => vec![AppCommand::InsertControlPoint { pos }],
                ProfileTool::Move => {
                    vec![AppCommand::BeginDragControlPoint { pos, max_distance }]
                }
                ProfileTool::Delete => {
                    vec![AppCommand::DeleteControlPointAt { pos, max_distance }]
                }
            }
        }
        AppIntent::ProfilePointerDragged { pos } => match state.profile.dragging {
            Some(index) => vec![AppCommand::MoveControlPoint { index, pos }],
            None => vec![],
        },
        AppIntent::ProfilePointerReleased => {
            if state.profile.dragging.is_some() {
                vec![AppCommand::EndDragControlPoint]
            } else {
                vec![]
            }
        }
        AppIntent::ProfileToolSelected { tool } => vec![AppCommand::SetProfileTool { tool }],
        AppIntent::ProfileResetRequested => vec![AppCommand::ResetProfile],
        AppIntent::ProfileRestoreRequested { points } => {
            vec![AppCommand::RestoreControlPoints { points }]
        }
        AppIntent::CanvasResized { size } => {
            if size == state.profile.canvas_size {
                vec![]
            } else {
                vec![AppCommand::SetCanvasSize { size }]
            }
        }

        AppIntent::ViewportInput { input } => {
            // Bewegen/Loslassen ohne laufende Interaktion ändert nichts
            let idle_noop = matches!(
                input,
                CameraInput::PointerMove { .. } | CameraInput::PointerUp | CameraInput::PointerLeave
            ) && state.camera.mode() == CameraMode::Idle;
            if idle_noop {
                vec![]
            } else {
                vec![AppCommand::ApplyCameraInput { input }]
            }
        }
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ViewportResized { size } => {
            if size == state.view.viewport_size {
                vec![]
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }

        AppIntent::GeneratePatternRequested => {
            if state.pattern.is_busy() {
                vec![]
            } else {
                vec![AppCommand::RequestPattern]
            }
        }
        AppIntent::PatternWindowClosed => vec![AppCommand::ClosePatternWindow],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions {
            options: Box::new(options),
        }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions {
            path: crate::shared::EditorOptions::config_path(),
        }],

        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
