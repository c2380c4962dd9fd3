use crate::app::state::ProfileTool;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{CameraInput, PointerButton};
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn pointer_press_with_add_tool_inserts_point() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ProfilePointerPressed {
            pos: Vec2::new(50.0, 200.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::InsertControlPoint { pos } if pos == Vec2::new(50.0, 200.0)
    ));
}

#[test]
fn pointer_press_with_move_tool_begins_drag_with_hit_radius() {
    let mut state = AppState::new();
    state.profile.active_tool = ProfileTool::Move;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ProfilePointerPressed {
            pos: Vec2::new(80.0, 125.0),
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::BeginDragControlPoint { max_distance, .. } => {
            assert_eq!(*max_distance, state.options.hit_radius_px);
        }
        other => panic!("unerwarteter Command: {other:?}"),
    }
}

#[test]
fn pointer_press_with_delete_tool_deletes_nearest() {
    let mut state = AppState::new();
    state.profile.active_tool = ProfileTool::Delete;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ProfilePointerPressed {
            pos: Vec2::new(100.0, 250.0),
        },
    );

    assert!(matches!(
        commands.as_slice(),
        [AppCommand::DeleteControlPointAt { .. }]
    ));
}

#[test]
fn drag_without_grabbed_point_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ProfilePointerDragged {
            pos: Vec2::new(10.0, 10.0),
        },
    );
    assert!(commands.is_empty());

    let commands = map_intent_to_commands(&state, AppIntent::ProfilePointerReleased);
    assert!(commands.is_empty());
}

#[test]
fn drag_with_grabbed_point_moves_it() {
    let mut state = AppState::new();
    state.profile.dragging = Some(2);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ProfilePointerDragged {
            pos: Vec2::new(110.0, 260.0),
        },
    );

    assert!(matches!(
        commands.as_slice(),
        [AppCommand::MoveControlPoint { index: 2, .. }]
    ));

    let commands = map_intent_to_commands(&state, AppIntent::ProfilePointerReleased);
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::EndDragControlPoint]
    ));
}

#[test]
fn viewport_input_is_forwarded_to_camera() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportInput {
            input: CameraInput::PointerDown {
                button: PointerButton::Primary,
                pos: Vec2::ZERO,
            },
        },
    );

    assert!(matches!(
        commands.as_slice(),
        [AppCommand::ApplyCameraInput { .. }]
    ));
}

#[test]
fn unchanged_viewport_size_is_ignored() {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportResized {
            size: [800.0, 600.0],
        },
    );
    assert!(commands.is_empty());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportResized {
            size: [1024.0, 600.0],
        },
    );
    assert_eq!(commands.len(), 1);
}

#[test]
fn pattern_request_while_busy_is_dropped() {
    let mut state = AppState::new();
    state.pattern.pending = Some(crate::pattern::RequestId(1));

    let commands = map_intent_to_commands(&state, AppIntent::GeneratePatternRequested);
    assert!(commands.is_empty());
}

#[test]
fn exit_requested_maps_to_request_exit() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ExitRequested);

    assert!(matches!(commands.as_slice(), [AppCommand::RequestExit]));
}

#[test]
fn pointer_move_while_camera_idle_is_dropped() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportInput {
            input: CameraInput::PointerMove {
                pos: Vec2::new(5.0, 5.0),
            },
        },
    );

    assert!(commands.is_empty());
}
