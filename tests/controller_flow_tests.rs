use amigurumi_profile_editor::core::{CameraInput, EditRejection, PointerButton};
use amigurumi_profile_editor::{AppCommand, AppController, AppIntent, AppState, ProfileTool};
use glam::Vec2;
use std::time::{Duration, Instant};

fn select_tool(controller: &mut AppController, state: &mut AppState, tool: ProfileTool) {
    controller
        .handle_intent(state, AppIntent::ProfileToolSelected { tool })
        .expect("Werkzeugwechsel sollte ohne Fehler durchlaufen");
}

fn press(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::ProfilePointerPressed {
                pos: Vec2::new(x, y),
            },
        )
        .expect("Pointer-Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    match state.command_log.last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_default_profile_yields_closed_mesh_of_expected_size() {
    let state = AppState::new();

    let curve = state.derived.curve();
    assert_eq!(curve.segment_count(), 4);
    assert_eq!(curve.start_radius, 0.0);
    assert_eq!(curve.end_radius, 0.0);

    let mesh = state.derived.mesh();
    assert_eq!(mesh.vertex_count(), 100 * 33);
    assert_eq!(mesh.index_count(), 99 * 32 * 6);
}

#[test]
fn test_add_tool_click_inserts_point_and_rebuilds_mesh() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let revision = state.derived.revision();

    press(&mut controller, &mut state, 95.0, 190.0);

    assert_eq!(state.point_count(), 6);
    assert_eq!(state.derived.curve().segment_count(), 5);
    assert!(state.derived.revision() > revision);
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::InsertControlPoint { .. })
    ));
}

#[test]
fn test_delete_tool_removes_third_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_tool(&mut controller, &mut state, ProfileTool::Delete);

    press(&mut controller, &mut state, 100.0, 250.0);

    assert_eq!(state.point_count(), 4);
    assert_eq!(state.derived.curve().segment_count(), 3);
    assert!(state.ui.status_message.is_none());
}

#[test]
fn test_delete_of_anchor_is_rejected_and_reported() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_tool(&mut controller, &mut state, ProfileTool::Delete);
    let before = state.profile.points.clone();

    press(&mut controller, &mut state, 0.0, 50.0);

    assert_eq!(state.profile.points, before);
    assert_eq!(
        state.ui.status_message,
        Some(EditRejection::AnchoredPoint.to_string())
    );
}

#[test]
fn test_delete_stops_at_three_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_tool(&mut controller, &mut state, ProfileTool::Delete);

    press(&mut controller, &mut state, 80.0, 125.0);
    press(&mut controller, &mut state, 80.0, 375.0);
    assert_eq!(state.point_count(), 3);

    press(&mut controller, &mut state, 100.0, 250.0);

    assert_eq!(state.point_count(), 3);
    assert_eq!(
        state.ui.status_message,
        Some(EditRejection::BelowMinimum.to_string())
    );
}

#[test]
fn test_move_tool_drag_sequence() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_tool(&mut controller, &mut state, ProfileTool::Move);

    press(&mut controller, &mut state, 99.0, 249.0);
    assert_eq!(state.profile.dragging, Some(2));

    controller
        .handle_intent(
            &mut state,
            AppIntent::ProfilePointerDragged {
                pos: Vec2::new(140.0, 260.0),
            },
        )
        .expect("Drag sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ProfilePointerReleased)
        .expect("Release sollte ohne Fehler durchlaufen");

    assert_eq!(state.profile.points.get(2), Some(Vec2::new(140.0, 260.0)));
    assert_eq!(state.profile.dragging, None);
    let bounds = state.derived.bounds().expect("Mesh vorhanden");
    assert!(bounds.max.x > 13.0);
}

#[test]
fn test_dragging_anchor_sideways_keeps_it_on_axis() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_tool(&mut controller, &mut state, ProfileTool::Move);

    press(&mut controller, &mut state, 0.0, 450.0);
    controller
        .handle_intent(
            &mut state,
            AppIntent::ProfilePointerDragged {
                pos: Vec2::new(60.0, 470.0),
            },
        )
        .expect("Drag sollte ohne Fehler durchlaufen");

    assert_eq!(state.profile.points.get(4), Some(Vec2::new(0.0, 470.0)));
    assert_eq!(state.derived.curve().end_radius, 0.0);
}

#[test]
fn test_camera_rotate_then_reset_is_idempotent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let initial = *state.camera.initial();

    for input in [
        CameraInput::PointerDown {
            button: PointerButton::Primary,
            pos: Vec2::new(100.0, 100.0),
        },
        CameraInput::PointerMove {
            pos: Vec2::new(160.0, 80.0),
        },
        CameraInput::PointerUp,
        CameraInput::Wheel { delta: 200.0 },
    ] {
        controller
            .handle_intent(&mut state, AppIntent::ViewportInput { input })
            .expect("Kamera-Intent sollte ohne Fehler durchlaufen");
    }
    assert_ne!(*state.camera.pose(), initial);

    controller
        .handle_intent(&mut state, AppIntent::ResetCameraRequested)
        .expect("Reset sollte ohne Fehler durchlaufen");
    let after_first = *state.camera.pose();
    controller
        .handle_intent(&mut state, AppIntent::ResetCameraRequested)
        .expect("Reset sollte ohne Fehler durchlaufen");

    assert_eq!(after_first, initial);
    assert_eq!(*state.camera.pose(), initial);
}

#[test]
fn test_pattern_request_flow_delivers_rows() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::GeneratePatternRequested)
        .expect("Musteranfrage sollte ohne Fehler durchlaufen");
    assert!(state.pattern.is_busy());

    let deadline = Instant::now() + Duration::from_secs(10);
    while !controller.poll_pattern(&mut state) {
        assert!(Instant::now() < deadline, "Muster kam nicht an");
        std::thread::sleep(Duration::from_millis(5));
    }

    let pattern = state.pattern.last.as_ref().expect("Muster vorhanden");
    assert!(pattern.row_count() > 0);
    assert_eq!(
        pattern.total_stitches,
        pattern.rows.iter().map(|r| r.stitch_count).sum::<usize>()
    );
    assert!(pattern.rows[0].magic_ring);

    // Nach einer Änderung gilt das Muster als veraltet
    press(&mut controller, &mut state, 95.0, 190.0);
    assert!(state.pattern.is_stale(state.derived.revision()));
}

#[test]
fn test_options_change_rebuilds_mesh_with_new_resolution() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut options = state.options.clone();
    options.sample_count = 20;
    options.radial_segments = 8;

    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("Optionen sollten ohne Fehler übernommen werden");

    assert_eq!(state.derived.mesh().vertex_count(), 20 * 9);
    assert_eq!(state.derived.samples().len(), 20);
}

#[test]
fn test_failed_options_save_propagates_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir()
        .join("amigurumi_missing_dir_for_options")
        .join("nested")
        .join("options.toml");

    let result = controller.handle_command(&mut state, AppCommand::SaveOptions { path });

    assert!(result.is_err());
    assert!(state.ui.status_message.is_some());
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::SaveOptions { .. })
    ));
}
