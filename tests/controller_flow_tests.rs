use bezier_polar_studio::{AdjustDirection, AppCommand, AppController, AppIntent, AppState};
use glam::DVec2;

#[test]
fn test_canvas_click_adds_control_point_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasClicked {
                pos: DVec2::new(120.0, 80.0),
            },
        )
        .expect("CanvasClicked sollte ohne Fehler durchlaufen");

    assert_eq!(state.point_count(), 1);
    assert_eq!(state.scene.control_points()[0], DVec2::new(120.0, 80.0));

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::AddControlPoint { pos } => {
            assert_eq!(*pos, DVec2::new(120.0, 80.0));
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_clear_points_requested_removes_points_but_keeps_tuning() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for pos in [DVec2::new(0.0, 0.0), DVec2::new(50.0, 50.0)] {
        controller
            .handle_intent(&mut state, AppIntent::CanvasClicked { pos })
            .expect("CanvasClicked sollte ohne Fehler durchlaufen");
    }
    controller
        .handle_intent(
            &mut state,
            AppIntent::BlendAdjustRequested {
                direction: AdjustDirection::Increase,
            },
        )
        .expect("BlendAdjustRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::LevelAdjustRequested {
                direction: AdjustDirection::Increase,
            },
        )
        .expect("LevelAdjustRequested sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::ClearPointsRequested)
        .expect("ClearPointsRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.point_count(), 0);
    // Leeren betrifft nur die Punkte, nicht die Parameter
    assert_eq!(state.scene.blend(), 0.6);
    assert_eq!(state.scene.polar_level(), 2);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::ClearControlPoints => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_blend_adjust_saturates_at_one() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..8 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::BlendAdjustRequested {
                    direction: AdjustDirection::Increase,
                },
            )
            .expect("BlendAdjustRequested sollte ohne Fehler durchlaufen");
    }

    // Sättigung liefert exakt 1.0
    assert_eq!(state.scene.blend(), 1.0);
}

#[test]
fn test_blend_adjust_saturates_at_zero() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..8 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::BlendAdjustRequested {
                    direction: AdjustDirection::Decrease,
                },
            )
            .expect("BlendAdjustRequested sollte ohne Fehler durchlaufen");
    }

    assert_eq!(state.scene.blend(), 0.0);
}

#[test]
fn test_level_adjust_does_not_drop_below_one() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..3 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::LevelAdjustRequested {
                    direction: AdjustDirection::Decrease,
                },
            )
            .expect("LevelAdjustRequested sollte ohne Fehler durchlaufen");
    }

    assert_eq!(state.scene.polar_level(), 1);

    controller
        .handle_intent(
            &mut state,
            AppIntent::LevelAdjustRequested {
                direction: AdjustDirection::Increase,
            },
        )
        .expect("LevelAdjustRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.scene.polar_level(), 2);
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

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_command_log_records_commands_in_order() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasClicked {
                pos: DVec2::new(10.0, 10.0),
            },
        )
        .expect("CanvasClicked sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::BlendAdjustRequested {
                direction: AdjustDirection::Increase,
            },
        )
        .expect("BlendAdjustRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::LevelAdjustRequested {
                direction: AdjustDirection::Decrease,
            },
        )
        .expect("LevelAdjustRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ClearPointsRequested)
        .expect("ClearPointsRequested sollte ohne Fehler durchlaufen");

    match state.command_log.entries() {
        [
            AppCommand::AddControlPoint { .. },
            AppCommand::IncreaseBlend,
            AppCommand::DecreaseLevel,
            AppCommand::ClearControlPoints,
        ] => {}
        other => panic!("Unerwartete Command-Folge: {other:?}"),
    }
}

// ═══════════════════════════════════════════════════════════════════
// End-to-End: Klicks bis zum fertigen Render-Plan
// ═══════════════════════════════════════════════════════════════════

fn place_triangle(controller: &mut AppController, state: &mut AppState) {
    for pos in [
        DVec2::new(0.0, 0.0),
        DVec2::new(100.0, 0.0),
        DVec2::new(100.0, 100.0),
    ] {
        controller
            .handle_intent(&mut *state, AppIntent::CanvasClicked { pos })
            .expect("CanvasClicked sollte ohne Fehler durchlaufen");
    }
}

#[test]
fn test_three_point_flow_produces_base_curve_and_first_polar() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place_triangle(&mut controller, &mut state);

    let plan = controller.build_render_plan(&state);

    // Basiskurve plus genau eine Polare (Stufe 1)
    assert_eq!(plan.polylines.len(), 2);
    assert_eq!(plan.markers.len(), 3);

    // Die Polare zu t₁ = 0.5 läuft von (50, 0) nach (100, 50), exakt
    let polar = &plan.polylines[1];
    assert_eq!(polar.points.first(), Some(&DVec2::new(50.0, 0.0)));
    assert_eq!(polar.points.last(), Some(&DVec2::new(100.0, 50.0)));
}

#[test]
fn test_full_interaction_workflow() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place_triangle(&mut controller, &mut state);

    // Stufe auf 2 erhöhen: bei 3 Punkten bricht die Kette nach Stufe 1 ab
    controller
        .handle_intent(
            &mut state,
            AppIntent::LevelAdjustRequested {
                direction: AdjustDirection::Increase,
            },
        )
        .expect("LevelAdjustRequested sollte ohne Fehler durchlaufen");

    let plan = controller.build_render_plan(&state);
    assert_eq!(plan.polar_level, 2);
    assert_eq!(plan.polylines.len(), 2);

    // t₁ verschieben und neu planen: Polare wandert mit
    controller
        .handle_intent(
            &mut state,
            AppIntent::BlendAdjustRequested {
                direction: AdjustDirection::Increase,
            },
        )
        .expect("BlendAdjustRequested sollte ohne Fehler durchlaufen");

    let shifted = controller.build_render_plan(&state);
    assert_eq!(shifted.polylines[0], plan.polylines[0]);
    assert_ne!(shifted.polylines[1], plan.polylines[1]);

    // Leeren: keine Kurven mehr, Parameter bleiben
    controller
        .handle_intent(&mut state, AppIntent::ClearPointsRequested)
        .expect("ClearPointsRequested sollte ohne Fehler durchlaufen");

    let cleared = controller.build_render_plan(&state);
    assert!(!cleared.has_polylines());
    assert!(cleared.markers.is_empty());
    assert_eq!(cleared.blend, 0.6);
    assert_eq!(cleared.polar_level, 2);
}
