use crate::app::events::PointerButton;
use crate::app::gestures::GestureKind;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{CurvePreset, MirrorAxis, MirrorMode};
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn primary_press_without_gesture_adds_point() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            button: PointerButton::Primary,
            screen_pos: Vec2::new(10.0, 20.0),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::AddPoint {
            screen_pos: Vec2::new(10.0, 20.0)
        }]
    );
}

#[test]
fn primary_press_with_held_gesture_key_records_sample() {
    let mut state = AppState::new();
    state.gestures.begin(GestureKind::Rotate);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            button: PointerButton::Primary,
            screen_pos: Vec2::new(3.0, 4.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::RecordGestureSample {
            kind: GestureKind::Rotate,
            ..
        }
    ));
}

#[test]
fn secondary_press_advances_render_mode() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            button: PointerButton::Secondary,
            screen_pos: Vec2::ZERO,
        },
    );

    assert_eq!(commands, vec![AppCommand::AdvanceRenderMode]);
}

#[test]
fn gesture_key_release_maps_to_cancel() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::GestureKeyReleased {
            kind: GestureKind::Scale,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::CancelGesture {
            kind: GestureKind::Scale
        }]
    );
}

#[test]
fn curve_and_mirror_intents_map_one_to_one() {
    let state = AppState::new();

    let curve = map_intent_to_commands(
        &state,
        AppIntent::GenerateCurveRequested {
            preset: CurvePreset::Lissajous,
        },
    );
    let mirror = map_intent_to_commands(
        &state,
        AppIntent::MirrorRequested {
            axis: MirrorAxis::OY,
            mode: MirrorMode::Replace,
        },
    );

    assert_eq!(
        curve,
        vec![AppCommand::GenerateCurve {
            preset: CurvePreset::Lissajous
        }]
    );
    assert_eq!(
        mirror,
        vec![AppCommand::Mirror {
            axis: MirrorAxis::OY,
            mode: MirrorMode::Replace
        }]
    );
}
