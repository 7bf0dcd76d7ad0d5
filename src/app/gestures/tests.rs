use super::*;

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn first_sample_only_arms_the_gesture() {
    let mut gestures = GestureState::new();
    gestures.begin(GestureKind::Rotate);

    assert_eq!(gestures.sample(GestureKind::Rotate, v(10.0, 10.0)), None);
    assert!(gestures.tracker(GestureKind::Rotate).is_pending());
}

#[test]
fn rotate_chains_end_into_next_start() {
    let mut gestures = GestureState::new();
    gestures.begin(GestureKind::Rotate);

    gestures.sample(GestureKind::Rotate, v(0.0, 0.0));
    let first = gestures.sample(GestureKind::Rotate, v(1.0, 0.0));
    let second = gestures.sample(GestureKind::Rotate, v(1.0, 1.0));

    assert_eq!(
        first,
        Some(GestureSpan {
            kind: GestureKind::Rotate,
            start: v(0.0, 0.0),
            end: v(1.0, 0.0)
        })
    );
    assert_eq!(
        second,
        Some(GestureSpan {
            kind: GestureKind::Rotate,
            start: v(1.0, 0.0),
            end: v(1.0, 1.0)
        })
    );
}

#[test]
fn scale_restarts_after_commit() {
    let mut gestures = GestureState::new();
    gestures.begin(GestureKind::Scale);

    gestures.sample(GestureKind::Scale, v(10.0, 10.0));
    assert!(gestures.sample(GestureKind::Scale, v(20.0, 20.0)).is_some());
    assert_eq!(gestures.sample(GestureKind::Scale, v(30.0, 30.0)), None);
    assert_eq!(
        gestures.tracker(GestureKind::Scale).phase(),
        GesturePhase::Sampling {
            start: v(30.0, 30.0)
        }
    );
}

#[test]
fn cancel_discards_pending_start() {
    let mut gestures = GestureState::new();
    gestures.begin(GestureKind::Translate);
    gestures.sample(GestureKind::Translate, v(5.0, 5.0));

    gestures.cancel(GestureKind::Translate);

    assert_eq!(gestures.active(), None);
    assert_eq!(
        gestures.tracker(GestureKind::Translate).phase(),
        GesturePhase::Idle
    );

    gestures.begin(GestureKind::Translate);
    assert_eq!(gestures.sample(GestureKind::Translate, v(6.0, 6.0)), None);
}

#[test]
fn repeated_begin_keeps_pending_sample() {
    let mut gestures = GestureState::new();
    gestures.begin(GestureKind::Rotate);
    gestures.sample(GestureKind::Rotate, v(1.0, 2.0));

    gestures.begin(GestureKind::Rotate);

    assert!(gestures.tracker(GestureKind::Rotate).is_pending());
}

#[test]
fn switching_kind_resets_previous_tracker() {
    let mut gestures = GestureState::new();
    gestures.begin(GestureKind::Scale);
    gestures.sample(GestureKind::Scale, v(1.0, 2.0));

    gestures.begin(GestureKind::Rotate);

    assert_eq!(gestures.active(), Some(GestureKind::Rotate));
    assert_eq!(
        gestures.tracker(GestureKind::Scale).phase(),
        GesturePhase::Idle
    );
    assert_eq!(gestures.sample(GestureKind::Scale, v(3.0, 4.0)), None);
}

#[test]
fn only_scale_does_not_chain() {
    assert!(!GestureKind::Scale.chains());
    assert!(GestureKind::Rotate.chains());
    assert!(GestureKind::Translate.chains());
}
