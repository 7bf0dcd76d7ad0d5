//! Use-Cases für affine Gesten: Skalieren, Rotieren, Verschieben.

use crate::app::gestures::{GestureKind, GestureSpan};
use crate::app::AppState;
use crate::core::transform::{rotation_from_samples, scale_from_samples, translation_from_samples};
use glam::Vec2;

/// Aktiviert eine Gesten-Art (Taste gedrückt).
pub fn begin_gesture(state: &mut AppState, kind: GestureKind) {
    if state.gestures.active() != Some(kind) {
        log::debug!("Geste aktiv: {}", kind.label());
    }
    state.gestures.begin(kind);
}

/// Beendet eine Geste (Taste losgelassen). Ein offenes Sample wird verworfen.
pub fn cancel_gesture(state: &mut AppState, kind: GestureKind) {
    if state.gestures.tracker(kind).is_pending() {
        log::debug!("Offene Geste '{}' verworfen", kind.label());
    }
    state.gestures.cancel(kind);
}

/// Erfasst ein Sample und wendet die Geste an, sobald sie committet.
pub fn record_sample(state: &mut AppState, kind: GestureKind, screen_pos: Vec2) {
    if let Some(span) = state.gestures.sample(kind, screen_pos) {
        apply_span(state, span);
    }
}

/// Wendet eine committete Spanne auf den Zustand an.
pub fn apply_span(state: &mut AppState, span: GestureSpan) {
    let GestureSpan { kind, start, end } = span;
    if start == end {
        log::info!("Geste '{}' mit identischen Samples ignoriert", kind.label());
        return;
    }

    match kind {
        GestureKind::Scale => match scale_from_samples(start, end) {
            Ok(scale) => {
                log::info!("Skalierung: sx={}, sy={}", scale.x, scale.y);
                state.transform.set_scale(scale);
                state.ui.status_message = None;
            }
            Err(e) => reject(state, kind, e),
        },
        GestureKind::Rotate => {
            let angle = rotation_from_samples(start, end);
            log::info!("Rotation: {} rad ({}°)", angle, angle.to_degrees());
            state.transform.rotate_by(angle);
            state.ui.status_message = None;
        }
        GestureKind::Translate => {
            match translation_from_samples(start, end, state.view.viewport) {
                Ok(delta) => {
                    log::info!("Verschiebung: dx={}, dy={}", delta.x, delta.y);
                    state.points.translate_in_place(delta);
                    state.ui.status_message = None;
                }
                Err(e) => reject(state, kind, e),
            }
        }
    }
}

fn reject(state: &mut AppState, kind: GestureKind, error: crate::core::GeometryError) {
    log::warn!("Geste '{}' verworfen: {}", kind.label(), error);
    state.ui.status_message = Some(error.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point, TransformState};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn span(kind: GestureKind, start: (f32, f32), end: (f32, f32)) -> GestureSpan {
        GestureSpan {
            kind,
            start: Vec2::new(start.0, start.1),
            end: Vec2::new(end.0, end.1),
        }
    }

    #[test]
    fn scale_overwrites_previous_factors() {
        let mut state = AppState::new();

        apply_span(&mut state, span(GestureKind::Scale, (100.0, 100.0), (200.0, 50.0)));
        apply_span(&mut state, span(GestureKind::Scale, (100.0, 100.0), (300.0, 100.0)));

        assert_relative_eq!(state.transform.scale_x, 3.0);
        assert_relative_eq!(state.transform.scale_y, 1.0);
    }

    #[test]
    fn scale_with_zero_start_axis_is_rejected() {
        let mut state = AppState::new();

        apply_span(&mut state, span(GestureKind::Scale, (0.0, 100.0), (50.0, 50.0)));

        assert_eq!(state.transform, TransformState::default());
        assert!(state.ui.status_message.is_some());
    }

    #[test]
    fn successful_gesture_clears_previous_warning() {
        let mut state = AppState::new();

        apply_span(&mut state, span(GestureKind::Scale, (0.0, 100.0), (50.0, 50.0)));
        assert!(state.ui.status_message.is_some());

        apply_span(&mut state, span(GestureKind::Rotate, (0.0, 0.0), (10.0, 0.0)));
        assert!(state.ui.status_message.is_none());
    }

    #[test]
    fn rotation_accumulates() {
        let mut state = AppState::new();

        apply_span(&mut state, span(GestureKind::Rotate, (0.0, 0.0), (0.0, 10.0)));
        apply_span(&mut state, span(GestureKind::Rotate, (0.0, 0.0), (0.0, 10.0)));

        assert_relative_eq!(state.transform.rotation, 2.0 * FRAC_PI_2);
    }

    #[test]
    fn identical_samples_leave_state_unchanged() {
        let mut state = AppState::new();
        state.points.push(Point::new(0.1, 0.1));

        for kind in GestureKind::ALL {
            apply_span(&mut state, span(kind, (5.0, 5.0), (5.0, 5.0)));
        }

        assert_eq!(state.transform, TransformState::default());
        assert_eq!(state.points.points().as_slice()[0], Point::new(0.1, 0.1));
    }

    #[test]
    fn translate_moves_points_in_render_space() {
        let mut state = AppState::new();
        state.points.push(Point::new(0.0, 0.0));

        apply_span(
            &mut state,
            span(GestureKind::Translate, (100.0, 100.0), (200.0, 136.0)),
        );

        let p = state.points.points().as_slice()[0];
        assert_relative_eq!(p.x, 0.15625);
        assert_relative_eq!(p.y, -0.1);
    }

    #[test]
    fn record_sample_without_active_gesture_is_ignored() {
        let mut state = AppState::new();

        record_sample(&mut state, GestureKind::Rotate, Vec2::new(1.0, 0.0));
        record_sample(&mut state, GestureKind::Rotate, Vec2::new(2.0, 5.0));

        assert_eq!(state.transform.rotation, 0.0);
    }
}
