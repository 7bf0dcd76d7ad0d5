//! Handler für Gesten-Lifecycle (Begin → Sample → Cancel).

use crate::app::gestures::GestureKind;
use crate::app::use_cases;
use crate::app::AppState;

/// Gesten-Taste gedrückt.
pub fn begin(state: &mut AppState, kind: GestureKind) {
    use_cases::transform::begin_gesture(state, kind);
}

/// Klick bei gehaltener Gesten-Taste.
pub fn record_sample(state: &mut AppState, kind: GestureKind, screen_pos: glam::Vec2) {
    use_cases::transform::record_sample(state, kind, screen_pos);
}

/// Gesten-Taste losgelassen.
pub fn cancel(state: &mut AppState, kind: GestureKind) {
    use_cases::transform::cancel_gesture(state, kind);
}
