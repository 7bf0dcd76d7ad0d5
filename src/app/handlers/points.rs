//! Handler für Punktmenge, Kurven und Zeichenmodus.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CurvePreset, MirrorAxis, MirrorMode};

/// Hängt einen Punkt an der Pixelposition an.
pub fn add_point(state: &mut AppState, screen_pos: glam::Vec2) {
    use_cases::points::add_point(state, screen_pos);
}

/// Leert die Punktmenge.
pub fn clear(state: &mut AppState) {
    use_cases::points::clear(state);
}

/// Erzeugt eine vordefinierte Kurve.
pub fn generate_curve(state: &mut AppState, preset: CurvePreset) {
    use_cases::curve::generate_curve(state, preset);
}

/// Spiegelt die Punktmenge.
pub fn mirror(state: &mut AppState, axis: MirrorAxis, mode: MirrorMode) {
    use_cases::points::mirror(state, axis, mode);
}

/// Schaltet den Zeichenmodus weiter.
pub fn advance_render_mode(state: &mut AppState) {
    use_cases::points::advance_render_mode(state);
}
