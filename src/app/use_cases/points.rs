//! Use-Cases für die Punktmenge: Hinzufügen, Leeren, Spiegeln, Zeichenmodus.

use crate::app::AppState;
use crate::core::{MirrorAxis, MirrorMode};
use glam::Vec2;

/// Hängt einen Punkt an der Viewport-Pixelposition an.
///
/// Bei degeneriertem Viewport bleibt die Punktmenge unverändert.
pub fn add_point(state: &mut AppState, screen_pos: Vec2) {
    match state.view.viewport.pixel_to_render(screen_pos) {
        Ok(point) => {
            log::debug!(
                "Punkt hinzugefügt: Pixel ({}, {}) -> ({}, {})",
                screen_pos.x,
                screen_pos.y,
                point.x,
                point.y
            );
            state.points.push(point);
            state.ui.status_message = None;
        }
        Err(e) => {
            log::warn!("Punkt verworfen: {}", e);
            state.ui.status_message = Some(e.to_string());
        }
    }
}

/// Entfernt alle Punkte. Zeichenmodus und Transformation bleiben erhalten.
pub fn clear(state: &mut AppState) {
    log::info!("{} Punkte entfernt", state.points.len());
    state.points.clear();
}

/// Spiegelt die Punktmenge an einer Achse.
pub fn mirror(state: &mut AppState, axis: MirrorAxis, mode: MirrorMode) {
    state.points.apply_mirror(axis, mode);
    log::info!(
        "Gespiegelt ({:?}, {:?}): {} Punkte",
        axis,
        mode,
        state.points.len()
    );
}

/// Schaltet den Zeichenmodus einen Schritt weiter.
pub fn advance_render_mode(state: &mut AppState) {
    state.render_mode.advance();
    log::info!("Zeichenmodus: {}", state.render_mode.label());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point, RenderMode, Viewport};
    use approx::assert_relative_eq;

    #[test]
    fn add_point_maps_pixels_to_render_space() {
        let mut state = AppState::new();
        state.view.viewport = Viewport::new(800.0, 600.0);

        add_point(&mut state, Vec2::new(0.0, 0.0));
        add_point(&mut state, Vec2::new(400.0, 450.0));

        let pts = state.points.points().as_slice();
        assert_relative_eq!(pts[0].x, -1.0);
        assert_relative_eq!(pts[0].y, 1.0);
        assert_relative_eq!(pts[1].x, 0.0);
        assert_relative_eq!(pts[1].y, -0.5);
        assert_eq!(pts[1].z, 0.0);
    }

    #[test]
    fn add_point_on_zero_viewport_is_noop() {
        let mut state = AppState::new();
        state.view.viewport = Viewport::new(0.0, 600.0);

        add_point(&mut state, Vec2::new(10.0, 10.0));

        assert!(state.points.is_empty());
        assert!(state.ui.status_message.is_some());
    }

    #[test]
    fn placed_point_clears_previous_warning() {
        let mut state = AppState::new();
        state.view.viewport = Viewport::new(0.0, 600.0);
        add_point(&mut state, Vec2::new(10.0, 10.0));
        assert!(state.ui.status_message.is_some());

        state.view.viewport = Viewport::new(800.0, 600.0);
        add_point(&mut state, Vec2::new(10.0, 10.0));

        assert_eq!(state.points.len(), 1);
        assert!(state.ui.status_message.is_none());
    }

    #[test]
    fn clear_keeps_render_mode_and_transform() {
        let mut state = AppState::new();
        state.points.push(Point::new(0.5, 0.5));
        state.render_mode = RenderMode::Polygon;
        state.transform.rotate_by(1.0);

        clear(&mut state);

        assert!(state.points.is_empty());
        assert_eq!(state.render_mode, RenderMode::Polygon);
        assert_eq!(state.transform.rotation, 1.0);
    }
}
