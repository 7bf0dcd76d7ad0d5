//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        points: state.points.snapshot(),
        render_mode: state.render_mode,
        transform: state.transform,
        viewport_size,
        point_size: state.options.point_size_px,
        point_color: state.options.point_color,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{Point, RenderMode};
    use std::sync::Arc;

    #[test]
    fn build_shares_point_snapshot() {
        let mut state = AppState::new();
        state.points.push(Point::new(0.1, 0.1));
        state.render_mode = RenderMode::Lines;

        let scene = build(&state, [800.0, 600.0]);

        assert!(Arc::ptr_eq(&scene.points, &state.points.snapshot()));
        assert_eq!(scene.render_mode, RenderMode::Lines);
        assert_eq!(scene.viewport_size, [800.0, 600.0]);
        assert!(!scene.has_geometry());
    }
}
