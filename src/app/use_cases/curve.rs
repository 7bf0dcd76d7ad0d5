//! Use-Case: Kurve abtasten, in den Viewport einpassen, Punktmenge ersetzen.

use crate::app::AppState;
use crate::core::{CurvePreset, GeometryError, PointSet, ViewportFitter};

/// Erzeugt die Punktmenge einer vordefinierten Kurve.
///
/// Ersetzt die bestehende Menge vollständig. Bei degenerierter Geometrie
/// bleibt der Zustand unverändert.
pub fn generate_curve(state: &mut AppState, preset: CurvePreset) {
    match build_curve(state, preset) {
        Ok(points) => {
            log::info!("Kurve '{}' erzeugt: {} Punkte", preset.label(), points.len());
            state.points.replace(points);
            state.ui.status_message = None;
        }
        Err(e) => {
            log::warn!("Kurve '{}' verworfen: {}", preset.label(), e);
            state.ui.status_message = Some(e.to_string());
        }
    }
}

fn build_curve(state: &AppState, preset: CurvePreset) -> Result<PointSet, GeometryError> {
    let raw = preset.sample()?;
    ViewportFitter::with_margin(state.view.viewport, state.options.fit_margin_px).fit(&raw)
}
