//! Lineare Abbildung eines Koordinatenbereichs in einen Zielbereich.
//!
//! Standardziel ist der Render-Raum `[-1, 1]`. Es wird nicht
//! geklemmt: Werte außerhalb des Quellbereichs landen außerhalb des Zielbereichs.

use super::GeometryError;

/// Untere Grenze des Render-Raums.
pub const RENDER_MIN: f32 = -1.0;
/// Obere Grenze des Render-Raums.
pub const RENDER_MAX: f32 = 1.0;

/// Abbildung `[source_min, source_max] → [target_min, target_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedCoordinate {
    source_min: f32,
    source_max: f32,
    target_min: f32,
    target_max: f32,
}

impl NormalizedCoordinate {
    /// Erstellt eine Abbildung in einen beliebigen Zielbereich.
    ///
    /// Ein leerer Quellbereich (`source_max == source_min`) ist
    /// `GeometryError::DegenerateGeometry`.
    pub fn new(
        source_max: f32,
        source_min: f32,
        target_min: f32,
        target_max: f32,
    ) -> Result<Self, GeometryError> {
        if source_max == source_min || !(source_max - source_min).is_finite() {
            return Err(GeometryError::degenerate(format!(
                "Quellbereich [{source_min}, {source_max}] hat keine Ausdehnung"
            )));
        }
        Ok(Self {
            source_min,
            source_max,
            target_min,
            target_max,
        })
    }

    /// Abbildung in den Render-Raum `[-1, 1]`.
    pub fn to_render_space(source_max: f32, source_min: f32) -> Result<Self, GeometryError> {
        Self::new(source_max, source_min, RENDER_MIN, RENDER_MAX)
    }

    /// Bildet einen Wert ab (ohne Klemmung).
    pub fn apply(&self, value: f32) -> f32 {
        (self.target_max - self.target_min)
            * ((value - self.source_min) / (self.source_max - self.source_min))
            + self.target_min
    }
}

/// Einmal-Abbildung `value` aus `[source_min, source_max]` nach `[target_min, target_max]`.
pub fn normalize(
    value: f32,
    source_max: f32,
    source_min: f32,
    target_min: f32,
    target_max: f32,
) -> Result<f32, GeometryError> {
    Ok(NormalizedCoordinate::new(source_max, source_min, target_min, target_max)?.apply(value))
}

/// Einmal-Abbildung in den Render-Raum `[-1, 1]`.
pub fn normalize_to_render(
    value: f32,
    source_max: f32,
    source_min: f32,
) -> Result<f32, GeometryError> {
    normalize(value, source_max, source_min, RENDER_MIN, RENDER_MAX)
}
