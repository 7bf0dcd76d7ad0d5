//! Transformations-Zustand und Ableitung von Transformationen aus Gesten-Samples.
//!
//! Rotation und Skalierung werden nicht in die Punktkoordinaten eingebacken,
//! sondern zur Zeichenzeit als Uniform angewendet. Die Translation dagegen
//! verschiebt die gespeicherten Punkte direkt (siehe `PointSetStore::translate_in_place`).

use super::{GeometryError, Viewport};
use glam::{Mat2, Vec2};

/// Zeichenzeit-Transformation der gesamten Punktmenge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Akkumulierte Rotation in Radiant (unbeschränkt, wird nicht auf [0, 2π) gefaltet)
    pub rotation: f32,
    /// Skalierung in x (wird pro Skalier-Geste überschrieben)
    pub scale_x: f32,
    /// Skalierung in y (wird pro Skalier-Geste überschrieben)
    pub scale_y: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl TransformState {
    /// Addiert einen Winkel zur bestehenden Rotation.
    pub fn rotate_by(&mut self, angle: f32) {
        self.rotation += angle;
    }

    /// Überschreibt beide Skalierungsfaktoren.
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale_x = scale.x;
        self.scale_y = scale.y;
    }

    /// Lineare Abbildung für den Shader: erst skalieren, dann rotieren.
    pub fn linear_map(&self) -> Mat2 {
        Mat2::from_angle(self.rotation) * Mat2::from_diagonal(Vec2::new(self.scale_x, self.scale_y))
    }

    /// Wendet die Zeichenzeit-Transformation auf einen Render-Raum-Punkt an.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.linear_map() * point
    }
}

/// Skalierungsfaktoren `(|B.x / A.x|, |B.y / A.y|)` aus zwei Roh-Pixel-Samples.
///
/// Verhältnis absoluter Pixelkoordinaten, kein Delta. Ein Null-Nenner
/// verwirft die Geste als `DegenerateGeometry`.
pub fn scale_from_samples(start: Vec2, end: Vec2) -> Result<Vec2, GeometryError> {
    if start.x == 0.0 || start.y == 0.0 {
        return Err(GeometryError::degenerate(format!(
            "Skalierung mit Startpunkt ({}, {}) auf einer Achse",
            start.x, start.y
        )));
    }
    let scale = (end / start).abs();
    if !scale.is_finite() {
        return Err(GeometryError::degenerate("Skalierungsfaktor nicht endlich"));
    }
    Ok(scale)
}

/// Winkel `atan2(B.y - A.y, B.x - A.x)` in Radiant.
pub fn rotation_from_samples(start: Vec2, end: Vec2) -> f32 {
    let d = end - start;
    d.y.atan2(d.x)
}

/// Pixel-Delta `B - A` als Render-Raum-Delta (`2·dx/W`, `-2·dy/H`).
pub fn translation_from_samples(
    start: Vec2,
    end: Vec2,
    viewport: Viewport,
) -> Result<Vec2, GeometryError> {
    viewport.pixel_delta_to_render(end - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn default_is_identity() {
        let t = TransformState::default();
        let p = t.apply(Vec2::new(0.3, -0.4));
        assert_relative_eq!(p.x, 0.3);
        assert_relative_eq!(p.y, -0.4);
    }

    #[test]
    fn scale_ratio_uses_absolute_coordinates() {
        let s = scale_from_samples(Vec2::new(100.0, 200.0), Vec2::new(-300.0, 100.0)).unwrap();
        assert_relative_eq!(s.x, 3.0);
        assert_relative_eq!(s.y, 0.5);
    }

    #[test]
    fn scale_with_zero_denominator_is_rejected() {
        assert!(scale_from_samples(Vec2::new(0.0, 10.0), Vec2::new(5.0, 5.0)).is_err());
        assert!(scale_from_samples(Vec2::new(10.0, 0.0), Vec2::new(5.0, 5.0)).is_err());
    }

    #[test]
    fn rotation_angle_follows_atan2() {
        assert_relative_eq!(rotation_from_samples(Vec2::ZERO, Vec2::new(1.0, 0.0)), 0.0);
        assert_relative_eq!(
            rotation_from_samples(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)),
            FRAC_PI_4
        );
        assert_relative_eq!(
            rotation_from_samples(Vec2::ZERO, Vec2::new(-1.0, 0.0)),
            PI
        );
    }

    #[test]
    fn rotation_is_never_wrapped() {
        let mut t = TransformState::default();
        for _ in 0..5 {
            t.rotate_by(PI);
        }
        assert_relative_eq!(t.rotation, 5.0 * PI, epsilon = 1e-5);
    }

    #[test]
    fn linear_map_scales_before_rotating() {
        let t = TransformState {
            rotation: FRAC_PI_2,
            scale_x: 2.0,
            scale_y: 1.0,
        };
        let p = t.apply(Vec2::new(1.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn translation_delta_on_hd_viewport() {
        let d = translation_from_samples(
            Vec2::new(200.0, 300.0),
            Vec2::new(300.0, 300.0),
            Viewport::new(1280.0, 720.0),
        )
        .unwrap();
        assert_relative_eq!(d.x, 0.15625);
        assert_relative_eq!(d.y, 0.0);
    }
}
