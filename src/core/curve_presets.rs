//! Vordefinierte parametrische Kurven für die Kurven-Trigger #1–#6.

use super::curve::CurveDomain;
use super::{GeometryError, PointSet};
use std::f64::consts::PI;

/// Vordefinierte Kurve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvePreset {
    /// Ellipse `0.5·cos t`, `0.27·sin t`
    Ellipse,
    /// Lissajous-Figur `0.4·sin 3t`, `0.4·cos 2t`
    Lissajous,
    /// Epitrochoide R=0.3, r=0.1, d=0.2
    Epitrochoid,
    /// Hypotrochoide R=0.35, r=0.15, d=0.1
    Hypotrochoid,
    /// Schmetterlingskurve (Fay) über 12π
    Butterfly,
    /// Archimedische Spirale über 6π
    Spiral,
}

impl CurvePreset {
    /// Alle Presets in Trigger-Reihenfolge (#1 … #6).
    pub const ALL: [CurvePreset; 6] = [
        CurvePreset::Ellipse,
        CurvePreset::Lissajous,
        CurvePreset::Epitrochoid,
        CurvePreset::Hypotrochoid,
        CurvePreset::Butterfly,
        CurvePreset::Spiral,
    ];

    /// Preset zum 1-basierten Trigger-Index `k`.
    pub fn from_trigger(k: usize) -> Option<Self> {
        k.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Anzeigename
    pub fn label(self) -> &'static str {
        match self {
            CurvePreset::Ellipse => "Ellipse",
            CurvePreset::Lissajous => "Lissajous",
            CurvePreset::Epitrochoid => "Epitrochoide",
            CurvePreset::Hypotrochoid => "Hypotrochoide",
            CurvePreset::Butterfly => "Schmetterling",
            CurvePreset::Spiral => "Spirale",
        }
    }

    /// `(untere Grenze, obere Grenze, Sample-Anzahl)`
    pub fn bounds(self) -> (f64, f64, usize) {
        match self {
            CurvePreset::Ellipse => (0.0, 2.0 * PI, 300),
            CurvePreset::Lissajous => (0.0, 2.0 * PI, 200),
            CurvePreset::Epitrochoid => (0.0, 2.0 * PI, 300),
            CurvePreset::Hypotrochoid => (0.0, 2.0 * PI, 300),
            CurvePreset::Butterfly => (0.0, 12.0 * PI, 500),
            CurvePreset::Spiral => (0.0, 6.0 * PI, 300),
        }
    }

    /// x-Komponente `f(t)`
    pub fn x(self, t: f64) -> f64 {
        match self {
            CurvePreset::Ellipse => 0.5 * t.cos(),
            CurvePreset::Lissajous => 0.4 * (3.0 * t).sin(),
            CurvePreset::Epitrochoid => {
                let (big_r, r, d) = (0.3, 0.1, 0.2);
                (big_r + r) * t.cos() - d * ((big_r + r) * t / r).cos()
            }
            CurvePreset::Hypotrochoid => {
                let (big_r, r, d) = (0.35, 0.15, 0.1);
                (big_r - r) * t.cos() + d * ((big_r - r) * t / r).cos()
            }
            CurvePreset::Butterfly => 0.15 * t.sin() * butterfly_radius(t),
            CurvePreset::Spiral => 0.02 * t * t.cos(),
        }
    }

    /// y-Komponente `g(t)`
    pub fn y(self, t: f64) -> f64 {
        match self {
            CurvePreset::Ellipse => 0.27 * t.sin(),
            CurvePreset::Lissajous => 0.4 * (2.0 * t).cos(),
            CurvePreset::Epitrochoid => {
                let (big_r, r, d) = (0.3, 0.1, 0.2);
                (big_r + r) * t.sin() - d * ((big_r + r) * t / r).sin()
            }
            CurvePreset::Hypotrochoid => {
                let (big_r, r, d) = (0.35, 0.15, 0.1);
                (big_r - r) * t.sin() - d * ((big_r - r) * t / r).sin()
            }
            CurvePreset::Butterfly => 0.15 * t.cos() * butterfly_radius(t),
            CurvePreset::Spiral => 0.02 * t * t.sin(),
        }
    }

    /// Tastet das Preset über seinen Definitionsbereich ab (Rohpunkte, Modellraum).
    pub fn sample(self) -> Result<PointSet, GeometryError> {
        let (lower, upper, count) = self.bounds();
        Ok(CurveDomain::new(lower, upper, count)?.sample(|t| self.x(t), |t| self.y(t)))
    }
}

fn butterfly_radius(t: f64) -> f64 {
    t.cos().exp() - 2.0 * (4.0 * t).cos() - (t / 12.0).sin().powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_indices_are_one_based() {
        assert_eq!(CurvePreset::from_trigger(0), None);
        assert_eq!(CurvePreset::from_trigger(1), Some(CurvePreset::Ellipse));
        assert_eq!(CurvePreset::from_trigger(6), Some(CurvePreset::Spiral));
        assert_eq!(CurvePreset::from_trigger(7), None);
    }

    #[test]
    fn every_preset_samples_count_plus_one_finite_points() {
        for preset in CurvePreset::ALL {
            let (_, _, count) = preset.bounds();
            let points = preset.sample().unwrap();
            assert_eq!(points.len(), count + 1, "{}", preset.label());
            assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }

    #[test]
    fn spiral_starts_at_origin() {
        let points = CurvePreset::Spiral.sample().unwrap();
        assert_eq!(points.as_slice()[0].x, 0.0);
        assert_eq!(points.as_slice()[0].y, 0.0);
    }
}
