//! Abtastung parametrischer Kurven `(f(t), g(t))`.

use super::{GeometryError, Point, PointSet};

/// Geprüfter Definitionsbereich einer Kurve: `[lower, upper]` mit `count` Intervallen.
///
/// Die Abtastung ist an beiden Enden geschlossen und liefert `count + 1` Punkte.
/// Bei periodischen Kurven mit Periode `upper - lower` sind erster und letzter
/// Punkt daher identisch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    lower: f64,
    upper: f64,
    count: usize,
}

impl CurveDomain {
    /// Validiert Grenzen und Sample-Anzahl vor jeder Abtastung.
    pub fn new(lower: f64, upper: f64, count: usize) -> Result<Self, GeometryError> {
        if count == 0 || !lower.is_finite() || !upper.is_finite() || upper <= lower {
            return Err(GeometryError::InvalidCurveDomain {
                lower,
                upper,
                count,
            });
        }
        Ok(Self {
            lower,
            upper,
            count,
        })
    }

    /// Anzahl der Intervalle (Punkte = `count + 1`).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Schrittweite `dn = (upper - lower) / count`.
    pub fn step(&self) -> f64 {
        (self.upper - self.lower) / self.count as f64
    }

    /// Parameterwert des i-ten Samples; das letzte Sample liegt exakt auf `upper`.
    pub fn parameter(&self, i: usize) -> f64 {
        if i >= self.count {
            self.upper
        } else {
            self.lower + i as f64 * self.step()
        }
    }

    /// Wertet `(f(t), g(t))` an allen `count + 1` Parameterwerten aus (z = 0).
    pub fn sample(&self, f: impl Fn(f64) -> f64, g: impl Fn(f64) -> f64) -> PointSet {
        log::info!(
            "Erzeuge {} Kurvenpunkte in [{}, {}], dn = {}",
            self.count + 1,
            self.lower,
            self.upper,
            self.step()
        );
        (0..=self.count)
            .map(|i| {
                let t = self.parameter(i);
                let (x, y) = (f(t), g(t));
                log::debug!("Punkt {}: t={}, x={}, y={}", i, t, x, y);
                Point::new(x as f32, y as f32)
            })
            .collect()
    }
}

/// Tastet `(f(t), g(t))` über `[lower, upper]` mit `count + 1` Samples ab.
pub fn sample_curve(
    lower: f64,
    upper: f64,
    f: impl Fn(f64) -> f64,
    g: impl Fn(f64) -> f64,
    count: usize,
) -> Result<PointSet, GeometryError> {
    Ok(CurveDomain::new(lower, upper, count)?.sample(f, g))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn yields_count_plus_one_points() {
        for count in [1, 2, 7, 300] {
            let set = sample_curve(0.0, 1.0, |t| t, |t| t * t, count).unwrap();
            assert_eq!(set.len(), count + 1);
        }
    }

    #[test]
    fn first_and_last_sample_hit_the_bounds() {
        let set = sample_curve(0.1, 0.3, |t| t, |_| 0.0, 3).unwrap();
        assert_relative_eq!(set.as_slice()[0].x, 0.1);
        assert_relative_eq!(set.as_slice()[3].x, 0.3);
    }

    #[test]
    fn samples_are_uniform_in_t() {
        let set = sample_curve(-2.0, 2.0, |t| t, |_| 0.0, 4).unwrap();
        let xs: Vec<f32> = set.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn full_period_duplicates_start_point() {
        let set = sample_curve(0.0, 2.0 * PI, f64::cos, f64::sin, 8).unwrap();
        let first = set.as_slice()[0];
        let last = set.as_slice()[8];
        assert_relative_eq!(first.x, last.x, epsilon = 1e-6);
        assert_relative_eq!(first.y, last.y, epsilon = 1e-6);
    }

    #[test]
    fn z_is_always_zero() {
        let set = sample_curve(0.0, 1.0, |t| t, |t| -t, 10).unwrap();
        assert!(set.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn rejects_invalid_domains() {
        assert!(matches!(
            sample_curve(1.0, 1.0, |t| t, |t| t, 10),
            Err(GeometryError::InvalidCurveDomain { .. })
        ));
        assert!(matches!(
            sample_curve(2.0, 1.0, |t| t, |t| t, 10),
            Err(GeometryError::InvalidCurveDomain { .. })
        ));
        assert!(matches!(
            sample_curve(0.0, 1.0, |t| t, |t| t, 0),
            Err(GeometryError::InvalidCurveDomain { .. })
        ));
        assert!(matches!(
            sample_curve(0.0, f64::INFINITY, |t| t, |t| t, 10),
            Err(GeometryError::InvalidCurveDomain { .. })
        ));
    }
}
