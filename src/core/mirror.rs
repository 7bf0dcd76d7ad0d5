//! Zustandslose Spiegelungen an OX, OY und dem Ursprung.

use super::{Point, PointSet};

/// Spiegelachse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorAxis {
    /// An der x-Achse: `(x, y) → (x, -y)`
    OX,
    /// An der y-Achse: `(x, y) → (-x, y)`
    OY,
    /// Am Ursprung: `(x, y) → (-x, -y)`
    Origin,
}

impl MirrorAxis {
    /// Spiegelt einen einzelnen Punkt (z bleibt erhalten).
    pub fn apply(self, p: Point) -> Point {
        let (x, y) = match self {
            MirrorAxis::OX => (p.x, -p.y),
            MirrorAxis::OY => (-p.x, p.y),
            MirrorAxis::Origin => (-p.x, -p.y),
        };
        Point { x, y, z: p.z }
    }
}

/// Ob die gespiegelten Punkte die Menge ersetzen oder angehängt werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MirrorMode {
    /// Gespiegelte Menge ersetzt die aktuelle
    #[default]
    Replace,
    /// Gespiegelte Punkte werden hinter den Originalen angehängt
    Append,
}

/// Liefert eine neue, gespiegelte Punktmenge.
pub fn mirrored(points: &PointSet, axis: MirrorAxis) -> PointSet {
    points.map(|p| axis.apply(p))
}

/// Kombiniert Original und Spiegelung gemäß `mode`.
pub fn mirror(points: &PointSet, axis: MirrorAxis, mode: MirrorMode) -> PointSet {
    let reflected = mirrored(points, axis);
    match mode {
        MirrorMode::Replace => reflected,
        MirrorMode::Append => {
            let mut combined = points.clone();
            combined.extend_from(&reflected);
            combined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PointSet {
        vec![
            Point::new(0.25, -0.5),
            Point::new(-0.75, 0.125),
            Point::new(0.0, 0.9),
        ]
        .into()
    }

    #[test]
    fn single_point_reflections() {
        let p = Point::new(0.3, 0.6);
        assert_eq!(MirrorAxis::OX.apply(p), Point::new(0.3, -0.6));
        assert_eq!(MirrorAxis::OY.apply(p), Point::new(-0.3, 0.6));
        assert_eq!(MirrorAxis::Origin.apply(p), Point::new(-0.3, -0.6));
    }

    #[test]
    fn replace_twice_is_identity_for_every_axis() {
        for axis in [MirrorAxis::OX, MirrorAxis::OY, MirrorAxis::Origin] {
            let once = mirror(&sample(), axis, MirrorMode::Replace);
            let twice = mirror(&once, axis, MirrorMode::Replace);
            assert_eq!(twice, sample(), "Achse {:?}", axis);
        }
    }

    #[test]
    fn append_doubles_and_keeps_originals_first() {
        let combined = mirror(&sample(), MirrorAxis::OY, MirrorMode::Append);
        assert_eq!(combined.len(), 6);
        assert_eq!(&combined.as_slice()[..3], sample().as_slice());
        assert_eq!(combined.as_slice()[3], Point::new(-0.25, -0.5));
    }
}
