//! Punkt-Werttyp und geordnete Punktmenge.

use bytemuck::{Pod, Zeroable};

/// 2D-Punkt mit festem z = 0 (einheitliches Vertex-Layout `[f32; 3]`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    /// Erstellt einen Punkt in der Ebene (z = 0).
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Verschiebt den Punkt um ein Delta in der Ebene.
    pub fn translated(self, delta: glam::Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            z: self.z,
        }
    }
}

/// Geordnete Punktfolge. Die Einfügereihenfolge ist die Zeichenreihenfolge
/// (Line-Strip / Triangle-Fan), es wird nie dedupliziert.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Erstellt eine leere Punktmenge.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte in Zeichenreihenfolge.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iteriert über alle Punkte.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Hängt einen Punkt an.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Hängt alle Punkte einer anderen Menge hinten an.
    pub fn extend_from(&mut self, other: &PointSet) {
        self.points.extend_from_slice(&other.points);
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Mutable Sicht für In-Place-Transformationen (nur crate-intern).
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Flache Zahlenfolge `[x0, y0, z0, x1, ...]` für den Renderer.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    /// Bildet jeden Punkt ab und liefert eine neue Menge gleicher Reihenfolge.
    pub fn map(&self, f: impl Fn(Point) -> Point) -> PointSet {
        self.points.iter().copied().map(f).collect()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_layout_is_xyz_triples_in_insertion_order() {
        let set: PointSet = vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)].into();
        assert_eq!(set.as_flat(), &[1.0, 2.0, 0.0, 3.0, 4.0, 0.0]);
    }

    #[test]
    fn push_keeps_duplicates() {
        let mut set = PointSet::new();
        set.push(Point::new(0.5, 0.5));
        set.push(Point::new(0.5, 0.5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn map_preserves_order_and_z() {
        let set: PointSet = vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0)].into();
        let doubled = set.map(|p| Point::new(p.x * 2.0, p.y));
        assert_eq!(doubled.as_slice()[0], Point::new(2.0, 0.0));
        assert_eq!(doubled.as_slice()[1], Point::new(4.0, 0.0));
        assert!(doubled.iter().all(|p| p.z == 0.0));
    }
}
