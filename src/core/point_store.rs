//! Besitzer der lebenden Punktmenge.
//!
//! Zwei klar getrennte Mutationsverträge:
//! - **Ersetzen** (`replace`, `apply_mirror`, `clear`): die ganze Menge wird neu gesetzt
//! - **In-Place** (`translate_in_place`): jeder gespeicherte Punkt wird direkt verschoben
//!
//! Die Menge liegt in einem `Arc`, damit der Renderer pro Frame einen stabilen
//! Snapshot in O(1) klonen kann (Copy-on-Write bei der nächsten Mutation).

use super::mirror::{mirror, MirrorAxis, MirrorMode};
use super::{Point, PointSet};
use glam::Vec2;
use std::sync::Arc;

/// Exklusiver Besitzer der geordneten Punktmenge.
#[derive(Debug, Clone, Default)]
pub struct PointSetStore {
    points: Arc<PointSet>,
}

impl PointSetStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            points: Arc::new(PointSet::new()),
        }
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf die aktuelle Menge.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Unveränderlicher Snapshot für den Renderer (O(1)).
    pub fn snapshot(&self) -> Arc<PointSet> {
        Arc::clone(&self.points)
    }

    /// Hängt einen Punkt ans Ende (Zeichenreihenfolge).
    pub fn push(&mut self, point: Point) {
        Arc::make_mut(&mut self.points).push(point);
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points = Arc::new(PointSet::new());
    }

    /// Ersetzt die gesamte Menge (nie anhängen).
    pub fn replace(&mut self, points: PointSet) {
        self.points = Arc::new(points);
    }

    /// Spiegelt die Menge; `Replace` ersetzt, `Append` verdoppelt.
    pub fn apply_mirror(&mut self, axis: MirrorAxis, mode: MirrorMode) {
        let result = mirror(&self.points, axis, mode);
        self.replace(result);
    }

    /// Verschiebt jeden gespeicherten Punkt um `delta` (Render-Raum).
    pub fn translate_in_place(&mut self, delta: Vec2) {
        for point in Arc::make_mut(&mut self.points).as_mut_slice() {
            *point = point.translated(delta);
        }
    }
}
