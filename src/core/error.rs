//! Fehlertypen der Geometrie-Pipeline.

use thiserror::Error;

/// Fehler, die in Kern-Operationen auftreten können.
///
/// Beide Varianten werden in der Application-Layer lokal aufgefangen:
/// die Operation wird zum No-op, der Zustand bleibt konsistent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Null-Ausdehnung, Null-Nenner oder nicht-endliche Werte.
    #[error("degenerierte Geometrie: {reason}")]
    DegenerateGeometry { reason: String },

    /// Ungültiger Kurven-Definitionsbereich (obere Grenze ≤ untere oder Anzahl ≤ 0).
    #[error("ungültiger Kurvenbereich [{lower}, {upper}] mit {count} Samples")]
    InvalidCurveDomain { lower: f64, upper: f64, count: usize },
}

impl GeometryError {
    /// Kurzform für `DegenerateGeometry` mit Begründung.
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }
}
