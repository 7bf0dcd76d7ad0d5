//! Gesten-Zustand für Skalieren, Rotieren und Verschieben.
//!
//! Solange eine Gesten-Taste gehalten wird, ist jeder primäre Klick ein Sample.
//! Pro Gesten-Art verwaltet ein [`GestureTracker`] die Phasen
//! `Idle → Sampling → Committed`. Es ist immer höchstens eine Art aktiv.

mod tracker;

#[cfg(test)]
mod tests;

pub use tracker::{GesturePhase, GestureTracker};

use glam::Vec2;

/// Art einer affinen Geste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Skalierung aus zwei absoluten Pixel-Samples
    Scale,
    /// Rotation um atan2 der Sample-Differenz (verkettet)
    Rotate,
    /// Verschiebung um die Sample-Differenz (verkettet)
    Translate,
}

impl GestureKind {
    /// Alle Gesten-Arten.
    pub const ALL: [GestureKind; 3] = [
        GestureKind::Scale,
        GestureKind::Rotate,
        GestureKind::Translate,
    ];

    /// Ob aufeinanderfolgende Samples verkettet werden (Ende wird neuer Start).
    pub fn chains(self) -> bool {
        !matches!(self, GestureKind::Scale)
    }

    /// Anzeigename
    pub fn label(self) -> &'static str {
        match self {
            GestureKind::Scale => "Skalieren",
            GestureKind::Rotate => "Rotieren",
            GestureKind::Translate => "Verschieben",
        }
    }
}

/// Abgeschlossene Sample-Spanne `(start, end)` einer Geste in Viewport-Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSpan {
    /// Gesten-Art
    pub kind: GestureKind,
    /// Erstes Sample (A)
    pub start: Vec2,
    /// Zweites Sample (B)
    pub end: Vec2,
}

/// Zustand aller Gesten-Tracker und der aktuell gehaltenen Gesten-Taste.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    active: Option<GestureKind>,
    scale: GestureTracker,
    rotate: GestureTracker,
    translate: GestureTracker,
}

impl GestureState {
    /// Erstellt einen Zustand ohne aktive Geste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuell aktive Gesten-Art (gehaltene Taste).
    pub fn active(&self) -> Option<GestureKind> {
        self.active
    }

    /// Read-only Zugriff auf den Tracker einer Art.
    pub fn tracker(&self, kind: GestureKind) -> &GestureTracker {
        match kind {
            GestureKind::Scale => &self.scale,
            GestureKind::Rotate => &self.rotate,
            GestureKind::Translate => &self.translate,
        }
    }

    fn tracker_mut(&mut self, kind: GestureKind) -> &mut GestureTracker {
        match kind {
            GestureKind::Scale => &mut self.scale,
            GestureKind::Rotate => &mut self.rotate,
            GestureKind::Translate => &mut self.translate,
        }
    }

    /// Aktiviert eine Gesten-Art. Idempotent bei Tasten-Wiederholung.
    ///
    /// Wechsel auf eine andere Art verwirft den offenen Zustand der vorherigen.
    pub fn begin(&mut self, kind: GestureKind) {
        if self.active == Some(kind) {
            return;
        }
        if let Some(previous) = self.active {
            self.tracker_mut(previous).reset();
        }
        self.active = Some(kind);
    }

    /// Leitet ein Sample an den Tracker der Art weiter.
    ///
    /// Gibt eine Spanne zurück, sobald die Geste committet.
    /// Samples für eine nicht aktive Art werden ignoriert.
    pub fn sample(&mut self, kind: GestureKind, pos: Vec2) -> Option<GestureSpan> {
        if self.active != Some(kind) {
            return None;
        }
        let chains = kind.chains();
        self.tracker_mut(kind)
            .sample(pos, chains)
            .map(|(start, end)| GestureSpan { kind, start, end })
    }

    /// Beendet die Geste (Taste losgelassen). Ein offener Start wird verworfen.
    pub fn cancel(&mut self, kind: GestureKind) {
        self.tracker_mut(kind).reset();
        if self.active == Some(kind) {
            self.active = None;
        }
    }
}
