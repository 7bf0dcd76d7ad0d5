use glam::Vec2;

/// Phase eines Gesten-Trackers
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    /// Kein Sample erfasst
    #[default]
    Idle,
    /// Erstes Sample erfasst, wartet auf das zweite
    Sampling {
        /// Erstes Sample (A)
        start: Vec2,
    },
    /// Spanne committet
    Committed {
        /// Erstes Sample (A)
        start: Vec2,
        /// Zweites Sample (B)
        end: Vec2,
    },
}

/// Sample-Automat einer einzelnen Gesten-Art.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    phase: GesturePhase,
}

impl GestureTracker {
    /// Aktuelle Phase
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Ob ein erstes Sample auf sein Gegenstück wartet.
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, GesturePhase::Sampling { .. })
    }

    /// Verarbeitet ein Sample und gibt bei Commit die Spanne `(start, end)` zurück.
    ///
    /// Bei `chains` wird nach einem Commit das letzte Ende zum neuen Start,
    /// sonst beginnt nach einem Commit ein neues Sample-Paar.
    pub fn sample(&mut self, pos: Vec2, chains: bool) -> Option<(Vec2, Vec2)> {
        match self.phase {
            GesturePhase::Idle => {
                self.phase = GesturePhase::Sampling { start: pos };
                None
            }
            GesturePhase::Sampling { start } => {
                self.phase = GesturePhase::Committed { start, end: pos };
                Some((start, pos))
            }
            GesturePhase::Committed { end, .. } if chains => {
                self.phase = GesturePhase::Committed {
                    start: end,
                    end: pos,
                };
                Some((end, pos))
            }
            GesturePhase::Committed { .. } => {
                self.phase = GesturePhase::Sampling { start: pos };
                None
            }
        }
    }

    /// Setzt den Tracker auf `Idle` zurück.
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}
