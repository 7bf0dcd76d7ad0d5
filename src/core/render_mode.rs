//! Darstellungsmodus der Punktfolge: Punkte → Linien → Polygon → Punkte.

/// Interpretation der Punktfolge zur Zeichenzeit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Einzelne Punkte (zeichnet immer, auch bei 0 Punkten)
    #[default]
    Points,
    /// Line-Strip (zeichnet nur bei genau 2 Punkten)
    Lines,
    /// Gefülltes Polygon als Triangle-Fan (zeichnet ab 3 Punkten)
    Polygon,
}

impl RenderMode {
    /// Nächster Modus im Zyklus.
    pub fn next(self) -> Self {
        match self {
            RenderMode::Points => RenderMode::Lines,
            RenderMode::Lines => RenderMode::Polygon,
            RenderMode::Polygon => RenderMode::Points,
        }
    }

    /// Schaltet den Modus einen Schritt weiter.
    pub fn advance(&mut self) {
        *self = self.next();
    }

    /// Ob der Renderer bei `point_count` Punkten in diesem Modus zeichnet.
    pub fn draws(self, point_count: usize) -> bool {
        match self {
            RenderMode::Points => true,
            RenderMode::Lines => point_count == 2,
            RenderMode::Polygon => point_count >= 3,
        }
    }

    /// Anzeigename für Status-Bar und Logs.
    pub fn label(self) -> &'static str {
        match self {
            RenderMode::Points => "Punkte",
            RenderMode::Lines => "Linien",
            RenderMode::Polygon => "Polygon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_returns_to_points_after_three_steps() {
        let mut mode = RenderMode::default();
        mode.advance();
        assert_eq!(mode, RenderMode::Lines);
        mode.advance();
        assert_eq!(mode, RenderMode::Polygon);
        mode.advance();
        assert_eq!(mode, RenderMode::Points);
    }

    #[test]
    fn draw_rules_depend_on_point_count() {
        assert!(RenderMode::Points.draws(0));
        assert!(RenderMode::Points.draws(7));
        assert!(!RenderMode::Lines.draws(1));
        assert!(RenderMode::Lines.draws(2));
        assert!(!RenderMode::Lines.draws(3));
        assert!(!RenderMode::Polygon.draws(2));
        assert!(RenderMode::Polygon.draws(3));
        assert!(RenderMode::Polygon.draws(300));
    }
}
