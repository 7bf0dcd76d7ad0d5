//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::{PointSet, RenderMode, TransformState};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Snapshot der Punktmenge (Arc für O(1)-Clone pro Frame)
    pub points: Arc<PointSet>,
    /// Aktueller Zeichenmodus
    pub render_mode: RenderMode,
    /// Zeichenzeit-Transformation (Rotation + Skalierung)
    pub transform: TransformState,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Punktgröße in Pixeln
    pub point_size: f32,
    /// Farbe für Punkte, Linien und Polygon (RGBA)
    pub point_color: [f32; 4],
}

impl RenderScene {
    /// Gibt zurück, ob im aktuellen Modus überhaupt gezeichnet wird.
    pub fn has_geometry(&self) -> bool {
        self.render_mode.draws(self.points.len())
    }
}
