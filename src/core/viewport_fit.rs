//! Einpassen einer abgetasteten Kurve in den Viewport.
//!
//! Ablauf (einmaliger, synchroner Durchlauf auf den Rohpunkten):
//! 1. Bounding-Box-Minimum auf den Ursprung schieben
//! 2. Maximum der verschobenen Box bestimmen
//! 3. Seitenverhältnis-erhaltende Skalierung `s = min((W-m)/xmax, (H-m)/ymax)`
//! 4. Alle Punkte mit `s` skalieren
//! 5. Im Viewport zentrieren
//! 6. Vertikal spiegeln (`y → H - y`), genau einmal, nach dem Zentrieren
//! 7. Pixel-Raum `[0,W]×[0,H]` in den Render-Raum `[-1,1]²` abbilden

use super::normalize::NormalizedCoordinate;
use super::{GeometryError, Point, PointSet, Viewport};
use glam::DVec2;

/// Fester Rand in Pixeln, der vor dem Einpassen von jeder Viewport-Achse abgezogen wird.
pub const FIT_MARGIN_PX: f32 = 50.0;

/// Passt Rohpunkte zentriert und seitenverhältnistreu in einen Viewport ein.
#[derive(Debug, Clone, Copy)]
pub struct ViewportFitter {
    viewport: Viewport,
    margin: f32,
}

impl ViewportFitter {
    /// Erstellt einen Fitter für den aktuellen Viewport mit Standard-Rand.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_margin(viewport, FIT_MARGIN_PX)
    }

    /// Erstellt einen Fitter mit explizitem Rand.
    pub fn with_margin(viewport: Viewport, margin: f32) -> Self {
        Self { viewport, margin }
    }

    /// Schritte 1–6: liefert zentrierte, gespiegelte Pixelkoordinaten.
    pub fn fit_pixels(&self, raw: &PointSet) -> Result<Vec<DVec2>, GeometryError> {
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        let margin = f64::from(self.margin);
        if self.viewport.is_degenerate() || width <= margin || height <= margin {
            return Err(GeometryError::degenerate(format!(
                "Viewport {}x{} ist kleiner als der Rand {}",
                width, height, margin
            )));
        }

        let points: Vec<DVec2> = raw
            .iter()
            .map(|p| DVec2::new(f64::from(p.x), f64::from(p.y)))
            .collect();
        if points.iter().any(|p| !p.is_finite()) {
            return Err(GeometryError::degenerate("Kurve enthält nicht-endliche Werte"));
        }

        // Schritt 1: Minimum auf den Ursprung
        let min = points.iter().fold(DVec2::MAX, |acc, p| acc.min(*p));
        log::info!("Minimum x: {}, Minimum y: {}", min.x, min.y);
        let anchored: Vec<DVec2> = points.iter().map(|p| *p - min).collect();

        // Schritt 2: Maximum der verschobenen Box
        let max = anchored.iter().fold(DVec2::ZERO, |acc, p| acc.max(*p));
        log::info!("Maximum x: {}, Maximum y: {}", max.x, max.y);

        // Schritt 3: Achsen ohne Ausdehnung schränken die Skalierung nicht ein
        let sx = (max.x > 0.0).then(|| (width - margin) / max.x);
        let sy = (max.y > 0.0).then(|| (height - margin) / max.y);
        let s = match (sx, sy) {
            (Some(sx), Some(sy)) => sx.min(sy),
            (Some(sx), None) => sx,
            (None, Some(sy)) => sy,
            (None, None) => {
                log::warn!("Bounding-Box ohne Ausdehnung, Skalierung bleibt 1.0");
                1.0
            }
        };
        log::info!("Skalierung - sx: {:?}, sy: {:?}, gewählt s: {}", sx, sy, s);

        // Schritt 5: Zentrierung aus der skalierten Ausdehnung
        let extent = max * s;
        let offset = (DVec2::new(width, height) - extent) / 2.0;
        log::info!("Translation - tx: {}, ty: {}", offset.x, offset.y);

        Ok(anchored
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                // Schritte 4, 5, 6
                let centered = p * s + offset;
                let flipped = DVec2::new(centered.x, height - centered.y);
                log::debug!("Pixelpunkt {}: x={}, y={}", i, flipped.x, flipped.y);
                flipped
            })
            .collect())
    }

    /// Kompletter Durchlauf inkl. Schritt 7: neue Punktmenge im Render-Raum.
    pub fn fit(&self, raw: &PointSet) -> Result<PointSet, GeometryError> {
        let pixels = self.fit_pixels(raw)?;
        let to_x = NormalizedCoordinate::to_render_space(self.viewport.width, 0.0)?;
        let to_y = NormalizedCoordinate::to_render_space(self.viewport.height, 0.0)?;
        let fitted: PointSet = pixels
            .iter()
            .map(|p| Point::new(to_x.apply(p.x as f32), to_y.apply(p.y as f32)))
            .collect();
        log::info!("{} Kurvenpunkte eingepasst", fitted.len());
        Ok(fitted)
    }
}

/// Kurzform: Rohpunkte mit Standard-Rand in den Viewport einpassen.
pub fn fit_to_viewport(raw: &PointSet, viewport: Viewport) -> Result<PointSet, GeometryError> {
    ViewportFitter::new(viewport).fit(raw)
}
