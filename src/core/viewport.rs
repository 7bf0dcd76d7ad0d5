//! Viewport-Größe in Geräte-Pixeln und Pixel → Render-Raum-Umrechnung.

use super::normalize::NormalizedCoordinate;
use super::{GeometryError, Point};
use glam::Vec2;

/// Ausdehnung des Zeichenbereichs in Pixeln (read-only für den Kern).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Breite in Pixeln
    pub width: f32,
    /// Höhe in Pixeln
    pub height: f32,
}

impl Viewport {
    /// Erstellt einen Viewport aus Breite und Höhe.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Erstellt einen Viewport aus `[Breite, Höhe]` (egui-Konvention).
    pub fn from_size(size: [f32; 2]) -> Self {
        Self::new(size[0], size[1])
    }

    /// Gibt `[Breite, Höhe]` zurück.
    pub fn size(&self) -> [f32; 2] {
        [self.width, self.height]
    }

    /// `true` wenn eine Achse keine positive, endliche Ausdehnung hat.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Rechnet eine Pixelposition (Ursprung oben links, y nach unten)
    /// in einen Render-Raum-Punkt (y nach oben) um.
    pub fn pixel_to_render(&self, pixel: Vec2) -> Result<Point, GeometryError> {
        let x = NormalizedCoordinate::to_render_space(self.width, 0.0)?.apply(pixel.x);
        let y = NormalizedCoordinate::to_render_space(self.height, 0.0)?.apply(pixel.y);
        Ok(Point::new(x, -y))
    }

    /// Rechnet ein Pixel-Delta in ein Render-Raum-Delta um (`2·dx/W`, `-2·dy/H`).
    pub fn pixel_delta_to_render(&self, delta: Vec2) -> Result<Vec2, GeometryError> {
        if self.is_degenerate() {
            return Err(GeometryError::degenerate(format!(
                "Viewport {}x{} hat keine Fläche",
                self.width, self.height
            )));
        }
        Ok(Vec2::new(
            2.0 * delta.x / self.width,
            -2.0 * delta.y / self.height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn top_left_pixel_maps_to_upper_left_corner() {
        let vp = Viewport::new(1280.0, 720.0);
        let p = vp.pixel_to_render(Vec2::ZERO).unwrap();
        assert_relative_eq!(p.x, -1.0);
        assert_relative_eq!(p.y, 1.0);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn center_pixel_maps_to_origin() {
        let vp = Viewport::new(1280.0, 720.0);
        let p = vp.pixel_to_render(Vec2::new(640.0, 360.0)).unwrap();
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn delta_flips_y() {
        let vp = Viewport::new(1280.0, 720.0);
        let d = vp.pixel_delta_to_render(Vec2::new(100.0, 72.0)).unwrap();
        assert_relative_eq!(d.x, 0.15625);
        assert_relative_eq!(d.y, -0.2);
    }

    #[test]
    fn zero_sized_viewport_is_degenerate() {
        let vp = Viewport::new(0.0, 720.0);
        assert!(vp.is_degenerate());
        assert!(vp.pixel_to_render(Vec2::new(1.0, 1.0)).is_err());
        assert!(vp.pixel_delta_to_render(Vec2::new(1.0, 1.0)).is_err());
    }
}
