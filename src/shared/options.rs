//! Zentrale Konfiguration für den Punkt-Plotter.
//!
//! `PlotterOptions` enthält die Oberflächen-Einstellungen (Fenster, Farben, Punktgröße).
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::FIT_MARGIN_PX;
use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fenstergröße in Pixeln [Breite, Höhe].
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1280.0, 720.0];

// ── Punkt-Rendering ────────────────────────────────────────────────

/// Punktgröße in Pixeln.
pub const POINT_SIZE_PX: f32 = 10.0;
/// Punkt- und Linienfarbe (RGBA: Rot).
pub const POINT_COLOR: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
/// Hintergrundfarbe (RGBA: Kornblumenblau).
pub const BACKGROUND_COLOR: [f32; 4] = [0.392, 0.584, 0.929, 1.0];

/// Dateiname der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "point_plotter.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Zur Laufzeit geladene Oberflächen-Optionen.
///
/// Fehlende Felder in der TOML-Datei fallen auf die Standardwerte zurück.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterOptions {
    /// Initiale Fenstergröße [Breite, Höhe]
    pub window_size: [f32; 2],
    /// Punktgröße in Pixeln
    pub point_size_px: f32,
    /// Farbe für Punkte, Linien und Polygon (RGBA)
    pub point_color: [f32; 4],
    /// Hintergrundfarbe des Viewports (RGBA)
    pub background_color: [f32; 4],
    /// Rand in Pixeln beim Einpassen von Kurven
    pub fit_margin_px: f32,
}

impl Default for PlotterOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            point_size_px: POINT_SIZE_PX,
            point_color: POINT_COLOR,
            background_color: BACKGROUND_COLOR,
            fit_margin_px: FIT_MARGIN_PX,
        }
    }
}

impl PlotterOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let opts = toml::from_str(content)?;
        log::info!("Optionen geladen");
        Ok(opts)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("point-plotter"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Hintergrundfarbe als egui-Farbe.
    pub fn background_color32(&self) -> egui::Color32 {
        let [r, g, b, a] = self.background_color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}
