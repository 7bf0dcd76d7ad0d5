//! Application State — zentrale Datenhaltung.

use super::gestures::GestureState;
use super::CommandLog;
use crate::core::{PointSetStore, RenderMode, TransformState, Viewport};
use crate::shared::PlotterOptions;

/// Kamerafreier View-Zustand: nur die Viewport-Größe.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktueller Viewport in Pixeln
    pub viewport: Viewport,
}

impl ViewState {
    /// Erstellt den View-Zustand mit der Standard-Fenstergröße.
    pub fn new(size: [f32; 2]) -> Self {
        Self {
            viewport: Viewport::from_size(size),
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob das Tastenbelegungs-Fenster angezeigt wird
    pub show_key_help: bool,
    /// Letzte Statusmeldung (z.B. verworfene Geste)
    pub status_message: Option<String>,
}

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Geordnete Punktmenge
    pub points: PointSetStore,
    /// Zeichenzeit-Transformation (Rotation + Skalierung)
    pub transform: TransformState,
    /// Zeichenmodus der Punktfolge
    pub render_mode: RenderMode,
    /// Gesten-Tracker und aktive Gesten-Taste
    pub gestures: GestureState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Rand)
    pub options: PlotterOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(PlotterOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen.
    pub fn with_options(options: PlotterOptions) -> Self {
        Self {
            points: PointSetStore::new(),
            transform: TransformState::default(),
            render_mode: RenderMode::default(),
            gestures: GestureState::new(),
            view: ViewState::new(options.window_size),
            ui: UiState::default(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
