//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;
use crate::core::Viewport;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport = Viewport::from_size(size);
}

/// Schaltet das Tastenbelegungs-Fenster um.
pub fn toggle_key_help(state: &mut AppState) {
    state.ui.show_key_help = !state.ui.show_key_help;
}
