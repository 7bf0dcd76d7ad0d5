//! Handler für Fenster-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}

/// Blendet das Tastenbelegungs-Fenster ein oder aus.
pub fn toggle_key_help(state: &mut AppState) {
    use_cases::viewport::toggle_key_help(state);
}
