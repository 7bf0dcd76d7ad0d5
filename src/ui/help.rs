//! Fenster mit der Tastenbelegung.

use super::keyboard::KEY_BINDINGS;
use crate::app::AppIntent;

/// Zeigt die Tastenbelegung als Fenster. Schließen über das X erzeugt einen Toggle-Intent.
pub fn show_key_help(ctx: &egui::Context, show: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !show {
        return events;
    }

    let mut open = true;
    egui::Window::new("Tastenbelegung")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .show(ctx, |ui| {
            egui::Grid::new("key_bindings_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for binding in KEY_BINDINGS {
                        ui.strong(binding.trigger);
                        ui.label(binding.effect);
                        ui.end_row();
                    }
                });
        });

    if !open {
        events.push(AppIntent::ToggleKeyHelpRequested);
    }

    events
}
