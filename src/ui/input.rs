//! Viewport-Input-Handling: Zeiger-Klicks und Tasten → AppIntent.

use super::keyboard;
use crate::app::{AppIntent, PointerButton};

/// Verwaltet den Input-Zustand für den Viewport.
#[derive(Default)]
pub struct InputState {
    last_viewport_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_viewport_size: None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge: Resize, Tasten, Zeiger-Klicks. Dadurch wirkt eine im selben
    /// Frame gedrückte Gesten-Taste bereits auf den Klick.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        rect: egui::Rect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let viewport_size = [rect.width(), rect.height()];
        if self.last_viewport_size != Some(viewport_size) {
            self.last_viewport_size = Some(viewport_size);
            events.push(AppIntent::ViewportResized {
                size: viewport_size,
            });
        }

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(ui));

        let pointer_events = ui.input(|i| pointer_press_intents(&i.events, rect));
        events.extend(pointer_events);

        events
    }
}

/// Übersetzt Maustasten-Drücke innerhalb von `rect` in Intents.
///
/// Positionen werden relativ zur linken oberen Ecke des Viewports geliefert.
pub(crate) fn pointer_press_intents(events: &[egui::Event], rect: egui::Rect) -> Vec<AppIntent> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } if rect.contains(*pos) => {
                let button = match button {
                    egui::PointerButton::Primary => PointerButton::Primary,
                    egui::PointerButton::Secondary => PointerButton::Secondary,
                    _ => return None,
                };
                let local = *pos - rect.min;
                Some(AppIntent::PointerPressed {
                    button,
                    screen_pos: glam::Vec2::new(local.x, local.y),
                })
            }
            _ => None,
        })
        .collect()
}
