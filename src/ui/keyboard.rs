//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet Tasten und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, GestureKind};
use crate::core::{CurvePreset, MirrorAxis, MirrorMode};

/// Eintrag der Tastenbelegung: Auslöser und Wirkung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Taste oder Maustaste
    pub trigger: &'static str,
    /// Wirkung
    pub effect: &'static str,
}

const fn binding(trigger: &'static str, effect: &'static str) -> KeyBinding {
    KeyBinding { trigger, effect }
}

/// Vollständige Tastenbelegung (wird im Hilfe-Fenster angezeigt).
pub const KEY_BINDINGS: &[KeyBinding] = &[
    binding("Linksklick", "Punkt hinzufügen (bei gehaltener S/R/T: Gesten-Sample)"),
    binding("Rechtsklick", "Zeichenmodus weiter: Punkte → Linien → Polygon"),
    binding("Leertaste", "Alle Punkte entfernen"),
    binding("F1 … F6", "Kurve 1 … 6 erzeugen (Ellipse, Lissajous, Epitrochoide, Hypotrochoide, Schmetterling, Spirale)"),
    binding("S halten + 2 Klicks", "Skalieren (|B.x/A.x|, |B.y/A.y|)"),
    binding("R halten + Klicks", "Rotieren (verkettet)"),
    binding("T halten + Klicks", "Verschieben (verkettet)"),
    binding("S / R / T loslassen", "Offene Geste verwerfen"),
    binding("X", "An OX spiegeln"),
    binding("Y", "An OY spiegeln"),
    binding("O", "Am Ursprung spiegeln"),
    binding("H", "Tastenbelegung ein-/ausblenden"),
    binding("Escape", "Beenden"),
];

const GESTURE_KEYS: [(egui::Key, GestureKind); 3] = [
    (egui::Key::S, GestureKind::Scale),
    (egui::Key::R, GestureKind::Rotate),
    (egui::Key::T, GestureKind::Translate),
];

const CURVE_KEYS: [egui::Key; 6] = [
    egui::Key::F1,
    egui::Key::F2,
    egui::Key::F3,
    egui::Key::F4,
    egui::Key::F5,
    egui::Key::F6,
];

const MIRROR_KEYS: [(egui::Key, MirrorAxis); 3] = [
    (egui::Key::X, MirrorAxis::OX),
    (egui::Key::Y, MirrorAxis::OY),
    (egui::Key::O, MirrorAxis::Origin),
];

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.input(|i| {
        // Gesten-Tasten: Drücken aktiviert, Loslassen verwirft offene Samples
        for (key, kind) in GESTURE_KEYS {
            if key_down_edge(i, key) {
                events.push(AppIntent::GestureKeyPressed { kind });
            }
            if i.key_released(key) {
                events.push(AppIntent::GestureKeyReleased { kind });
            }
        }

        if i.key_pressed(egui::Key::Space) {
            events.push(AppIntent::ClearPointsRequested);
        }

        for (index, key) in CURVE_KEYS.into_iter().enumerate() {
            if i.key_pressed(key) {
                if let Some(preset) = CurvePreset::from_trigger(index + 1) {
                    events.push(AppIntent::GenerateCurveRequested { preset });
                }
            }
        }

        for (key, axis) in MIRROR_KEYS {
            if i.key_pressed(key) {
                events.push(AppIntent::MirrorRequested {
                    axis,
                    mode: MirrorMode::Replace,
                });
            }
        }

        if i.key_pressed(egui::Key::H) {
            events.push(AppIntent::ToggleKeyHelpRequested);
        }

        if i.key_pressed(egui::Key::Escape) {
            events.push(AppIntent::ExitRequested);
        }
    });

    events
}

/// Erstes Drücken einer Taste (ohne Auto-Repeat-Events).
fn key_down_edge(input: &egui::InputState, key: egui::Key) -> bool {
    input.events.iter().any(|event| {
        matches!(
            event,
            egui::Event::Key {
                key: pressed_key,
                pressed: true,
                repeat: false,
                ..
            } if *pressed_key == key
        )
    })
}
