//! UI-Komponenten: Input-Handling, Status-Bar, Tastenbelegung.

mod help;
/// UI-Layer mit egui
///
/// Übersetzt egui-Eingaben in `AppIntent`s und zeichnet die Panels.
/// Keyboard-Shortcuts und Zeiger-Klicks sind in eigene Dateien extrahiert.
pub mod input;
mod keyboard;
pub mod status;

pub use help::show_key_help;
pub use input::InputState;
pub use keyboard::{KeyBinding, KEY_BINDINGS};
pub use status::render_status_bar;
