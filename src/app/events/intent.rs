use crate::app::gestures::GestureKind;
use crate::core::{CurvePreset, MirrorAxis, MirrorMode};

/// Maustaste eines Zeiger-Klicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste: Punkt setzen oder Gesten-Sample
    Primary,
    /// Rechte Taste: Zeichenmodus weiterschalten
    Secondary,
}

/// App-Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Zeiger-Klick im Viewport (Position relativ zur linken oberen Ecke, Pixel)
    PointerPressed {
        button: PointerButton,
        screen_pos: glam::Vec2,
    },
    /// Gesten-Taste gedrückt (S/R/T)
    GestureKeyPressed { kind: GestureKind },
    /// Gesten-Taste losgelassen
    GestureKeyReleased { kind: GestureKind },
    /// Alle Punkte entfernen
    ClearPointsRequested,
    /// Zeichenmodus weiterschalten
    CycleRenderModeRequested,
    /// Vordefinierte Kurve erzeugen
    GenerateCurveRequested { preset: CurvePreset },
    /// Punktmenge spiegeln
    MirrorRequested { axis: MirrorAxis, mode: MirrorMode },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Tastenbelegungs-Fenster ein-/ausblenden
    ToggleKeyHelpRequested,
    /// Anwendung beenden
    ExitRequested,
}
