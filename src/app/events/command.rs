use crate::app::gestures::GestureKind;
use crate::core::{CurvePreset, MirrorAxis, MirrorMode};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Punkt an Viewport-Pixelposition anhängen
    AddPoint { screen_pos: glam::Vec2 },
    /// Punktmenge leeren
    ClearPoints,
    /// Zeichenmodus einen Schritt weiterschalten
    AdvanceRenderMode,
    /// Kurve abtasten, einpassen und Punktmenge ersetzen
    GenerateCurve { preset: CurvePreset },
    /// Punktmenge spiegeln
    Mirror { axis: MirrorAxis, mode: MirrorMode },
    /// Gesten-Art aktivieren
    BeginGesture { kind: GestureKind },
    /// Gesten-Sample an Viewport-Pixelposition erfassen
    RecordGestureSample {
        kind: GestureKind,
        screen_pos: glam::Vec2,
    },
    /// Geste beenden, offenes Sample verwerfen
    CancelGesture { kind: GestureKind },
    /// Viewport-Größe speichern
    SetViewportSize { size: [f32; 2] },
    /// Tastenbelegungs-Fenster umschalten
    ToggleKeyHelp,
    /// Anwendung beenden
    RequestExit,
}
