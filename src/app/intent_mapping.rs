//! Mapping von UI-Intents auf mutierende App-Commands.

use super::events::PointerButton;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            button: PointerButton::Primary,
            screen_pos,
        } => match state.gestures.active() {
            // Gehaltene Gesten-Taste: Klick ist ein Sample, kein neuer Punkt
            Some(kind) => vec![AppCommand::RecordGestureSample { kind, screen_pos }],
            None => vec![AppCommand::AddPoint { screen_pos }],
        },
        AppIntent::PointerPressed {
            button: PointerButton::Secondary,
            ..
        }
        | AppIntent::CycleRenderModeRequested => vec![AppCommand::AdvanceRenderMode],
        AppIntent::GestureKeyPressed { kind } => vec![AppCommand::BeginGesture { kind }],
        AppIntent::GestureKeyReleased { kind } => vec![AppCommand::CancelGesture { kind }],
        AppIntent::ClearPointsRequested => vec![AppCommand::ClearPoints],
        AppIntent::GenerateCurveRequested { preset } => vec![AppCommand::GenerateCurve { preset }],
        AppIntent::MirrorRequested { axis, mode } => vec![AppCommand::Mirror { axis, mode }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ToggleKeyHelpRequested => vec![AppCommand::ToggleKeyHelp],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
