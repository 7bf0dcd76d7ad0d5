//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Punktmenge ===
            AppCommand::AddPoint { screen_pos } => handlers::points::add_point(state, screen_pos),
            AppCommand::ClearPoints => handlers::points::clear(state),
            AppCommand::GenerateCurve { preset } => handlers::points::generate_curve(state, preset),
            AppCommand::Mirror { axis, mode } => handlers::points::mirror(state, axis, mode),
            AppCommand::AdvanceRenderMode => handlers::points::advance_render_mode(state),

            // === Gesten ===
            AppCommand::BeginGesture { kind } => handlers::transform::begin(state, kind),
            AppCommand::RecordGestureSample { kind, screen_pos } => {
                handlers::transform::record_sample(state, kind, screen_pos)
            }
            AppCommand::CancelGesture { kind } => handlers::transform::cancel(state, kind),

            // === Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Fenster & Anwendungssteuerung ===
            AppCommand::ToggleKeyHelp => handlers::dialog::toggle_key_help(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
