//! Application Controller für zentrale Event-Verarbeitung.

use super::render_plan;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderPlan;

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
        let commands = super::intent_mapping::map_intent_to_commands(intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an die Use-Case-Funktionen in `use_cases/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::use_cases;

        match command {
            // === Editing ===
            AppCommand::AddControlPoint { pos } => {
                use_cases::editing::add_control_point(state, pos)
            }
            AppCommand::ClearControlPoints => use_cases::editing::clear_control_points(state),

            // === Parameter ===
            AppCommand::IncreaseBlend => use_cases::tuning::increase_blend(state),
            AppCommand::DecreaseBlend => use_cases::tuning::decrease_blend(state),
            AppCommand::IncreaseLevel => use_cases::tuning::increase_level(state),
            AppCommand::DecreaseLevel => use_cases::tuning::decrease_level(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => {
                state.should_exit = true;
                log::info!("Beenden angefordert");
            }
        }

        Ok(())
    }

    /// Baut den Render-Plan aus dem aktuellen AppState.
    pub fn build_render_plan(&self, state: &AppState) -> RenderPlan {
        render_plan::build(state)
    }
}
