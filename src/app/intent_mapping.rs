//! Mapping von UI-Intents auf mutierende App-Commands.

use super::events::AdjustDirection;
use super::{AppCommand, AppIntent};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasClicked { pos } => vec![AppCommand::AddControlPoint { pos }],
        AppIntent::ClearPointsRequested => vec![AppCommand::ClearControlPoints],
        AppIntent::BlendAdjustRequested { direction } => match direction {
            AdjustDirection::Increase => vec![AppCommand::IncreaseBlend],
            AdjustDirection::Decrease => vec![AppCommand::DecreaseBlend],
        },
        AppIntent::LevelAdjustRequested { direction } => match direction {
            AdjustDirection::Increase => vec![AppCommand::IncreaseLevel],
            AdjustDirection::Decrease => vec![AppCommand::DecreaseLevel],
        },
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
