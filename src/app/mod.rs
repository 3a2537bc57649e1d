//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
mod intent_mapping;
pub mod render_plan;
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AdjustDirection, AppCommand, AppIntent};
pub use render_plan::build as build_render_plan;
pub use state::AppState;
