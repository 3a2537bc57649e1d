//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_plan;

pub use options::StudioOptions;
pub use options::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
pub use render_plan::{Polyline, RenderPlan};
