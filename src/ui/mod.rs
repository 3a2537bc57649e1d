//! UI-Komponenten: Zeichenfläche, Status-Bar, Input-Handling.

pub mod canvas;
mod input;
mod keyboard;
pub mod status;

pub use canvas::render_canvas_panel;
pub use status::render_status_bar;
