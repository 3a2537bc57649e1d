//! Bézier-Polaren-Studio Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AdjustDirection, AppCommand, AppController, AppIntent, AppState};
pub use core::{
    bernstein, binomial_coefficient, curve_point, polar_level_color, polar_reduce,
    sample_polyline, segments, GeometryError, Rgb, SceneState, Segment, SAMPLE_STEP,
};
pub use shared::{Polyline, RenderPlan, StudioOptions};
