//! Geometrie-Kern: Bézier-Auswertung, Polaren-Reduktion, Abtastung, Szene.

pub mod bezier;
pub mod error;
pub mod palette;
pub mod polar;
pub mod sampler;
pub mod scene;

pub use bezier::{bernstein, binomial_coefficient, curve_point};
pub use error::GeometryError;
pub use palette::{polar_level_color, Rgb};
pub use polar::polar_reduce;
pub use sampler::{sample_polyline, segments, Segment, Segments, SAMPLE_STEP};
pub use scene::SceneState;
