//! 3-D scatter plots of ticket prices against pairs of features, with the
//! fitted regression plane drawn over them.

pub mod errors;
pub mod render;
pub mod surface;

pub use errors::VisualizerError;
pub use render::render_model;
pub use surface::{feature_pairs, PlaneSection, PlotData};
