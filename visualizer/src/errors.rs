use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub enum VisualizerError {
    /// A 3-D panel needs two features; the payload is how many were given.
    NotEnoughFeatures(usize),
    /// Labels, rows, target or model disagree on their sizes.
    ShapeMismatch(String),
    NoData,
    Render(String),
}

impl Display for VisualizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualizerError::NotEnoughFeatures(n) => write!(
                f,
                "[NotEnoughFeatures]: a 3D plot needs two features, got {}",
                n
            ),
            VisualizerError::ShapeMismatch(msg) => write!(f, "[ShapeMismatch]: {}", msg),
            VisualizerError::NoData => write!(f, "[NoData]: there are no points to plot"),
            VisualizerError::Render(msg) => write!(f, "[Render]: {}", msg),
        }
    }
}

impl std::error::Error for VisualizerError {}
