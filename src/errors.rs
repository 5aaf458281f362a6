use std::fmt::{self, Display};

use currency::CurrencyError;
use fare_features::FeatureError;
use regression::errors::RegressionError;
use visualizer::VisualizerError;

/// Enum representing the possible errors of a fare-regression run.
#[derive(Debug)]
pub enum PipelineError {
    /// Loading the data or deriving a feature failed.
    FeatureError(FeatureError),
    /// Rates could not be fetched, or a price could not be converted.
    CurrencyError(CurrencyError),
    /// The least-squares fit failed.
    RegressionError(RegressionError),
    /// The plot could not be rendered.
    VisualizerError(VisualizerError),
    /// Reading a prompt's answer from the console, or writing to it, failed.
    InputError(std::io::Error),
}

impl PipelineError {
    /// Errors the user can fix by answering the prompts differently.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PipelineError::FeatureError(FeatureError::FileNotFound(_))
                | PipelineError::CurrencyError(CurrencyError::UnsupportedCurrency(_))
        )
    }
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::FeatureError(e) => write!(f, "{}", e),
            PipelineError::CurrencyError(e) => write!(f, "{}", e),
            PipelineError::RegressionError(e) => write!(f, "{}", e),
            PipelineError::VisualizerError(e) => write!(f, "{}", e),
            PipelineError::InputError(e) => write!(f, "[InputError]: {}", e),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::FeatureError(e) => Some(e),
            PipelineError::CurrencyError(e) => Some(e),
            PipelineError::RegressionError(e) => Some(e),
            PipelineError::VisualizerError(e) => Some(e),
            PipelineError::InputError(e) => Some(e),
        }
    }
}

impl From<FeatureError> for PipelineError {
    fn from(error: FeatureError) -> Self {
        PipelineError::FeatureError(error)
    }
}

impl From<CurrencyError> for PipelineError {
    fn from(error: CurrencyError) -> Self {
        PipelineError::CurrencyError(error)
    }
}

impl From<RegressionError> for PipelineError {
    fn from(error: RegressionError) -> Self {
        PipelineError::RegressionError(error)
    }
}

impl From<VisualizerError> for PipelineError {
    fn from(error: VisualizerError) -> Self {
        PipelineError::VisualizerError(error)
    }
}
