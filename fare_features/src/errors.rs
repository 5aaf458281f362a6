use std::fmt::{self, Display};
use std::path::PathBuf;

/// Enum representing the possible errors that can occur while loading tickets
/// and deriving their numeric features.
///
/// The format errors (`InvalidDuration`, `InvalidStops`, `InvalidRoute`) carry
/// the offending raw value and abort the run: there is no partial result.
#[derive(Debug)]
pub enum FeatureError {
    InvalidDuration(String),
    InvalidStops(String),
    InvalidRoute(String),
    UnknownFeature(String),
    DuplicateFeature(String),
    NotEnoughFeatures(usize),
    MissingColumn(String),
    MissingAirportTable,
    FileNotFound(PathBuf),
    Csv(String),
    Io(std::io::Error),
}

impl FeatureError {
    /// Whether the error comes from a malformed duration, stop or route string.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            FeatureError::InvalidDuration(_)
                | FeatureError::InvalidStops(_)
                | FeatureError::InvalidRoute(_)
        )
    }
}

impl Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureError::InvalidDuration(raw) => {
                write!(f, "[InvalidDuration]: Unexpected time format: {}", raw)
            }
            FeatureError::InvalidStops(raw) => {
                write!(f, "[InvalidStops]: Unexpected stops format: {}", raw)
            }
            FeatureError::InvalidRoute(raw) => {
                write!(f, "[InvalidRoute]: Unexpected route format: {}", raw)
            }
            FeatureError::UnknownFeature(name) => {
                write!(f, "[UnknownFeature]: '{}' is not a known feature", name)
            }
            FeatureError::DuplicateFeature(name) => {
                write!(f, "[DuplicateFeature]: '{}' was selected twice", name)
            }
            FeatureError::NotEnoughFeatures(n) => write!(
                f,
                "[NotEnoughFeatures]: at least two features are needed, got {}",
                n
            ),
            FeatureError::MissingColumn(column) => {
                write!(f, "[MissingColumn]: the dataset has no '{}' column", column)
            }
            FeatureError::MissingAirportTable => write!(
                f,
                "[MissingAirportTable]: distance needs an airport coordinate table"
            ),
            FeatureError::FileNotFound(path) => {
                write!(f, "File {} not found.", path.display())
            }
            FeatureError::Csv(msg) => write!(f, "[Csv]: {}", msg),
            FeatureError::Io(e) => write!(f, "[Io]: {}", e),
        }
    }
}

impl std::error::Error for FeatureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeatureError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FeatureError {
    fn from(err: std::io::Error) -> Self {
        FeatureError::Io(err)
    }
}

impl From<csv::Error> for FeatureError {
    fn from(err: csv::Error) -> Self {
        FeatureError::Csv(err.to_string())
    }
}
