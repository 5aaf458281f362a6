use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::FeatureError;

/// A numeric regressor derived from the raw ticket columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Flight duration in minutes.
    Duration,
    /// Number of stops, missing values filled with 0.
    Stops,
    /// Kilometers flown along the route.
    Distance,
    /// Rows sharing the ticket's airline.
    Demand,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Duration,
        Feature::Stops,
        Feature::Distance,
        Feature::Demand,
    ];

    /// Column label used in reports and plots.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Duration => "Duration",
            Feature::Stops => "Stops",
            Feature::Distance => "Distance",
            Feature::Demand => "Demand",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Feature::Duration => "duration",
            Feature::Stops => "stops",
            Feature::Distance => "distance",
            Feature::Demand => "demand",
        }
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Feature {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == wanted)
            .ok_or_else(|| FeatureError::UnknownFeature(s.trim().to_string()))
    }
}

/// Ordered list of the features fed to the regression, one matrix column each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSet {
    features: Vec<Feature>,
}

impl FeatureSet {
    /// # Errors
    /// - `FeatureError::NotEnoughFeatures` with fewer than two features.
    /// - `FeatureError::DuplicateFeature` if a feature appears twice.
    pub fn new(features: Vec<Feature>) -> Result<Self, FeatureError> {
        if features.len() < 2 {
            return Err(FeatureError::NotEnoughFeatures(features.len()));
        }
        for (i, feature) in features.iter().enumerate() {
            if features[..i].contains(feature) {
                return Err(FeatureError::DuplicateFeature(feature.label().to_string()));
            }
        }
        Ok(FeatureSet { features })
    }

    /// Duration and demand.
    pub fn basic() -> Self {
        FeatureSet {
            features: vec![Feature::Duration, Feature::Demand],
        }
    }

    /// Duration, stops and demand.
    pub fn with_stops() -> Self {
        FeatureSet {
            features: vec![Feature::Duration, Feature::Stops, Feature::Demand],
        }
    }

    /// Distance, stops and demand.
    pub fn with_distance() -> Self {
        FeatureSet {
            features: vec![Feature::Distance, Feature::Stops, Feature::Demand],
        }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.features.iter().map(Feature::label).collect()
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::with_stops()
    }
}

impl FromStr for FeatureSet {
    type Err = FeatureError;

    /// Parses a comma separated list such as `"distance,stops,demand"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let features = s
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(Feature::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        FeatureSet::new(features)
    }
}

impl Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels().join(", "))
    }
}
