use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use currency::DEFAULT_RATES_URL;
use fare_features::{FeatureError, FeatureSet};

/// Fits flight-ticket prices (in euros) against features derived from the
/// tickets. The dataset and its currency are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "fare-regression", version)]
pub struct Args {
    /// Comma separated features: duration, stops, distance, demand
    #[arg(long, default_value = "duration,stops,demand")]
    pub features: String,

    /// Feature preset; takes precedence over --features
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Airport coordinates (IATA, Latitude, Longitude), needed for distance
    #[arg(long, default_value = "airports.csv")]
    pub airports: PathBuf,

    /// Where the 3D plot is written
    #[arg(long, default_value = "fare_regression.png")]
    pub plot: PathBuf,

    /// Skip the plot
    #[arg(long)]
    pub no_plot: bool,

    /// Endpoint serving the EUR rate table
    #[arg(long, default_value = DEFAULT_RATES_URL)]
    pub rates_url: String,

    /// Directory of the run logs
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// duration, demand
    Basic,
    /// duration, stops, demand
    Stops,
    /// distance, stops, demand
    Distance,
}

impl Preset {
    pub fn features(self) -> FeatureSet {
        match self {
            Preset::Basic => FeatureSet::basic(),
            Preset::Stops => FeatureSet::with_stops(),
            Preset::Distance => FeatureSet::with_distance(),
        }
    }
}

/// Settings of one run, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub features: FeatureSet,
    pub airports_path: PathBuf,
    pub plot_path: Option<PathBuf>,
    pub rates_url: String,
    pub log_dir: PathBuf,
}

impl TryFrom<Args> for RunConfig {
    type Error = FeatureError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let features = match args.preset {
            Some(preset) => preset.features(),
            None => args.features.parse()?,
        };

        Ok(RunConfig {
            features,
            airports_path: args.airports,
            plot_path: (!args.no_plot).then_some(args.plot),
            rates_url: args.rates_url,
            log_dir: args.log_dir,
        })
    }
}
