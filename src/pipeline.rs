use std::fmt::{self, Display};

use currency::{convert_to_euro, RateTable};
use fare_features::{build_feature_matrix, AirportTable, FeatureMatrix, FeatureSet, TicketSet};
use regression::LinearModel;

use crate::errors::PipelineError;

/// What a run prints: the fitted coefficients and how many rows took part.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    pub features: Vec<&'static str>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    pub r_squared: f64,
    pub rows_used: usize,
    pub rows_dropped: usize,
}

impl FitReport {
    pub fn coefficient(&self, label: &str) -> Option<f64> {
        self.features
            .iter()
            .position(|f| *f == label)
            .map(|i| self.coefficients[i])
    }
}

impl Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "R-squared: {}", self.r_squared)?;
        writeln!(f, "Intercept: {}", self.intercept)?;
        for (label, coefficient) in self.features.iter().zip(&self.coefficients) {
            writeln!(f, "{} coefficient: {}", label, coefficient)?;
        }
        Ok(())
    }
}

/// Everything produced by a run, kept together for plotting.
#[derive(Debug, Clone)]
pub struct FitOutcome {
    pub report: FitReport,
    pub model: LinearModel,
    pub matrix: FeatureMatrix,
    pub prices_eur: Vec<f64>,
}

/// Derives the features of `dataset`, converts its prices from `currency` to
/// euros with `rates` and fits price against the features.
///
/// # Errors
/// - `CurrencyError::UnsupportedCurrency` before any parsing if `currency` is not in `rates`.
/// - Any feature, conversion or regression error, unrecovered.
pub fn run(
    dataset: &TicketSet,
    currency: &str,
    rates: &RateTable,
    airports: Option<&AirportTable>,
    features: &FeatureSet,
) -> Result<FitOutcome, PipelineError> {
    rates.rate(currency)?;

    let matrix = build_feature_matrix(dataset, features, airports)?;

    let prices_eur = matrix
        .kept
        .iter()
        .map(|&i| convert_to_euro(dataset.tickets[i].price, currency, Some(rates)))
        .collect::<Result<Vec<f64>, _>>()?;

    let model = LinearModel::fit(&matrix.rows, &prices_eur)?;

    let report = FitReport {
        features: features.labels(),
        intercept: model.intercept,
        coefficients: model.coefficients.clone(),
        r_squared: model.r_squared,
        rows_used: matrix.nrows(),
        rows_dropped: matrix.dropped,
    };

    Ok(FitOutcome {
        report,
        model,
        matrix,
        prices_eur,
    })
}
