//! Ordinary least-squares linear regression with an intercept.
//!
//! The centered feature matrix is solved through its SVD, which also copes
//! with collinear features (the minimum-norm solution is returned). The
//! intercept follows from the column means.

pub mod errors;

pub use errors::RegressionError;
use nalgebra::{DMatrix, DVector};

/// A fitted model `price = intercept + Σ coefficients[j] * x[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    /// Coefficient of determination on the training data.
    pub r_squared: f64,
}

impl LinearModel {
    /// Fits the model to `rows` (one slice of feature values per sample) and `target`.
    ///
    /// # Errors
    /// - `RegressionError::EmptyInput` if there are no rows.
    /// - `RegressionError::DimensionMismatch` if rows differ in length or `target`
    ///   does not have one value per row.
    /// - `RegressionError::NonFiniteInput` if any value is NaN or infinite.
    /// - `RegressionError::Singular` if the solution is not finite.
    pub fn fit<R: AsRef<[f64]>>(rows: &[R], target: &[f64]) -> Result<Self, RegressionError> {
        let n = rows.len();
        if n == 0 {
            return Err(RegressionError::EmptyInput);
        }
        if target.len() != n {
            return Err(RegressionError::DimensionMismatch {
                expected: n,
                got: target.len(),
            });
        }
        let n_features = rows[0].as_ref().len();
        for row in rows {
            let row = row.as_ref();
            if row.len() != n_features {
                return Err(RegressionError::DimensionMismatch {
                    expected: n_features,
                    got: row.len(),
                });
            }
            if row.iter().any(|v| !v.is_finite()) {
                return Err(RegressionError::NonFiniteInput);
            }
        }
        if target.iter().any(|v| !v.is_finite()) {
            return Err(RegressionError::NonFiniteInput);
        }

        // Centered columns: the intercept is recovered from the means, and a
        // constant target solves to exactly zero coefficients
        let means: Vec<f64> = (0..n_features)
            .map(|j| rows.iter().map(|row| row.as_ref()[j]).sum::<f64>() / n as f64)
            .collect();
        let mean_y = target.iter().sum::<f64>() / n as f64;

        let design = DMatrix::from_fn(n, n_features, |i, j| rows[i].as_ref()[j] - means[j]);
        let y = DVector::from_iterator(n, target.iter().map(|t| t - mean_y));

        let coefficients: Vec<f64> = if n_features == 0 {
            Vec::new()
        } else {
            solve_least_squares(design, &y)?.iter().copied().collect()
        };
        let intercept = mean_y
            - coefficients
                .iter()
                .zip(&means)
                .map(|(c, m)| c * m)
                .sum::<f64>();

        let mut model = LinearModel {
            intercept,
            coefficients,
            r_squared: 0.0,
        };
        let predictions = rows
            .iter()
            .map(|row| model.predict(row.as_ref()))
            .collect::<Result<Vec<f64>, _>>()?;
        model.r_squared = r_squared(target, &predictions);

        Ok(model)
    }

    /// Predicted value for one row of features.
    pub fn predict(&self, row: &[f64]) -> Result<f64, RegressionError> {
        if row.len() != self.coefficients.len() {
            return Err(RegressionError::DimensionMismatch {
                expected: self.coefficients.len(),
                got: row.len(),
            });
        }
        Ok(self.intercept
            + row
                .iter()
                .zip(&self.coefficients)
                .map(|(x, c)| x * c)
                .sum::<f64>())
    }
}

fn solve_least_squares(
    design: DMatrix<f64>,
    y: &DVector<f64>,
) -> Result<DVector<f64>, RegressionError> {
    let dims = design.nrows().max(design.ncols()) as f64;
    let svd = design.svd(true, true);
    // Singular values below this are treated as zero (numpy's lstsq default)
    let eps = svd.singular_values.max() * dims * f64::EPSILON;

    let beta = svd.solve(y, eps).map_err(|_| RegressionError::Singular)?;
    if beta.iter().all(|v| v.is_finite()) {
        Ok(beta)
    } else {
        Err(RegressionError::Singular)
    }
}

/// Coefficient of determination `1 - SS_res / SS_tot`.
///
/// A target whose spread is round-off relative to its magnitude counts as
/// constant: the score is then 1.0 for a prediction equally close and 0.0
/// otherwise.
pub fn r_squared(target: &[f64], predictions: &[f64]) -> f64 {
    if target.is_empty() {
        return 0.0;
    }
    let mean = target.iter().sum::<f64>() / target.len() as f64;
    let ss_res: f64 = target
        .iter()
        .zip(predictions)
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    let ss_tot: f64 = target.iter().map(|t| (t - mean).powi(2)).sum();
    let scale: f64 = target.iter().map(|t| t * t).sum();
    let tolerance = f64::EPSILON * scale;

    if ss_tot <= tolerance {
        return if ss_res <= tolerance { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}
