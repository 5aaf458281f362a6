use std::borrow::Borrow;
use std::ops::Range;

use regression::LinearModel;

use crate::errors::VisualizerError;

/// The data behind a plot: one row of feature values per point, and the price
/// of each point.
pub struct PlotData<'a> {
    pub labels: &'a [&'a str],
    pub rows: &'a [Vec<f64>],
    pub target: &'a [f64],
}

impl PlotData<'_> {
    pub(crate) fn validate(&self, model: &LinearModel) -> Result<(), VisualizerError> {
        if self.labels.len() < 2 {
            return Err(VisualizerError::NotEnoughFeatures(self.labels.len()));
        }
        if self.rows.is_empty() {
            return Err(VisualizerError::NoData);
        }
        if self.rows.len() != self.target.len() {
            return Err(VisualizerError::ShapeMismatch(format!(
                "{} rows but {} prices",
                self.rows.len(),
                self.target.len()
            )));
        }
        if model.coefficients.len() != self.labels.len()
            || self.rows.iter().any(|row| row.len() != self.labels.len())
        {
            return Err(VisualizerError::ShapeMismatch(format!(
                "{} labels do not match the rows or the {} model coefficients",
                self.labels.len(),
                model.coefficients.len()
            )));
        }
        Ok(())
    }

    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[index]).collect()
    }

    /// Mean of every feature column.
    pub fn means(&self) -> Vec<f64> {
        let n = self.rows.len().max(1) as f64;
        (0..self.labels.len())
            .map(|j| self.rows.iter().map(|row| row[j]).sum::<f64>() / n)
            .collect()
    }
}

/// Every unordered pair of feature indices, in order: `(0, 1), (0, 2), (1, 2)`.
pub fn feature_pairs(n_features: usize) -> Vec<(usize, usize)> {
    (0..n_features)
        .flat_map(|a| (a + 1..n_features).map(move |b| (a, b)))
        .collect()
}

/// Range spanning `values`, widened when every value is the same.
pub fn axis_range(values: &[f64]) -> Range<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 1.0)..(max + 1.0);
    }
    min..max
}

/// `steps` evenly spaced values from `range.start` to `range.end`, both included.
pub fn linspace(range: &Range<f64>, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![range.start],
        _ => {
            let step = (range.end - range.start) / (steps - 1) as f64;
            (0..steps).map(|i| range.start + step * i as f64).collect()
        }
    }
}

/// The fitted model seen as a plane over two features, the others held fixed.
pub struct PlaneSection<'a> {
    model: &'a LinearModel,
    x_feature: usize,
    z_feature: usize,
    fixed: Vec<f64>,
}

impl<'a> PlaneSection<'a> {
    /// `fixed` gives the value of every feature; entries `x_feature` and
    /// `z_feature` are overwritten at each evaluation.
    pub fn new(model: &'a LinearModel, x_feature: usize, z_feature: usize, fixed: Vec<f64>) -> Self {
        PlaneSection {
            model,
            x_feature,
            z_feature,
            fixed,
        }
    }

    pub fn height<T: Borrow<f64>>(&self, x: T, z: T) -> f64 {
        let mut row = self.fixed.clone();
        row[self.x_feature] = *x.borrow();
        row[self.z_feature] = *z.borrow();
        self.model
            .intercept
            + row
                .iter()
                .zip(&self.model.coefficients)
                .map(|(v, c)| v * c)
                .sum::<f64>()
    }
}
