use crate::airports::AirportTable;
use crate::demand::airline_demand;
use crate::duration::parse_duration;
use crate::errors::FeatureError;
use crate::feature::{Feature, FeatureSet};
use crate::route::route_distance;
use crate::stops::parse_stops;
use crate::ticket::{TicketSet, ROUTE_COLUMN, STOPS_COLUMN};

/// Regression inputs derived from a `TicketSet`.
///
/// `rows[i]` holds one value per feature, in `features` order, for the ticket
/// at index `kept[i]` of the source dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    pub features: FeatureSet,
    pub rows: Vec<Vec<f64>>,
    pub kept: Vec<usize>,
    pub dropped: usize,
}

impl FeatureMatrix {
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.features.len()
    }

    /// Values of one feature across every kept row.
    pub fn column(&self, feature: Feature) -> Option<Vec<f64>> {
        let index = self.features.features().iter().position(|f| *f == feature)?;
        Some(self.rows.iter().map(|row| row[index]).collect())
    }
}

/// Derives the selected features for every ticket.
///
/// Stop counts are parsed for all rows and missing counts become 0. When
/// distance is selected, rows whose distance is undefined (missing route or
/// unknown airport) are dropped; demand is counted over the remaining rows.
///
/// # Errors
/// - `FeatureError::MissingColumn` if a selected feature needs a column the dataset lacks.
/// - `FeatureError::MissingAirportTable` if distance is selected without `airports`.
/// - Any format error from the duration, stop or route parsers.
pub fn build_feature_matrix(
    dataset: &TicketSet,
    features: &FeatureSet,
    airports: Option<&AirportTable>,
) -> Result<FeatureMatrix, FeatureError> {
    let tickets = &dataset.tickets;

    let stops = if features.contains(Feature::Stops) {
        if !dataset.has_stops {
            return Err(FeatureError::MissingColumn(STOPS_COLUMN.to_string()));
        }
        tickets
            .iter()
            .map(|t| parse_stops(t.total_stops.as_deref()).map(|s| s.unwrap_or(0)))
            .collect::<Result<Vec<u32>, _>>()?
    } else {
        Vec::new()
    };

    let distances = if features.contains(Feature::Distance) {
        if !dataset.has_route {
            return Err(FeatureError::MissingColumn(ROUTE_COLUMN.to_string()));
        }
        let airports = airports.ok_or(FeatureError::MissingAirportTable)?;
        tickets
            .iter()
            .map(|t| route_distance(t.route.as_deref(), airports))
            .collect::<Result<Vec<Option<f64>>, _>>()?
    } else {
        vec![Some(0.0); tickets.len()]
    };

    let kept: Vec<usize> = distances
        .iter()
        .enumerate()
        .filter_map(|(i, d)| d.map(|_| i))
        .collect();

    let airlines: Vec<&str> = kept.iter().map(|&i| tickets[i].airline.as_str()).collect();
    let demand = airline_demand(&airlines);

    let mut rows = Vec::with_capacity(kept.len());
    for (position, &i) in kept.iter().enumerate() {
        let mut row = Vec::with_capacity(features.len());
        for feature in features.features() {
            let value = match feature {
                Feature::Duration => parse_duration(&tickets[i].duration)? as f64,
                Feature::Stops => stops[i] as f64,
                Feature::Distance => distances[i].unwrap_or_default(),
                Feature::Demand => demand[position] as f64,
            };
            row.push(value);
        }
        rows.push(row);
    }

    Ok(FeatureMatrix {
        features: features.clone(),
        dropped: tickets.len() - kept.len(),
        rows,
        kept,
    })
}
