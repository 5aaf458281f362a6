use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use serde::Deserialize;

use crate::errors::FeatureError;

pub const AIRLINE_COLUMN: &str = "Airline";
pub const DURATION_COLUMN: &str = "Duration";
pub const STOPS_COLUMN: &str = "Total_Stops";
pub const ROUTE_COLUMN: &str = "Route";
pub const PRICE_COLUMN: &str = "Price";

/// One row of the ticket dataset. Columns not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticket {
    #[serde(rename = "Airline")]
    pub airline: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Total_Stops", default)]
    pub total_stops: Option<String>,
    #[serde(rename = "Route", default)]
    pub route: Option<String>,
    #[serde(rename = "Price")]
    pub price: f64,
}

impl Ticket {
    pub fn new(
        airline: &str,
        duration: &str,
        total_stops: Option<&str>,
        route: Option<&str>,
        price: f64,
    ) -> Self {
        Ticket {
            airline: airline.to_string(),
            duration: duration.to_string(),
            total_stops: total_stops.map(str::to_string),
            route: route.map(str::to_string),
            price,
        }
    }
}

/// The loaded dataset, plus which optional columns its header declared.
#[derive(Debug, Clone, Default)]
pub struct TicketSet {
    pub tickets: Vec<Ticket>,
    pub has_stops: bool,
    pub has_route: bool,
}

impl TicketSet {
    /// Builds a dataset in memory; both optional columns count as present.
    pub fn from_tickets(tickets: Vec<Ticket>) -> Self {
        TicketSet {
            tickets,
            has_stops: true,
            has_route: true,
        }
    }

    /// Loads the ticket CSV at `path`.
    ///
    /// # Errors
    /// - `FeatureError::FileNotFound` if there is no such file.
    /// - `FeatureError::MissingColumn` if `Airline`, `Duration` or `Price` is absent.
    /// - `FeatureError::Csv` if a row cannot be deserialized.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FeatureError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FeatureError::FileNotFound(path.to_path_buf()),
            _ => FeatureError::Io(e),
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FeatureError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();
        let has_column = |name: &str| headers.iter().any(|h| h.trim() == name);

        for required in [AIRLINE_COLUMN, DURATION_COLUMN, PRICE_COLUMN] {
            if !has_column(required) {
                return Err(FeatureError::MissingColumn(required.to_string()));
            }
        }
        let has_stops = has_column(STOPS_COLUMN);
        let has_route = has_column(ROUTE_COLUMN);

        let tickets = rdr
            .deserialize()
            .collect::<Result<Vec<Ticket>, csv::Error>>()?;

        Ok(TicketSet {
            tickets,
            has_stops,
            has_route,
        })
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
