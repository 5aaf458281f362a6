use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use serde::Deserialize;

use crate::errors::FeatureError;

/// Geographical position of an airport, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AirportRecord {
    #[serde(rename = "IATA")]
    iata: String,
    #[serde(rename = "Latitude")]
    latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    longitude: Option<f64>,
}

/// Lookup table from IATA code to the airport's coordinates.
#[derive(Debug, Clone, Default)]
pub struct AirportTable {
    airports: HashMap<String, Coordinates>,
}

impl AirportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads an `airports.csv` file with (at least) the `IATA`, `Latitude` and
    /// `Longitude` columns.
    ///
    /// # Errors
    /// - `FeatureError::FileNotFound` if the file does not exist.
    /// - `FeatureError::Csv` if a row cannot be read or a coordinate is not a number.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FeatureError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FeatureError::FileNotFound(path.to_path_buf()),
            _ => FeatureError::Io(e),
        })?;
        Self::from_reader(file)
    }

    /// Reads the airport rows from any CSV source. Rows without an IATA code
    /// or with a blank coordinate are skipped, so their airports stay unknown.
    /// A repeated code keeps the last row read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FeatureError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut table = AirportTable::new();

        for result in rdr.deserialize() {
            let record: AirportRecord = result?;
            let code = record.iata.trim();
            if code.is_empty() {
                continue;
            }
            if let (Some(latitude), Some(longitude)) = (record.latitude, record.longitude) {
                table.insert(code, Coordinates::new(latitude, longitude));
            }
        }

        Ok(table)
    }

    pub fn insert(&mut self, iata: &str, coordinates: Coordinates) {
        self.airports.insert(iata.to_string(), coordinates);
    }

    /// Coordinates of `iata`, or `None` when the airport is unknown.
    pub fn get(&self, iata: &str) -> Option<Coordinates> {
        self.airports.get(iata).copied()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_required_columns_and_ignores_the_rest() {
        let data = "Name,IATA,Latitude,Longitude,Country\n\
                    Indira Gandhi,DEL,28.5665,77.1031,India\n\
                    Chhatrapati Shivaji,BOM,19.0887,72.8679,India\n";
        let table = AirportTable::from_reader(data.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("DEL"), Some(Coordinates::new(28.5665, 77.1031)));
        assert_eq!(table.get("XXX"), None);
    }

    #[test]
    fn test_skips_blank_codes_and_keeps_last_duplicate() {
        let data = "IATA,Latitude,Longitude\n,1.0,1.0\nAEP,-34.0,-58.0\nAEP,-34.553,-58.413\n";
        let table = AirportTable::from_reader(data.as_bytes()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("AEP"), Some(Coordinates::new(-34.553, -58.413)));
    }

    #[test]
    fn test_blank_coordinates_leave_the_airport_unknown() {
        let data = "IATA,Latitude,Longitude\nDEL,28.5665,77.1031\nIXX,,77.0\nIXY,12.5,\n";
        let table = AirportTable::from_reader(data.as_bytes()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("IXX"), None);
        assert_eq!(table.get("IXY"), None);
    }

    #[test]
    fn test_bad_coordinate_is_a_csv_error() {
        let data = "IATA,Latitude,Longitude\nAEP,north,-58.4\n";
        assert!(matches!(
            AirportTable::from_reader(data.as_bytes()),
            Err(FeatureError::Csv(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = AirportTable::from_path("/definitely/not/here/airports.csv");
        assert!(matches!(result, Err(FeatureError::FileNotFound(_))));
    }
}
