//! Loading of flight-ticket datasets and derivation of the numeric features
//! used to regress ticket prices: duration, stops, route distance and
//! airline demand.

pub mod airports;
pub mod demand;
pub mod duration;
pub mod errors;
pub mod feature;
pub mod matrix;
pub mod route;
pub mod stops;
pub mod ticket;

pub use airports::{AirportTable, Coordinates};
pub use demand::airline_demand;
pub use duration::parse_duration;
pub use errors::FeatureError;
pub use feature::{Feature, FeatureSet};
pub use matrix::{build_feature_matrix, FeatureMatrix};
pub use route::{geodesic_distance, parse_route, route_distance};
pub use stops::parse_stops;
pub use ticket::{Ticket, TicketSet};
