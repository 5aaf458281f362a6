//! Exchange-rate lookup and conversion of ticket prices into euros.

pub mod errors;
pub mod provider;
pub mod rates;

pub use errors::CurrencyError;
pub use provider::{HttpRateProvider, RateProvider, StaticRateProvider, DEFAULT_RATES_URL};
pub use rates::{convert_to_euro, RateTable};
