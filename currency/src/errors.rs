use std::fmt::{self, Display};

/// Errors raised while resolving exchange rates or converting prices.
///
/// - `MissingRateTable`: a conversion was attempted without a rate table. This
///   is a configuration mistake of the caller, never a user error.
/// - `UnsupportedCurrency`: the requested code is not in the rate table.
/// - `InvalidRate`: the table holds a zero, negative or non-finite rate for the code.
/// - `Http`: the rate endpoint could not be reached or answered with an error status.
/// - `Json`: the rate endpoint answered with a body that is not a rate table.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyError {
    MissingRateTable,
    UnsupportedCurrency(String),
    InvalidRate(String, f64),
    Http(String),
    Json(String),
}

impl Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::MissingRateTable => {
                write!(f, "[MissingRateTable]: Exchange rate not provided.")
            }
            CurrencyError::UnsupportedCurrency(code) => {
                write!(f, "Currency {} not supported.", code)
            }
            CurrencyError::InvalidRate(code, rate) => {
                write!(f, "[InvalidRate]: {} has an unusable rate {}", code, rate)
            }
            CurrencyError::Http(msg) => write!(f, "[Http]: {}", msg),
            CurrencyError::Json(msg) => write!(f, "[Json]: {}", msg),
        }
    }
}

impl std::error::Error for CurrencyError {}

impl From<reqwest::Error> for CurrencyError {
    fn from(err: reqwest::Error) -> Self {
        CurrencyError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for CurrencyError {
    fn from(err: serde_json::Error) -> Self {
        CurrencyError::Json(err.to_string())
    }
}
