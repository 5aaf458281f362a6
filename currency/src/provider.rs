use crate::errors::CurrencyError;
use crate::rates::RateTable;

/// Public currency API serving the euro rate table.
pub const DEFAULT_RATES_URL: &str =
    "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1/currencies/eur.json";

/// Source of the currency → EUR rate table.
pub trait RateProvider {
    fn fetch_rates(&self) -> Result<RateTable, CurrencyError>;
}

/// Fetches the rate table with one blocking HTTP GET.
pub struct HttpRateProvider {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpRateProvider {
    pub fn new(url: &str) -> Self {
        HttpRateProvider {
            url: url.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpRateProvider {
    fn default() -> Self {
        Self::new(DEFAULT_RATES_URL)
    }
}

impl RateProvider for HttpRateProvider {
    fn fetch_rates(&self) -> Result<RateTable, CurrencyError> {
        let body = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;
        RateTable::from_json(&body)
    }
}

/// A rate table known ahead of time. Used when the rates come from a file or
/// in tests.
pub struct StaticRateProvider {
    rates: RateTable,
}

impl StaticRateProvider {
    pub fn new(rates: RateTable) -> Self {
        StaticRateProvider { rates }
    }
}

impl RateProvider for StaticRateProvider {
    fn fetch_rates(&self) -> Result<RateTable, CurrencyError> {
        Ok(self.rates.clone())
    }
}
