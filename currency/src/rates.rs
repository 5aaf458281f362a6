use std::collections::HashMap;

use serde::Deserialize;

use crate::errors::CurrencyError;

#[derive(Debug, Deserialize)]
struct RatesBody {
    #[serde(default)]
    date: Option<String>,
    eur: HashMap<String, f64>,
}

/// Exchange rates against the euro: `1 EUR = rate(code) units of code`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<String, f64>,
    date: Option<String>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the body served by the currency API:
    /// `{"date": "2024-05-01", "eur": {"usd": 1.07, ...}}`.
    ///
    /// # Errors
    /// `CurrencyError::Json` if the body has no `eur` object of numbers.
    pub fn from_json(body: &str) -> Result<Self, CurrencyError> {
        let body: RatesBody = serde_json::from_str(body)?;
        Ok(RateTable {
            rates: body
                .eur
                .into_iter()
                .map(|(code, rate)| (normalize(&code), rate))
                .collect(),
            date: body.date,
        })
    }

    pub fn with_rate(mut self, code: &str, rate: f64) -> Self {
        self.insert(code, rate);
        self
    }

    pub fn insert(&mut self, code: &str, rate: f64) {
        self.rates.insert(normalize(code), rate);
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(&normalize(code))
    }

    /// Publication date of the rates, when the source reported one.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Units of `code` per euro.
    ///
    /// # Errors
    /// - `CurrencyError::UnsupportedCurrency` if `code` is not in the table.
    /// - `CurrencyError::InvalidRate` if its rate is not a positive finite number.
    pub fn rate(&self, code: &str) -> Result<f64, CurrencyError> {
        let code = normalize(code);
        let rate = *self
            .rates
            .get(&code)
            .ok_or_else(|| CurrencyError::UnsupportedCurrency(code.clone()))?;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(CurrencyError::InvalidRate(code, rate));
        }
        Ok(rate)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Converts `amount` expressed in `currency` into euros.
///
/// # Errors
/// - `CurrencyError::MissingRateTable` when `rates` is `None`.
/// - Any lookup error of `RateTable::rate`.
pub fn convert_to_euro(
    amount: f64,
    currency: &str,
    rates: Option<&RateTable>,
) -> Result<f64, CurrencyError> {
    let rates = rates.ok_or(CurrencyError::MissingRateTable)?;
    Ok(amount / rates.rate(currency)?)
}

// The API keys its table with lower-case codes
fn normalize(code: &str) -> String {
    code.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_with_parsed_table() {
        let rates = RateTable::from_json(r#"{"eur": {"usd": 1.1}}"#).unwrap();
        let euros = convert_to_euro(110.0, "usd", Some(&rates)).unwrap();
        assert!((euros - 100.0).abs() < 1e-9);
        assert_eq!(rates.date(), None);
    }

    #[test]
    fn test_codes_are_case_insensitive() {
        let rates = RateTable::new().with_rate("INR", 90.0);
        assert!(rates.contains("inr"));
        assert_eq!(convert_to_euro(900.0, " Inr ", Some(&rates)).unwrap(), 10.0);
    }

    #[test]
    fn test_absent_code_is_reported() {
        let rates = RateTable::from_json(r#"{"date": "2024-05-01", "eur": {"usd": 1.1}}"#)
            .unwrap();
        assert_eq!(rates.date(), Some("2024-05-01"));
        assert_eq!(
            convert_to_euro(10.0, "xyz", Some(&rates)),
            Err(CurrencyError::UnsupportedCurrency("xyz".to_string()))
        );
    }

    #[test]
    fn test_missing_table_is_a_config_error() {
        assert_eq!(
            convert_to_euro(10.0, "usd", None),
            Err(CurrencyError::MissingRateTable)
        );
    }

    #[test]
    fn test_zero_rate_is_rejected() {
        let rates = RateTable::new().with_rate("btc", 0.0);
        assert!(matches!(
            rates.rate("btc"),
            Err(CurrencyError::InvalidRate(_, _))
        ));
    }

    #[test]
    fn test_body_without_eur_object() {
        assert!(matches!(
            RateTable::from_json(r#"{"usd": {"eur": 0.9}}"#),
            Err(CurrencyError::Json(_))
        ));
    }
}
