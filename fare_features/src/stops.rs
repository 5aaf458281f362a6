use crate::errors::FeatureError;

const NON_STOP: &str = "non-stop";

/// Parses a `Total_Stops` value.
///
/// A missing value passes through as `None`; `"non-stop"` is `0`; anything
/// else must contain a run of decimal digits, and the first run found is the
/// stop count (`"2 stops"` is `2`).
///
/// # Errors
/// `FeatureError::InvalidStops` when no digit run is present.
pub fn parse_stops(raw: Option<&str>) -> Result<Option<u32>, FeatureError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if raw.trim() == NON_STOP {
        return Ok(Some(0));
    }

    let digits: String = raw
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return Err(FeatureError::InvalidStops(raw.to_string()));
    }
    digits
        .parse()
        .map(Some)
        .map_err(|_| FeatureError::InvalidStops(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_stop() {
        assert_eq!(parse_stops(Some("non-stop")).unwrap(), Some(0));
    }

    #[test]
    fn test_counts() {
        assert_eq!(parse_stops(Some("2 stops")).unwrap(), Some(2));
        assert_eq!(parse_stops(Some("1 stop")).unwrap(), Some(1));
        assert_eq!(parse_stops(Some("stops: 12, maybe 3")).unwrap(), Some(12));
    }

    #[test]
    fn test_missing_value_passes_through() {
        assert_eq!(parse_stops(None).unwrap(), None);
    }

    #[test]
    fn test_no_digits_is_a_format_error() {
        assert!(matches!(
            parse_stops(Some("direct")),
            Err(FeatureError::InvalidStops(ref raw)) if raw == "direct"
        ));
    }
}
