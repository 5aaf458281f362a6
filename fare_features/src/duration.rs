use crate::errors::FeatureError;

/// Parses a flight duration such as `"2h 30m"`, `"3h"` or `"45m"` into minutes.
///
/// The string is split on whitespace:
/// - two tokens are read as hours then minutes,
/// - a single token is minutes when it ends in `m`, hours otherwise.
///
/// Every non-digit character is stripped from a token before converting it.
///
/// # Errors
/// `FeatureError::InvalidDuration` when the token count is neither 1 nor 2, or
/// when a token holds no digit.
pub fn parse_duration(raw: &str) -> Result<u32, FeatureError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();

    let (hours, minutes) = match tokens.as_slice() {
        [hours, minutes] => (digits_of(hours, raw)?, digits_of(minutes, raw)?),
        [single] if single.ends_with('m') => (0, digits_of(single, raw)?),
        [single] => (digits_of(single, raw)?, 0),
        _ => return Err(FeatureError::InvalidDuration(raw.to_string())),
    };

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| FeatureError::InvalidDuration(raw.to_string()))
}

fn digits_of(token: &str, raw: &str) -> Result<u32, FeatureError> {
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    digits
        .parse()
        .map_err(|_| FeatureError::InvalidDuration(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(parse_duration("2h 30m").unwrap(), 150);
        assert_eq!(parse_duration("19h 5m").unwrap(), 1145);
    }

    #[test]
    fn test_single_token() {
        assert_eq!(parse_duration("45m").unwrap(), 45);
        assert_eq!(parse_duration("3h").unwrap(), 180);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_duration("  1h   5m ").unwrap(), 65);
    }

    #[test]
    fn test_three_tokens_is_a_format_error() {
        let err = parse_duration("1h 2m 3s").unwrap_err();
        assert!(matches!(err, FeatureError::InvalidDuration(ref raw) if raw == "1h 2m 3s"));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_empty_and_digitless_input() {
        assert!(matches!(
            parse_duration(""),
            Err(FeatureError::InvalidDuration(_))
        ));
        assert!(matches!(
            parse_duration("hm"),
            Err(FeatureError::InvalidDuration(_))
        ));
    }
}
