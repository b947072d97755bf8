use crate::error::ParseError;
use core_types::Sample;

/// Parses comma-separated numbers such as `"5, 7, 8, 9, 10"`.
///
/// Whitespace around each value is ignored. Empty entries (`"1,,2"`),
/// non-numeric tokens and `NaN`/infinite values are rejected with the
/// 1-based position of the offending entry.
pub fn parse_values(text: &str) -> Result<Sample, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let values = text
        .split(',')
        .enumerate()
        .map(|(i, raw)| parse_token(i + 1, raw.trim()))
        .collect::<Result<Vec<f64>, ParseError>>()?;

    tracing::debug!(count = values.len(), "Parsed values from text input.");
    Ok(Sample::new(values)?)
}

fn parse_token(position: usize, token: &str) -> Result<f64, ParseError> {
    let value: f64 = token.parse().map_err(|_| ParseError::InvalidNumber {
        position,
        token: token.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ParseError::NonFinite {
            position,
            token: token.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_values_in_order() {
        let sample = parse_values("5, 7, 8, 9, 10, 10, 25, 30, 100").unwrap();
        assert_eq!(
            sample.values(),
            &[5.0, 7.0, 8.0, 9.0, 10.0, 10.0, 25.0, 30.0, 100.0]
        );
    }

    #[test]
    fn accepts_signs_decimals_and_exponents() {
        let sample = parse_values(" -1.5,+2,3e2 ,\n0.25").unwrap();
        assert_eq!(sample.values(), &[-1.5, 2.0, 300.0, 0.25]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(matches!(parse_values(""), Err(ParseError::Empty)));
        assert!(matches!(parse_values("   \n"), Err(ParseError::Empty)));
    }

    #[test]
    fn reports_position_of_invalid_token() {
        match parse_values("1, 2, abc, 4") {
            Err(ParseError::InvalidNumber { position, token }) => {
                assert_eq!(position, 3);
                assert_eq!(token, "abc");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn empty_entries_are_invalid() {
        assert!(matches!(
            parse_values("1,,2"),
            Err(ParseError::InvalidNumber { position: 2, .. })
        ));
        assert!(matches!(
            parse_values("1,2,"),
            Err(ParseError::InvalidNumber { position: 3, .. })
        ));
    }

    #[test]
    fn non_finite_tokens_are_rejected() {
        assert!(matches!(
            parse_values("1, NaN"),
            Err(ParseError::NonFinite { position: 2, .. })
        ));
        assert!(matches!(
            parse_values("inf, 1"),
            Err(ParseError::NonFinite { position: 1, .. })
        ));
    }
}
