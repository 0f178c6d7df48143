//! Operand parsing and normalization.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{TallyError, TallyResult};

/// Parse operand text into an exact decimal value.
///
/// Accepts plain decimal notation and scientific notation; anything else is a
/// `Validation` error carrying the offending input.
pub fn parse_operand(raw: &str) -> TallyResult<Decimal> {
    let text = raw.trim();
    if let Ok(value) = Decimal::from_str(text) {
        return Ok(value);
    }
    Decimal::from_scientific(text)
        .map_err(|_| TallyError::validation_for(raw, format!("Invalid number input: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_operand("2"), Ok(Decimal::from(2)));
        assert_eq!(parse_operand(" -3.25 "), Ok(Decimal::from_str("-3.25").unwrap()));
    }

    #[test]
    fn parses_scientific_notation() {
        assert_eq!(parse_operand("1e3"), Ok(Decimal::from(1000)));
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = parse_operand("invalid").unwrap_err();
        assert_eq!(err.category(), "validation");
    }

    #[test]
    fn round_trips_exact_text() {
        let value = parse_operand("0.1").unwrap();
        assert_eq!(value.to_string(), "0.1");
    }
}
