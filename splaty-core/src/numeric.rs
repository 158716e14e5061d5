//! Decimal-comma amount parsing ("1 234,56" style).

/// Parse a decimal-comma amount, returning 0.0 for anything unparseable.
///
/// Grouping spaces (including NO-BREAK SPACE) are dropped and the first comma
/// becomes the decimal point. The result is always finite.
pub fn parse_amount(s: &str) -> f64 {
    let compact: String = s
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let normalized = compact.replacen(',', ".", 1);

    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_decimal_comma() {
        assert_eq!(parse_amount("100,00"), 100.0);
        assert_eq!(parse_amount("  20,5 "), 20.5);
        assert_eq!(parse_amount("7"), 7.0);
        assert_eq!(parse_amount("-125,40"), -125.40);
        assert_eq!(parse_amount("+1,25"), 1.25);
    }

    #[test]
    fn test_grouping_spaces() {
        assert_eq!(parse_amount("1 234,56"), 1234.56);
        assert_eq!(parse_amount("12\u{a0}000,01"), 12000.01);
    }

    #[test]
    fn test_malformed_is_zero() {
        for s in ["", "   ", "abc", "1,2,3", ",", "12,34zł", "1.234,56", "inf", "NaN", "1e999"] {
            let v = parse_amount(s);
            assert!(v.is_finite(), "{s:?} gave non-finite {v}");
            assert_eq!(v, 0.0, "{s:?} should degrade to zero");
        }
    }
}
