// ============================================================================
// Canonical Numerals
// Grammar validation and fixed-point rendering for decimal text
// ============================================================================
//
// Accepted grammar: `-?[0-9]+(\.[0-9]+)?`
// Rendered grammar: `-?[0-9]+(\.[0-9]{precision})?`, half-to-even rounding

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal as RawDecimal, RoundingStrategy};
use std::str::FromStr;

/// Largest scale the backing representation can hold.
pub const MAX_SCALE: u32 = 28;

/// Returns true if `text` matches the canonical numeral grammar.
pub fn is_canonical(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    match unsigned.split_once('.') {
        Some((int_part, frac_part)) => all_digits(int_part) && all_digits(frac_part),
        None => all_digits(unsigned),
    }
}

/// Parse a canonical numeral into the backing representation.
///
/// # Errors
/// - `InvalidNumeral` if `text` does not match the grammar
/// - `Overflow` if the integer part does not fit
pub fn parse(text: &str) -> NumericResult<RawDecimal> {
    if !is_canonical(text) {
        return Err(NumericError::InvalidNumeral);
    }

    // Excess fractional digits are rounded by the backing parser.
    RawDecimal::from_str(text).map_err(|_| NumericError::Overflow)
}

/// Render `value` with exactly `precision` fractional digits.
///
/// Rounds half-to-even at the cutoff. Zero never carries a sign.
/// Precision beyond [`MAX_SCALE`] is padded with zeros.
pub fn render_fixed(value: RawDecimal, precision: usize) -> String {
    let dp = (precision as u64).min(u64::from(MAX_SCALE)) as u32;
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);
    if rounded.is_zero() {
        rounded = RawDecimal::ZERO;
    }

    let mut text = rounded.normalize().to_string();
    if precision == 0 {
        return text;
    }

    let frac_len = match text.find('.') {
        Some(pos) => text.len() - pos - 1,
        None => {
            text.push('.');
            0
        },
    };
    text.extend(std::iter::repeat('0').take(precision.saturating_sub(frac_len)));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_accepts() {
        for text in ["0", "42", "-7", "3.14", "-0.001", "007.500"] {
            assert!(is_canonical(text), "{} should be accepted", text);
        }
    }

    #[test]
    fn test_grammar_rejects() {
        for text in [
            "", "-", ".5", "5.", "+1", "1.2.3", "1e5", " 1", "1 ", "1,000", "abc", "--1", "0x10",
            "1_000", "inf", "nan",
        ] {
            assert!(!is_canonical(text), "{:?} should be rejected", text);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("123.456").unwrap(), RawDecimal::new(123456, 3));
        assert_eq!(parse("-0.5").unwrap(), RawDecimal::new(-5, 1));
        assert_eq!(parse("1.5x"), Err(NumericError::InvalidNumeral));
    }

    #[test]
    fn test_parse_overflow() {
        let huge = "9".repeat(40);
        assert_eq!(parse(&huge), Err(NumericError::Overflow));
    }

    #[test]
    fn test_render_half_to_even() {
        assert_eq!(render_fixed(RawDecimal::new(2345, 3), 2), "2.34");
        assert_eq!(render_fixed(RawDecimal::new(2355, 3), 2), "2.36");
        assert_eq!(render_fixed(RawDecimal::new(-2345, 3), 2), "-2.34");
        assert_eq!(render_fixed(RawDecimal::new(25, 1), 0), "2");
        assert_eq!(render_fixed(RawDecimal::new(35, 1), 0), "4");
    }

    #[test]
    fn test_render_pads() {
        assert_eq!(render_fixed(RawDecimal::new(12, 0), 3), "12.000");
        assert_eq!(render_fixed(RawDecimal::new(15, 1), 4), "1.5000");
        assert_eq!(render_fixed(RawDecimal::new(15, 1), 30).len(), "1.".len() + 30);
    }

    #[test]
    fn test_render_zero_has_no_sign() {
        assert_eq!(render_fixed(RawDecimal::new(-1, 3), 2), "0.00");
        assert_eq!(render_fixed(RawDecimal::ZERO, 2), "0.00");
    }
}
