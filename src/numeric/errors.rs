// ============================================================================
// Numeric Errors
// Error types for decimal parsing and vector text handling
// ============================================================================

use std::fmt;

/// Errors reported by the fallible decimal and vector operations.
///
/// Arithmetic itself never fails: non-finite results travel as values
/// (see [`Decimal::is_finite`](super::Decimal::is_finite)). These errors
/// cover the textual contract and argument validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A well-formed numeral whose integer part exceeds the internal range
    Overflow,
    /// Input text is not a canonical numeral
    InvalidNumeral,
    /// A required `X=`/`Y=`/`Z=` field is absent from vector text
    MissingComponent(&'static str),
    /// Argument outside the accepted domain of an operation
    InvalidInput,
    /// The value is an infinity or NaN sentinel
    NonFinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "numeral overflow: value exceeds the representable range")
            },
            NumericError::InvalidNumeral => write!(f, "invalid numeral: could not parse value"),
            NumericError::MissingComponent(key) => {
                write!(f, "missing component: no `{}` field found", key)
            },
            NumericError::InvalidInput => write!(f, "invalid input: argument out of domain"),
            NumericError::NonFinite => write!(f, "non-finite value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidNumeral.to_string(),
            "invalid numeral: could not parse value"
        );
        assert_eq!(
            NumericError::MissingComponent("Y=").to_string(),
            "missing component: no `Y=` field found"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::InvalidNumeral);
        assert_ne!(
            NumericError::MissingComponent("X="),
            NumericError::MissingComponent("Z=")
        );
    }
}
