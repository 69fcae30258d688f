// ============================================================================
// Vector Text Forms
// `X=.. Y=.. Z=..` and compact `V(..)` rendering and parsing
// ============================================================================

use super::DecimalVector;
use crate::config::Tolerances;
use crate::math;
use crate::numeric::{Decimal, NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;

const FIELD_KEYS: [&str; 3] = ["X=", "Y=", "Z="];
const COMPACT_ZERO: &str = "V(0)";

impl DecimalVector {
    /// Precision used by `Display`.
    pub const DEFAULT_TEXT_PRECISION: usize = 3;

    /// Precision of each component in the compact form.
    pub const COMPACT_PRECISION: usize = 2;

    /// `X=<x> Y=<y> Z=<z>`, each component rendered with
    /// [`Decimal::to_fixed`].
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        format!(
            "X={} Y={} Z={}",
            self.x().to_fixed(precision),
            self.y().to_fixed(precision),
            self.z().to_fixed(precision)
        )
    }

    /// `V(0)` when the whole vector is within `kinda_small_number` of zero,
    /// otherwise `V(..)` listing the components that exceed `small_number`,
    /// at two fractional digits.
    ///
    /// ```
    /// use decimal_number::vector::DecimalVector;
    ///
    /// assert_eq!(DecimalVector::ZERO.to_compact_string(), "V(0)");
    /// assert_eq!(DecimalVector::new(1, 0, 2).to_compact_string(), "V(X=1.00, Z=2.00)");
    /// assert_eq!(DecimalVector::new("0.00005", 2, 0).to_compact_string(), "V(X=0.00, Y=2.00)");
    /// ```
    pub fn to_compact_string(&self) -> String {
        self.to_compact_string_with(&Tolerances::DEFAULT)
    }

    /// [`DecimalVector::to_compact_string`] against `tolerances`.
    pub fn to_compact_string_with(&self, tolerances: &Tolerances) -> String {
        if self.is_nearly_zero(tolerances.kinda_small_number) {
            return COMPACT_ZERO.to_string();
        }

        let fields: Vec<String> = FIELD_KEYS
            .iter()
            .zip(self.to_array())
            .filter(|(_, value)| !math::is_nearly_zero(*value, tolerances.small_number))
            .map(|(key, value)| format!("{}{}", key, value.to_fixed(Self::COMPACT_PRECISION)))
            .collect();
        format!("V({})", fields.join(", "))
    }

    /// Parse the compact form.
    ///
    /// `V(0)` anywhere in the text wins. Otherwise any subset of the three
    /// fields may appear, and every field present must be a canonical
    /// numeral; absent fields are zero.
    ///
    /// # Errors
    /// `MissingComponent` when no field is present, `InvalidNumeral` or
    /// `Overflow` when a present field does not parse.
    pub fn parse_compact(text: &str) -> NumericResult<Self> {
        if find_ignore_case(text, COMPACT_ZERO).is_some() {
            return Ok(Self::ZERO);
        }

        let mut result = Self::ZERO;
        let mut found = false;
        for (index, key) in FIELD_KEYS.iter().enumerate() {
            if let Some(field) = scan_field(text, key) {
                result[index] = field.parse()?;
                found = true;
            }
        }

        if found {
            Ok(result)
        } else {
            Err(NumericError::MissingComponent(FIELD_KEYS[0]))
        }
    }

    /// Replace this vector with the one parsed from `X=.. Y=.. Z=..` text.
    ///
    /// The vector is zeroed first and stays zero when parsing fails.
    pub fn init_from_string(&mut self, text: &str) -> bool {
        *self = Self::ZERO;
        match text.parse() {
            Ok(parsed) => {
                *self = parsed;
                true
            },
            Err(err) => {
                tracing::debug!(input = text, error = %err, "rejected vector text");
                false
            },
        }
    }

    /// Replace this vector with the one parsed from the compact form.
    ///
    /// The vector is zeroed first and stays zero when parsing fails.
    pub fn init_from_compact_string(&mut self, text: &str) -> bool {
        *self = Self::ZERO;
        match Self::parse_compact(text) {
            Ok(parsed) => {
                *self = parsed;
                true
            },
            Err(err) => {
                tracing::debug!(input = text, error = %err, "rejected compact vector text");
                false
            },
        }
    }

    /// Full-precision text with sentinel names allowed.
    pub(crate) fn to_exact_string(&self) -> String {
        format!(
            "X={} Y={} Z={}",
            self.x().to_exact_string(),
            self.y().to_exact_string(),
            self.z().to_exact_string()
        )
    }

    /// Inverse of [`DecimalVector::to_exact_string`].
    #[cfg(feature = "serde")]
    pub(crate) fn parse_exact(text: &str) -> NumericResult<Self> {
        parse_fields(text, Decimal::parse_exact)
    }
}

impl FromStr for DecimalVector {
    type Err = NumericError;

    /// Parse `X=<n> Y=<n> Z=<n>`; all three fields are required, in any
    /// order, with keys matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fields(s, |field| field.parse())
    }
}

impl fmt::Display for DecimalVector {
    /// Honors the formatter precision; defaults to three fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(Self::DEFAULT_TEXT_PRECISION);
        f.write_str(&self.to_string_with_precision(precision))
    }
}

impl fmt::Debug for DecimalVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalVector({})", self.to_exact_string())
    }
}

// ============================================================================
// Field Scanning
// ============================================================================

fn parse_fields(
    text: &str,
    parse: impl Fn(&str) -> NumericResult<Decimal>,
) -> NumericResult<DecimalVector> {
    let mut result = DecimalVector::ZERO;
    for (index, key) in FIELD_KEYS.iter().enumerate() {
        let field = scan_field(text, key).ok_or(NumericError::MissingComponent(*key))?;
        result[index] = parse(field)?;
    }
    Ok(result)
}

/// Byte offset of the first ASCII case-insensitive match of `needle`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Value following `key`, up to whitespace, `,` or `)`.
fn scan_field<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    let start = find_ignore_case(text, key)? + key.len();
    // `key` is ASCII, so `start` is a char boundary.
    let rest = &text[start..];
    let end = rest
        .find(|c: char| c.is_whitespace() || c == ',' || c == ')')
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
