// ============================================================================
// Decimal
// Deterministic decimal scalar with non-finite sentinels
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::numeral;
use rust_decimal::Decimal as RawDecimal;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Signed decimal number with a fixed internal precision.
///
/// Finite values are held as a base-10 mantissa and scale (28 significant
/// digits), never as a binary float. Division by zero and overflow do not
/// trap: they produce an infinity or NaN sentinel that keeps propagating
/// through later arithmetic until the caller checks [`Decimal::is_finite`].
///
/// # Construction
/// - Integers are exact.
/// - Floats are rendered with 4 fractional digits (half-to-even) and that
///   text is parsed, so two floats that print alike give equal decimals.
/// - Strings must be canonical numerals; `From<&str>` yields zero otherwise,
///   `str::parse` reports the failure.
///
/// # Ordering
/// Total order `-inf < finite < +inf < NaN`. Finite values compare by exact
/// numeric value (`1.0 == 1.00`).
///
/// # Example
/// ```
/// use decimal_number::numeric::Decimal;
///
/// let third = Decimal::from(1) / 3;
/// assert_eq!(third.to_fixed(4), "0.3333");
/// assert!(!(Decimal::ONE / 0).is_finite());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(Repr);

// Variant order is the ordering of the type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Repr {
    NegInfinity,
    Finite(RawDecimal),
    PosInfinity,
    NaN,
}

// ============================================================================
// Constants
// ============================================================================

impl Decimal {
    /// Zero value
    pub const ZERO: Self = Self::from_raw(RawDecimal::ZERO);

    /// One (1.0)
    pub const ONE: Self = Self::from_raw(RawDecimal::ONE);

    /// Minus one (-1.0)
    pub const NEGATIVE_ONE: Self = Self::from_raw(RawDecimal::NEGATIVE_ONE);

    /// Two (2.0)
    pub const TWO: Self = Self::from_raw(RawDecimal::TWO);

    /// π at full internal precision
    pub const PI: Self = Self::from_raw(RawDecimal::PI);

    /// Largest finite value
    pub const MAX: Self = Self::from_raw(RawDecimal::MAX);

    /// Smallest finite value
    pub const MIN: Self = Self::from_raw(RawDecimal::MIN);

    /// Positive infinity sentinel
    pub const INFINITY: Self = Self(Repr::PosInfinity);

    /// Negative infinity sentinel
    pub const NEG_INFINITY: Self = Self(Repr::NegInfinity);

    /// Not-a-number sentinel
    pub const NAN: Self = Self(Repr::NaN);

    /// Fractional digits used when quantizing a float source.
    pub const FLOAT_FRACTION_DIGITS: usize = 4;

    /// Precision used by `Display` and [`Decimal::to_f64`].
    pub const DEFAULT_DISPLAY_PRECISION: usize = 2;

    /// Largest number of fractional digits held internally.
    pub const MAX_PRECISION: usize = numeral::MAX_SCALE as usize;
}

// ============================================================================
// Construction
// ============================================================================

impl Decimal {
    /// Wrap a finite backing value.
    #[inline]
    pub const fn from_raw(raw: RawDecimal) -> Self {
        Self(Repr::Finite(raw))
    }

    /// Build `mantissa × 10^-scale` at compile time.
    ///
    /// `scale` must not exceed 28.
    #[inline]
    pub const fn from_scaled(mantissa: u32, scale: u32) -> Self {
        Self::from_raw(RawDecimal::from_parts(mantissa, 0, 0, false, scale))
    }

    /// Infinity carrying the given sign.
    #[inline]
    pub(crate) const fn infinity(negative: bool) -> Self {
        if negative {
            Self::NEG_INFINITY
        } else {
            Self::INFINITY
        }
    }

    /// Parse a canonical numeral, falling back to zero.
    pub fn parse_or_zero(text: &str) -> Self {
        text.parse().unwrap_or_default()
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<RawDecimal> for Decimal {
    #[inline]
    fn from(raw: RawDecimal) -> Self {
        Self::from_raw(raw)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_raw(RawDecimal::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i32, u32, i64, u64, usize);

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            return Self::NAN;
        }
        if value.is_infinite() {
            return Self::infinity(value < 0.0);
        }

        let text = format!("{:.*}", Self::FLOAT_FRACTION_DIGITS, value);
        match numeral::parse(&text) {
            Ok(raw) => Self::from_raw(raw),
            Err(_) => Self::infinity(value < 0.0),
        }
    }
}

impl From<f32> for Decimal {
    #[inline]
    fn from(value: f32) -> Self {
        Self::from(f64::from(value))
    }
}

impl From<&str> for Decimal {
    #[inline]
    fn from(text: &str) -> Self {
        Self::parse_or_zero(text)
    }
}

impl From<&String> for Decimal {
    #[inline]
    fn from(text: &String) -> Self {
        Self::parse_or_zero(text)
    }
}

impl From<String> for Decimal {
    #[inline]
    fn from(text: String) -> Self {
        Self::parse_or_zero(&text)
    }
}

// ============================================================================
// Scalar Promotion
// ============================================================================

/// Types that promote to a [`Decimal`] operand.
///
/// Every operator accepting a scalar goes through this trait, so native
/// numbers and numeral strings follow exactly the constructor rules.
pub trait IntoDecimal {
    /// Convert into a decimal using the documented constructor rules.
    fn into_decimal(self) -> Decimal;
}

macro_rules! impl_into_decimal {
    ($($t:ty),*) => {
        $(
            impl IntoDecimal for $t {
                #[inline]
                fn into_decimal(self) -> Decimal {
                    Decimal::from(self)
                }
            }
        )*
    };
}

impl_into_decimal!(i32, u32, i64, u64, usize, f32, f64, &str, &String, String, RawDecimal);

impl IntoDecimal for Decimal {
    #[inline]
    fn into_decimal(self) -> Decimal {
        self
    }
}

impl IntoDecimal for &Decimal {
    #[inline]
    fn into_decimal(self) -> Decimal {
        *self
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Decimal {
    /// The backing value, if finite.
    #[inline]
    pub const fn to_raw(self) -> Option<RawDecimal> {
        match self.0 {
            Repr::Finite(raw) => Some(raw),
            _ => None,
        }
    }

    /// The backing value.
    ///
    /// # Errors
    /// Returns `NonFinite` for the infinity and NaN sentinels.
    #[inline]
    pub fn to_rust_decimal(self) -> NumericResult<RawDecimal> {
        self.to_raw().ok_or(NumericError::NonFinite)
    }

    /// True unless the value is an infinity or NaN sentinel.
    #[inline]
    pub const fn is_finite(self) -> bool {
        matches!(self.0, Repr::Finite(_))
    }

    /// True for either infinity.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        matches!(self.0, Repr::PosInfinity | Repr::NegInfinity)
    }

    /// True for the NaN sentinel.
    #[inline]
    pub const fn is_nan(self) -> bool {
        matches!(self.0, Repr::NaN)
    }

    /// True for a finite zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        matches!(self.0, Repr::Finite(raw) if raw.is_zero())
    }

    /// True for negative finite values and negative infinity.
    #[inline]
    pub fn is_sign_negative(self) -> bool {
        match self.0 {
            Repr::Finite(raw) => raw.is_sign_negative() && !raw.is_zero(),
            Repr::NegInfinity => true,
            Repr::PosInfinity | Repr::NaN => false,
        }
    }
}

// ============================================================================
// Arithmetic Core
// ============================================================================

impl Decimal {
    fn add_decimal(self, rhs: Self) -> Self {
        match (self.0, rhs.0) {
            (Repr::NaN, _) | (_, Repr::NaN) => Self::NAN,
            (Repr::PosInfinity, Repr::NegInfinity) | (Repr::NegInfinity, Repr::PosInfinity) => {
                Self::NAN
            },
            (Repr::PosInfinity, _) | (_, Repr::PosInfinity) => Self::INFINITY,
            (Repr::NegInfinity, _) | (_, Repr::NegInfinity) => Self::NEG_INFINITY,
            (Repr::Finite(a), Repr::Finite(b)) => match a.checked_add(b) {
                Some(sum) => Self::from_raw(sum),
                // Overflow only happens when both operands share a sign.
                None => Self::infinity(a.is_sign_negative()),
            },
        }
    }

    fn mul_decimal(self, rhs: Self) -> Self {
        match (self.0, rhs.0) {
            (Repr::NaN, _) | (_, Repr::NaN) => Self::NAN,
            (Repr::Finite(a), Repr::Finite(b)) => match a.checked_mul(b) {
                Some(product) => Self::from_raw(product),
                None => Self::infinity(a.is_sign_negative() != b.is_sign_negative()),
            },
            _ => {
                if self.is_zero() || rhs.is_zero() {
                    Self::NAN
                } else {
                    Self::infinity(self.is_sign_negative() != rhs.is_sign_negative())
                }
            },
        }
    }

    fn div_decimal(self, rhs: Self) -> Self {
        match (self.0, rhs.0) {
            (Repr::NaN, _) | (_, Repr::NaN) => Self::NAN,
            (Repr::Finite(a), Repr::Finite(b)) => {
                if b.is_zero() {
                    tracing::trace!(dividend = %a, "division by zero yields a non-finite decimal");
                    return if a.is_zero() {
                        Self::NAN
                    } else {
                        Self::infinity(a.is_sign_negative())
                    };
                }
                match a.checked_div(b) {
                    Some(quotient) => Self::from_raw(quotient),
                    None => Self::infinity(a.is_sign_negative() != b.is_sign_negative()),
                }
            },
            (Repr::Finite(_), _) => Self::ZERO,
            (_, Repr::Finite(_)) => {
                Self::infinity(self.is_sign_negative() != rhs.is_sign_negative())
            },
            _ => Self::NAN,
        }
    }
}

// ============================================================================
// Operators
// ============================================================================
//
// Compound assignment is the primitive; the pure operators copy the
// receiver and delegate to it.

impl<T: IntoDecimal> AddAssign<T> for Decimal {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        *self = self.add_decimal(rhs.into_decimal());
    }
}

impl<T: IntoDecimal> SubAssign<T> for Decimal {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        *self = self.add_decimal(-rhs.into_decimal());
    }
}

impl<T: IntoDecimal> MulAssign<T> for Decimal {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = self.mul_decimal(rhs.into_decimal());
    }
}

impl<T: IntoDecimal> DivAssign<T> for Decimal {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = self.div_decimal(rhs.into_decimal());
    }
}

macro_rules! impl_binary_op {
    ($($trait:ident, $method:ident, $assign:ident);*) => {
        $(
            impl<T: IntoDecimal> $trait<T> for Decimal {
                type Output = Decimal;

                #[inline]
                fn $method(self, rhs: T) -> Decimal {
                    let mut result = self;
                    result.$assign(rhs);
                    result
                }
            }
        )*
    };
}

impl_binary_op!(
    Add, add, add_assign;
    Sub, sub, sub_assign;
    Mul, mul, mul_assign;
    Div, div, div_assign
);

// Native and string operands on the left-hand side.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<Decimal> for $t {
                type Output = Decimal;

                #[inline]
                fn add(self, rhs: Decimal) -> Decimal {
                    self.into_decimal() + rhs
                }
            }

            impl Sub<Decimal> for $t {
                type Output = Decimal;

                #[inline]
                fn sub(self, rhs: Decimal) -> Decimal {
                    self.into_decimal() - rhs
                }
            }

            impl Mul<Decimal> for $t {
                type Output = Decimal;

                #[inline]
                fn mul(self, rhs: Decimal) -> Decimal {
                    self.into_decimal() * rhs
                }
            }

            impl Div<Decimal> for $t {
                type Output = Decimal;

                #[inline]
                fn div(self, rhs: Decimal) -> Decimal {
                    self.into_decimal() / rhs
                }
            }
        )*
    };
}

impl_scalar_lhs!(i32, u32, i64, u64, usize, f32, f64, &str);

impl Neg for Decimal {
    type Output = Self;

    /// Multiplies by -1; infinities flip sign and NaN stays NaN.
    #[inline]
    fn neg(self) -> Self::Output {
        match self.0 {
            Repr::Finite(raw) => Self::from_raw(-raw),
            Repr::PosInfinity => Self::NEG_INFINITY,
            Repr::NegInfinity => Self::INFINITY,
            Repr::NaN => Self::NAN,
        }
    }
}

impl std::iter::Sum for Decimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, value| acc + value)
    }
}

// ============================================================================
// Text and Float Conversion
// ============================================================================

impl Decimal {
    /// Render with exactly `precision` fractional digits.
    ///
    /// Half-to-even rounding at the cutoff, no grouping, no `+`. This is the
    /// canonical serialization form. Sentinels render as `inf`, `-inf`, `nan`.
    ///
    /// ```
    /// use decimal_number::numeric::Decimal;
    ///
    /// assert_eq!(Decimal::from("2.345").to_fixed(2), "2.34");
    /// assert_eq!(Decimal::from(12).to_fixed(3), "12.000");
    /// ```
    pub fn to_fixed(self, precision: usize) -> String {
        match self.0 {
            Repr::Finite(raw) => numeral::render_fixed(raw, precision),
            Repr::PosInfinity => "inf".to_string(),
            Repr::NegInfinity => "-inf".to_string(),
            Repr::NaN => "nan".to_string(),
        }
    }

    /// Shortest exact rendering of the internal value.
    ///
    /// Finite output is a canonical numeral that parses back to an equal value.
    pub fn to_exact_string(self) -> String {
        match self.0 {
            Repr::Finite(raw) => {
                let normalized = raw.normalize();
                numeral::render_fixed(normalized, normalized.scale() as usize)
            },
            _ => self.to_fixed(0),
        }
    }

    /// Lossy, display-oriented conversion to `f64`.
    ///
    /// Renders at [`Decimal::DEFAULT_DISPLAY_PRECISION`] and parses the text.
    pub fn to_f64(self) -> f64 {
        match self.0 {
            Repr::Finite(_) => self
                .to_fixed(Self::DEFAULT_DISPLAY_PRECISION)
                .parse()
                .unwrap_or(f64::NAN),
            Repr::PosInfinity => f64::INFINITY,
            Repr::NegInfinity => f64::NEG_INFINITY,
            Repr::NaN => f64::NAN,
        }
    }

    /// Parse either a canonical numeral or a sentinel name (`inf`, `-inf`, `nan`).
    #[cfg(feature = "serde")]
    pub(crate) fn parse_exact(text: &str) -> NumericResult<Self> {
        match text {
            "inf" => Ok(Self::INFINITY),
            "-inf" => Ok(Self::NEG_INFINITY),
            "nan" => Ok(Self::NAN),
            _ => text.parse(),
        }
    }
}

impl FromStr for Decimal {
    type Err = NumericError;

    /// Parse a canonical numeral: optional `-`, digits, optional `.digits`.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0.001" -> -0.001
    /// - "+1", ".5", "1e3" -> `InvalidNumeral`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        numeral::parse(s).map(Self::from_raw).inspect_err(|err| {
            tracing::debug!(input = s, error = %err, "rejected decimal numeral");
        })
    }
}

impl fmt::Display for Decimal {
    /// Honors the formatter precision; defaults to two fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(Self::DEFAULT_DISPLAY_PRECISION);
        f.write_str(&self.to_fixed(precision))
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.to_exact_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
