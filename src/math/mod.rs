// ============================================================================
// Decimal Math
// Stateless rounding, comparison and transcendental functions over Decimal
// ============================================================================
//
// Every function is pure. Domain errors (square root of a negative,
// arc-cosine outside [-1, 1], transcendental of a sentinel) return NaN
// rather than failing, so results can be checked once with `is_finite`.

mod trig;

pub use trig::{
    acos, atan, atan2, cos, degrees_to_radians, radians_to_degrees, sin, sin_cos, unwind_degrees,
};

use crate::numeric::{Decimal, IntoDecimal};
use rust_decimal::prelude::{MathematicalOps, ToPrimitive};
use rust_decimal::Decimal as RawDecimal;

/// Reciprocal of `value`.
///
/// This is `1 / value`, not an approximated inverse square root: callers
/// normalizing a vector pass the magnitude, not the squared magnitude.
#[inline]
pub fn inv_sqrt(value: Decimal) -> Decimal {
    Decimal::ONE / value
}

/// Absolute value; negative infinity becomes positive infinity.
#[inline]
pub fn abs(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        -value
    } else {
        value
    }
}

/// Largest integer not above `value`.
pub fn floor(value: Decimal) -> Decimal {
    match value.to_raw() {
        Some(raw) => Decimal::from_raw(raw.floor()),
        None => value,
    }
}

/// Smallest integer not below `value`.
pub fn ceil(value: Decimal) -> Decimal {
    match value.to_raw() {
        Some(raw) => Decimal::from_raw(raw.ceil()),
        None => value,
    }
}

/// Square root; NaN for negative input.
pub fn sqrt(value: Decimal) -> Decimal {
    if value == Decimal::INFINITY {
        return value;
    }
    value
        .to_raw()
        .and_then(|raw| raw.sqrt())
        .map_or(Decimal::NAN, Decimal::from_raw)
}

/// `value * value`
#[inline]
pub fn square(value: Decimal) -> Decimal {
    value * value
}

/// `base` raised to `exponent`.
///
/// Integral exponents use repeated multiplication and accept any base;
/// fractional exponents require a positive base.
pub fn power(base: Decimal, exponent: impl IntoDecimal) -> Decimal {
    let exponent = exponent.into_decimal();
    let (Some(raw_base), Some(raw_exp)) = (base.to_raw(), exponent.to_raw()) else {
        return Decimal::NAN;
    };

    let integral = raw_exp.fract().is_zero();
    let odd = integral && !(raw_exp % RawDecimal::TWO).is_zero();
    let result = if integral {
        match raw_exp.to_i64() {
            Some(exp) => raw_base.checked_powi(exp),
            None if raw_base.abs() == RawDecimal::ONE => {
                Some(if raw_base.is_sign_negative() && odd {
                    RawDecimal::NEGATIVE_ONE
                } else {
                    RawDecimal::ONE
                })
            },
            None => None,
        }
    } else if raw_base.is_sign_negative() && !raw_base.is_zero() {
        return Decimal::NAN;
    } else {
        raw_base.checked_powd(raw_exp)
    };

    match result {
        Some(raw) => Decimal::from_raw(raw),
        None => {
            // Out of range: the magnitude grows when |base| > 1 and the
            // exponent is positive, or |base| < 1 and it is negative.
            let grows = (raw_base.abs() > RawDecimal::ONE) != raw_exp.is_sign_negative();
            if grows {
                Decimal::infinity(raw_base.is_sign_negative() && odd)
            } else {
                Decimal::ZERO
            }
        },
    }
}

/// True unless `value` holds an infinity or NaN sentinel.
#[inline]
pub fn is_finite(value: Decimal) -> bool {
    value.is_finite()
}

/// `abs(value) <= tolerance`
#[inline]
pub fn is_nearly_zero(value: Decimal, tolerance: Decimal) -> bool {
    abs(value) <= tolerance
}

/// Snap `location` to the nearest multiple of `grid`, rounding halves up.
///
/// Returns `location` unchanged when `grid` is zero.
pub fn grid_snap(location: Decimal, grid: Decimal) -> Decimal {
    if grid.is_zero() {
        location
    } else {
        floor((location + grid / 2) / grid) * grid
    }
}

/// Smaller of two values; `a` on ties.
#[inline]
pub fn min(a: Decimal, b: Decimal) -> Decimal {
    if a <= b {
        a
    } else {
        b
    }
}

/// Larger of two values; `a` on ties.
#[inline]
pub fn max(a: Decimal, b: Decimal) -> Decimal {
    if a >= b {
        a
    } else {
        b
    }
}

#[inline]
pub fn min3(a: Decimal, b: Decimal, c: Decimal) -> Decimal {
    min(min(a, b), c)
}

#[inline]
pub fn max3(a: Decimal, b: Decimal, c: Decimal) -> Decimal {
    max(max(a, b), c)
}

/// Clamp `value` into `[lo, hi]`.
#[inline]
pub fn clamp(value: Decimal, lo: Decimal, hi: Decimal) -> Decimal {
    if value < lo {
        lo
    } else if value < hi {
        value
    } else {
        hi
    }
}
