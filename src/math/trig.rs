// ============================================================================
// Trigonometry
// Sine, cosine, arc functions and angle unit handling
// ============================================================================

use crate::numeric::{Decimal, IntoDecimal};
use rust_decimal::prelude::MathematicalOps;
use rust_decimal::Decimal as RawDecimal;

/// Half-angle reductions applied before the arctangent series.
const ATAN_HALVINGS: u32 = 2;

/// Upper bound on series terms; the reduced argument converges long before.
const ATAN_MAX_TERMS: u32 = 64;

const DEGREES_HALF_TURN: Decimal = Decimal::from_scaled(180, 0);
const DEGREES_FULL_TURN: Decimal = Decimal::from_scaled(360, 0);

/// Sine of an angle in radians.
pub fn sin(value: Decimal) -> Decimal {
    value
        .to_raw()
        .and_then(|raw| raw.checked_sin())
        .map_or(Decimal::NAN, Decimal::from_raw)
}

/// Cosine of an angle in radians.
pub fn cos(value: Decimal) -> Decimal {
    value
        .to_raw()
        .and_then(|raw| raw.checked_cos())
        .map_or(Decimal::NAN, Decimal::from_raw)
}

/// Sine and cosine of the same angle, in that order.
///
/// Accepts any scalar source; floats go through the canonical quantization
/// first, so the result never depends on the host's float trigonometry.
pub fn sin_cos(value: impl IntoDecimal) -> (Decimal, Decimal) {
    let value = value.into_decimal();
    (sin(value), cos(value))
}

/// Arctangent in radians, in `[-π/2, π/2]`.
pub fn atan(value: Decimal) -> Decimal {
    if value.is_infinite() {
        let half_pi = Decimal::from_raw(RawDecimal::HALF_PI);
        return if value.is_sign_negative() { -half_pi } else { half_pi };
    }
    value
        .to_raw()
        .and_then(atan_raw)
        .map_or(Decimal::NAN, Decimal::from_raw)
}

/// Angle of the point `(x, y)` from the positive X axis, in `(-π, π]`.
pub fn atan2(y: Decimal, x: Decimal) -> Decimal {
    if y.is_nan() || x.is_nan() {
        return Decimal::NAN;
    }

    let pi = Decimal::PI;
    let y_negative = y.is_sign_negative();
    let signed = |angle: Decimal| if y_negative { -angle } else { angle };

    if x.is_infinite() || y.is_infinite() {
        return match (x.is_infinite(), y.is_infinite()) {
            (true, true) if x.is_sign_negative() => signed(pi * 3 / 4),
            (true, true) => signed(pi / 4),
            (true, false) if x.is_sign_negative() => signed(pi),
            (true, false) => Decimal::ZERO,
            _ => signed(pi / 2),
        };
    }

    if x.is_zero() {
        return if y.is_zero() { Decimal::ZERO } else { signed(pi / 2) };
    }

    let ratio = y / x;
    if !ratio.is_finite() {
        // |x| is negligible next to |y|.
        return signed(pi / 2);
    }

    let angle = atan(ratio);
    if !x.is_sign_negative() {
        angle
    } else if y_negative {
        angle - pi
    } else {
        angle + pi
    }
}

/// Arc-cosine in radians, in `[0, π]`; NaN outside `[-1, 1]`.
pub fn acos(value: Decimal) -> Decimal {
    if !value.is_finite() || value > Decimal::ONE || value < Decimal::NEGATIVE_ONE {
        return Decimal::NAN;
    }
    let opposite = super::sqrt(Decimal::ONE - value * value);
    atan2(opposite, value)
}

/// Fold an angle in degrees into `(-180, 180]`.
///
/// Equivalent to stepping by 360 until the value is in range, but done
/// with a single exact remainder so huge inputs stay cheap. Sentinels
/// yield NaN.
pub fn unwind_degrees(angle: Decimal) -> Decimal {
    let (Some(raw), Some(full_turn)) = (angle.to_raw(), DEGREES_FULL_TURN.to_raw()) else {
        tracing::trace!("cannot unwind a non-finite angle");
        return Decimal::NAN;
    };

    // Remainder keeps the dividend's sign: result in (-360, 360).
    let mut folded = Decimal::from_raw(raw % full_turn);
    if folded > DEGREES_HALF_TURN {
        folded -= DEGREES_FULL_TURN;
    }
    if folded <= -DEGREES_HALF_TURN {
        folded += DEGREES_FULL_TURN;
    }
    folded
}

/// `value × (π / 180)`
pub fn degrees_to_radians(value: Decimal) -> Decimal {
    value * (Decimal::PI / DEGREES_HALF_TURN)
}

/// `value × (180 / π)`
pub fn radians_to_degrees(value: Decimal) -> Decimal {
    value * (DEGREES_HALF_TURN / Decimal::PI)
}

// ============================================================================
// Arctangent Series
// ============================================================================

fn atan_raw(x: RawDecimal) -> Option<RawDecimal> {
    if x.is_sign_negative() {
        return atan_raw(-x).map(|angle| -angle);
    }
    // The x³/3 term is below the last digit; the reductions would round x away.
    if (x * x * x).is_zero() {
        return Some(x);
    }
    if x > RawDecimal::ONE {
        let reciprocal = RawDecimal::ONE.checked_div(x)?;
        return atan_raw(reciprocal).map(|angle| RawDecimal::HALF_PI - angle);
    }

    // atan(x) = 2·atan(x / (1 + sqrt(1 + x²))); two rounds leave x <= tan(π/16).
    let mut reduced = x;
    for _ in 0..ATAN_HALVINGS {
        let root = (RawDecimal::ONE + reduced * reduced).sqrt()?;
        reduced /= RawDecimal::ONE + root;
    }

    let squared = reduced * reduced;
    let mut power = reduced;
    let mut sum = reduced;
    for n in 1..ATAN_MAX_TERMS {
        power = -(power * squared);
        let term = power / RawDecimal::from(2 * n + 1);
        if term.is_zero() {
            break;
        }
        sum += term;
    }

    Some(sum * RawDecimal::from(1u32 << ATAN_HALVINGS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::abs;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    fn assert_close(actual: Decimal, expected: &str, digits: usize) {
        assert_eq!(
            actual.to_fixed(digits),
            dec(expected).to_fixed(digits),
            "{:?} vs {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_sin_cos() {
        assert_close(sin(Decimal::ZERO), "0", 16);
        assert_close(cos(Decimal::ZERO), "1", 16);
        assert_close(sin(Decimal::PI / 2), "1", 16);
        assert_close(cos(Decimal::PI), "-1", 16);
        assert_close(sin(dec("0.5")), "0.479425538604203", 15);
        assert!(sin(Decimal::INFINITY).is_nan());
    }

    #[test]
    fn test_sin_cos_writes_both_outputs() {
        let (s, c) = sin_cos(dec("0.5"));
        assert_close(s, "0.479425538604203", 15);
        assert_close(c, "0.877582561890373", 15);

        // Float source: quantized to 0.5 before evaluation.
        let (fs, fc) = sin_cos(0.5f64);
        assert_eq!(fs.to_fixed(20), s.to_fixed(20));
        assert_eq!(fc.to_fixed(20), c.to_fixed(20));
        assert_ne!(fs, fc);
    }

    #[test]
    fn test_atan() {
        assert_eq!(atan(Decimal::ZERO), Decimal::ZERO);
        assert_close(atan(Decimal::ONE), "0.785398163397448309615660845", 20);
        assert_close(atan(dec("-1")), "-0.785398163397448309615660845", 20);
        assert_close(atan(dec("0.5")), "0.463647609000806116214256231", 20);
        assert_close(atan(dec("1000")), "1.569796327128229752564797882", 20);
        assert_close(atan(Decimal::INFINITY), "1.570796326794896619231321692", 20);
        assert!(atan(Decimal::NAN).is_nan());
    }

    #[test]
    fn test_atan_of_tiny_values_is_identity() {
        let tiny = dec("0.0000000000000000000000000001");
        assert_eq!(atan(tiny), tiny);
        assert_eq!(atan(-tiny), -tiny);
        assert_eq!(atan(dec("0.0000000000000003")), dec("0.0000000000000003"));
        assert_eq!(atan(dec("0.0000000001")), dec("0.0000000001"));
        assert_close(atan2(tiny, Decimal::ONE), "0.0000000000000000000000000001", 27);
    }

    #[test]
    fn test_atan2_quadrants() {
        let pi = Decimal::PI;
        assert_close(atan2(Decimal::ONE, Decimal::ONE), "0.785398163397448309615660845", 20);
        assert_close(atan2(Decimal::ONE, dec("-1")), "2.356194490192344928846982537", 20);
        assert_close(atan2(dec("-1"), dec("-1")), "-2.356194490192344928846982537", 20);
        assert_close(atan2(dec("-1"), Decimal::ONE), "-0.785398163397448309615660845", 20);
        assert_close(atan2(Decimal::ONE, Decimal::ZERO), "1.570796326794896619231321692", 20);
        assert_eq!(atan2(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(atan2(Decimal::ZERO, dec("-1")), pi);
        assert!(atan2(Decimal::NAN, Decimal::ONE).is_nan());
    }

    #[test]
    fn test_acos() {
        assert_close(acos(Decimal::ONE), "0", 24);
        assert_close(acos(Decimal::ZERO), "1.570796326794896619231321692", 20);
        assert_close(acos(dec("-1")), "3.141592653589793238462643383", 20);
        assert_close(acos(dec("0.5")), "1.047197551196597746154214461", 20);
        assert!(acos(dec("1.0001")).is_nan());
        assert!(acos(Decimal::NAN).is_nan());
    }

    #[test]
    fn test_unwind_degrees_boundaries() {
        assert_eq!(unwind_degrees(dec("180")), dec("180"));
        assert_eq!(unwind_degrees(dec("181")), dec("-179"));
        assert_eq!(unwind_degrees(dec("-180")), dec("180"));
        assert_eq!(unwind_degrees(dec("-540")), dec("180"));
        assert_eq!(unwind_degrees(dec("540")), dec("180"));
        assert_eq!(unwind_degrees(dec("-179.5")), dec("-179.5"));
        assert_eq!(unwind_degrees(dec("720.25")), dec("0.25"));
        assert_eq!(unwind_degrees(dec("-1000")), dec("80"));
    }

    #[test]
    fn test_unwind_degrees_large_and_sentinel() {
        let huge = dec("1000000000000000000000000.5");
        let folded = unwind_degrees(huge);
        assert!(folded > dec("-180") && folded <= dec("180"));
        assert!(unwind_degrees(Decimal::INFINITY).is_nan());
    }

    #[test]
    fn test_degree_radian_conversion() {
        assert_close(degrees_to_radians(dec("180")), "3.14159265358979323846", 20);
        assert_close(degrees_to_radians(dec("90")), "1.57079632679489661923", 20);
        assert_close(radians_to_degrees(Decimal::PI), "180", 20);
        let round_trip = radians_to_degrees(degrees_to_radians(dec("45")));
        assert!(abs(round_trip - dec("45")) < dec("0.0000000000000000001"));
    }
}
