// ============================================================================
// Property Tests
// Algebraic and textual invariants of Decimal and DecimalVector
// ============================================================================

use decimal_number::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Canonical numerals with up to 12 integer and 8 fractional digits.
fn numeral() -> impl Strategy<Value = String> {
    "-?[0-9]{1,12}(\\.[0-9]{1,8})?"
}

fn decimal() -> impl Strategy<Value = Decimal> {
    numeral().prop_map(|text| Decimal::from(text.as_str()))
}

/// Small vectors so products stay far from the representable range.
fn vector() -> impl Strategy<Value = DecimalVector> {
    let component = (-100_000i64..100_000, 0u32..4).prop_map(|(mantissa, scale)| {
        Decimal::from(mantissa) / 10i64.pow(scale)
    });
    (component.clone(), component.clone(), component)
        .prop_map(|(x, y, z)| DecimalVector::from_array([x, y, z]))
}

proptest! {
    #[test]
    fn prop_numeral_round_trips_through_to_fixed(text in numeral()) {
        let value: Decimal = text.parse().unwrap();
        let restored: Decimal = value.to_fixed(20).parse().unwrap();
        prop_assert_eq!(restored, value);
    }

    #[test]
    fn prop_canonical_numerals_parse(text in numeral()) {
        prop_assert!(decimal_number::numeric::is_canonical_numeral(&text));
        prop_assert!(text.parse::<Decimal>().is_ok());
    }

    #[test]
    fn prop_floats_printing_alike_are_equal(a in -1.0e9f64..1.0e9, nudge in -1.0e-7f64..1.0e-7) {
        let b = a + nudge;
        if format!("{:.4}", a) == format!("{:.4}", b) {
            prop_assert_eq!(Decimal::from(a), Decimal::from(b));
        }
    }

    #[test]
    fn prop_float_matches_its_rendering(a in -1.0e9f64..1.0e9) {
        let rendered = format!("{:.4}", a);
        prop_assert_eq!(Decimal::from(a), Decimal::from(rendered.as_str()));
    }

    #[test]
    fn prop_arithmetic_identities(x in decimal()) {
        prop_assert_eq!(x + Decimal::ZERO, x);
        prop_assert_eq!(x * Decimal::ONE, x);
        prop_assert_eq!(x - x, Decimal::ZERO);
        prop_assert_eq!(-(-x), x);
    }

    #[test]
    fn prop_scalar_promotion_matches_constructor(x in decimal(), n in -10_000i32..10_000) {
        prop_assert_eq!(x + n, x + Decimal::from(n));
        prop_assert_eq!(x * n, x * Decimal::from(n));
        prop_assert_eq!(n * x, Decimal::from(n) * x);
    }

    #[test]
    fn prop_grid_snap_idempotent(v in decimal(), grid in 1u32..10_000) {
        let grid = Decimal::from(grid) / 100;
        let once = math::grid_snap(v, grid);
        prop_assert_eq!(math::grid_snap(once, grid), once);
        prop_assert_eq!(math::grid_snap(v, Decimal::ZERO), v);
    }

    #[test]
    fn prop_unwind_degrees_in_half_open_range(angle in decimal()) {
        let folded = math::unwind_degrees(angle);
        prop_assert!(folded > Decimal::from(-180));
        prop_assert!(folded <= Decimal::from(180));
    }

    #[test]
    fn prop_safe_normal_has_unit_length(v in vector()) {
        let tolerance = Tolerances::DEFAULT.small_number;
        prop_assume!(v.size_squared() > tolerance);

        let normal = v.get_safe_normal(tolerance, DecimalVector::ZERO);
        let error = math::abs(normal.size() - Decimal::ONE);
        prop_assert!(error < tolerance, "size {:?}", normal.size());
    }

    #[test]
    fn prop_cross_dot_algebra(a in vector(), b in vector(), c in vector()) {
        prop_assert_eq!(a ^ b, -(b ^ a));
        prop_assert_eq!(a | a, a.size_squared());
        prop_assert_eq!(DecimalVector::triple(&a, &b, &c), a | (b ^ c));
    }

    #[test]
    fn prop_vector_text_round_trips(v in vector()) {
        let text = v.to_string_with_precision(4);
        let parsed: DecimalVector = text.parse().unwrap();
        prop_assert_eq!(parsed, v);
    }
}

#[test]
fn test_safe_normal_of_unit_vector_is_identity() {
    let unit = DecimalVector::new("0.36", "0.48", "0.8");
    assert_eq!(unit.size_squared(), Decimal::ONE);
    assert_eq!(unit.get_safe_normal(Tolerances::DEFAULT.small_number, DecimalVector::UP), unit);
}

#[test]
fn test_degenerate_normal_falls_back() {
    let fallback = DecimalVector::new(7, 8, 9);
    assert_eq!(
        DecimalVector::ZERO.get_safe_normal(Tolerances::DEFAULT.small_number, fallback),
        fallback
    );
}
