// ============================================================================
// Decimal Number Library
// Deterministic decimal scalar and 3D vector math
// ============================================================================

//! # Decimal Number
//!
//! A fixed-precision decimal scalar and a 3D vector built on it, for spatial
//! math that must give bit-identical results on every platform.
//!
//! ## Features
//!
//! - **Decimal scalar** backed by a base-10 mantissa, never a binary float
//! - **Canonical float quantization**: floats enter through a 4-digit rendering
//! - **Non-trapping arithmetic** with infinity and NaN sentinels
//! - **Math library**: rounding, roots, powers, trigonometry, angle unwinding
//! - **Vector algebra**: products, normalization, clamping, projection, bases
//! - **Batch algorithms**: Bezier forward differencing and k-means clustering
//! - **Text round-tripping** for scalars and vectors (optional serde mapping)
//!
//! ## Example
//!
//! ```rust
//! use decimal_number::prelude::*;
//!
//! let price = Decimal::from("19.99");
//! let total = price * 3;
//! assert_eq!(total.to_fixed(2), "59.97");
//!
//! let mut v = DecimalVector::new(3, 4, 0);
//! assert!(v.normalize(Tolerances::DEFAULT.small_number));
//! assert_eq!(v.to_string(), "X=0.600 Y=0.800 Z=0.000");
//!
//! let parsed: DecimalVector = "X=1 Y=2 Z=3".parse().unwrap();
//! assert_eq!(parsed | DecimalVector::ONE, Decimal::from(6));
//! ```

pub mod config;
pub mod math;
pub mod numeric;
pub mod vector;

#[cfg(feature = "serde")]
mod serde_support;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::Tolerances;
    pub use crate::math;
    pub use crate::numeric::{Decimal, IntoDecimal, NumericError, NumericResult};
    pub use crate::vector::{Axis, DecimalVector};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_round_trip() {
        // Mixed sources collapse to the same canonical values.
        let a = Decimal::from(11111.11f64);
        let b = Decimal::from("11111.11");
        assert_eq!(a, b);

        let text = (a * 2 / 3).to_fixed(20);
        let (restored, ok) = match text.parse::<Decimal>() {
            Ok(value) => (value, true),
            Err(_) => (Decimal::ZERO, false),
        };
        assert!(ok);
        assert_eq!(restored.to_fixed(20), text);
    }

    #[test]
    fn test_end_to_end_vector_pipeline() {
        let mut v = DecimalVector::ZERO;
        assert!(v.init_from_string("X=1231515615.32131 Y=98486484.8916451 Z=454135451684.46415416"));

        let direction = v.get_safe_normal(Tolerances::DEFAULT.small_number, DecimalVector::ZERO);
        assert!(direction.is_normalized());
        assert!(!direction.contains_nan());

        let compact = DecimalVector::new(2, 0, "-3.5").to_compact_string();
        let mut restored = DecimalVector::ONE;
        assert!(restored.init_from_compact_string(&compact));
        assert_eq!(restored, DecimalVector::new(2, 0, "-3.5"));
    }

    #[test]
    fn test_end_to_end_custom_tolerances() {
        let coarse = Tolerances::DEFAULT
            .with_small_number(Decimal::from("0.01"))
            .with_kinda_small_number(Decimal::from("0.5"))
            .with_delta(Decimal::from("0.5"));
        assert!(coarse.validate().is_ok());
        assert!(Tolerances::DEFAULT.with_delta(Decimal::NAN).validate().is_err());

        // A jittery sample near the origin reads as zero under the coarse set only.
        let jitter: DecimalVector = "X=0.003 Y=0.004 Z=0.2".parse().unwrap();
        assert_eq!(jitter.to_compact_string(), "V(X=0.00, Y=0.00, Z=0.20)");
        assert_eq!(jitter.to_compact_string_with(&coarse), "V(0)");

        let flat = DecimalVector::new("0.003", "0.004", 0);
        let (direction, _) = flat.to_direction_and_length_with(&coarse);
        assert_eq!(direction, DecimalVector::ZERO);
        assert!(flat.to_direction_and_length().0.is_normalized());

        let mut x = DecimalVector::new("-0.3", 0, 1);
        let mut y = DecimalVector::Y_AXIS;
        let mut z = DecimalVector::Z_AXIS;
        DecimalVector::create_orthonormal_basis_with(&mut x, &mut y, &mut z, &coarse);
        assert_eq!(x, DecimalVector::X_AXIS);
        assert_eq!(
            flat.get_clamped_to_size_with(Decimal::ONE, Decimal::TWO, &coarse),
            DecimalVector::ZERO
        );
    }

    #[test]
    fn test_sentinels_survive_vector_math() {
        let v = DecimalVector::new(1, 2, 3) / 0;
        let w = v + DecimalVector::ONE;
        assert!(w.contains_nan());
        assert!(!math::is_finite(w.size()));
    }
}
