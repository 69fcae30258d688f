// ============================================================================
// Tolerance Configuration
// Named thresholds used by default-tolerance vector and scalar operations
// ============================================================================

use crate::numeric::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The threshold set used wherever an operation does not take an explicit
/// tolerance.
///
/// [`Tolerances::DEFAULT`] backs the plain vector operations. Custom sets are
/// built with the `with_*` methods, checked with [`Tolerances::validate`] and
/// passed to the `_with` forms such as
/// [`DecimalVector::to_compact_string_with`](crate::vector::DecimalVector::to_compact_string_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerances {
    /// Squared-length floor for normalization; also the scalar near-zero default (1e-8)
    pub small_number: Decimal,

    /// Coarser near-zero threshold for component checks and compact text (1e-4)
    pub kinda_small_number: Decimal,

    /// Length below which a basis axis is treated as degenerate (1e-5)
    pub delta: Decimal,

    /// Allowed deviation of squared length from one for `is_normalized` (0.01)
    pub thresh_vector_normalized: Decimal,

    /// Per-component distance under which two points are the same (0.00002)
    pub thresh_points_are_same: Decimal,

    /// Distance under which a point lies on a plane (0.10)
    pub thresh_point_on_plane: Decimal,

    /// Cosine above which two normals are parallel (0.999845, about 1 degree)
    pub thresh_normals_are_parallel: Decimal,

    /// Cosine below which two normals are orthogonal (0.017455, about 89 degrees)
    pub thresh_normals_are_orthogonal: Decimal,
}

impl Tolerances {
    /// Default thresholds.
    pub const DEFAULT: Self = Self {
        small_number: Decimal::from_scaled(1, 8),
        kinda_small_number: Decimal::from_scaled(1, 4),
        delta: Decimal::from_scaled(1, 5),
        thresh_vector_normalized: Decimal::from_scaled(1, 2),
        thresh_points_are_same: Decimal::from_scaled(2, 5),
        thresh_point_on_plane: Decimal::from_scaled(10, 2),
        thresh_normals_are_parallel: Decimal::from_scaled(999_845, 6),
        thresh_normals_are_orthogonal: Decimal::from_scaled(17_455, 6),
    };

    /// Builder method: Set the normalization floor
    pub fn with_small_number(mut self, value: Decimal) -> Self {
        self.small_number = value;
        self
    }

    /// Builder method: Set the coarse near-zero threshold
    pub fn with_kinda_small_number(mut self, value: Decimal) -> Self {
        self.kinda_small_number = value;
        self
    }

    /// Builder method: Set the degenerate-axis length
    pub fn with_delta(mut self, value: Decimal) -> Self {
        self.delta = value;
        self
    }

    /// Builder method: Set the parallel/orthogonal cosine thresholds
    pub fn with_normal_thresholds(mut self, parallel: Decimal, orthogonal: Decimal) -> Self {
        self.thresh_normals_are_parallel = parallel;
        self.thresh_normals_are_orthogonal = orthogonal;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("small_number", self.small_number),
            ("kinda_small_number", self.kinda_small_number),
            ("delta", self.delta),
            ("thresh_vector_normalized", self.thresh_vector_normalized),
            ("thresh_points_are_same", self.thresh_points_are_same),
            ("thresh_point_on_plane", self.thresh_point_on_plane),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= Decimal::ZERO {
                return Err(format!("{} must be a positive finite value", name));
            }
        }

        // Cosine thresholds
        for (name, value) in [
            ("thresh_normals_are_parallel", self.thresh_normals_are_parallel),
            ("thresh_normals_are_orthogonal", self.thresh_normals_are_orthogonal),
        ] {
            if !value.is_finite() || value < Decimal::ZERO || value > Decimal::ONE {
                return Err(format!("{} must be between 0 and 1", name));
            }
        }
        if self.thresh_normals_are_orthogonal >= self.thresh_normals_are_parallel {
            return Err("Orthogonal threshold must be below the parallel threshold".to_string());
        }

        Ok(())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let tolerances = Tolerances::default();
        assert_eq!(tolerances.small_number.to_fixed(8), "0.00000001");
        assert_eq!(tolerances.kinda_small_number.to_fixed(4), "0.0001");
        assert_eq!(tolerances.delta.to_fixed(5), "0.00001");
        assert_eq!(tolerances.thresh_point_on_plane.to_fixed(2), "0.10");
        assert_eq!(tolerances.thresh_normals_are_parallel.to_fixed(6), "0.999845");
        assert!(tolerances.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let tolerances = Tolerances::DEFAULT
            .with_small_number(Decimal::from_scaled(1, 6))
            .with_delta(Decimal::from_scaled(1, 3));

        assert_eq!(tolerances.small_number, Decimal::from("0.000001"));
        assert_eq!(tolerances.delta, Decimal::from("0.001"));
        assert!(tolerances.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let tolerances = Tolerances::DEFAULT.with_small_number(Decimal::ZERO);
        assert!(tolerances.validate().is_err());

        let tolerances = Tolerances::DEFAULT.with_kinda_small_number(Decimal::NAN);
        assert!(tolerances.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_cosines() {
        let tolerances = Tolerances::DEFAULT.with_normal_thresholds(Decimal::TWO, Decimal::ZERO);
        assert!(tolerances.validate().is_err());

        let tolerances = Tolerances::DEFAULT
            .with_normal_thresholds(Decimal::from("0.5"), Decimal::from("0.6"));
        assert!(tolerances.validate().is_err());
    }
}
