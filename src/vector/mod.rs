// ============================================================================
// Vector Module
// 3D vector algebra over Decimal components
// ============================================================================
//
// This module provides:
// - DecimalVector: value type with component-wise and scalar operators
// - Axis: named component selector
// - Geometry: normalization, clamping, projection, plane and basis helpers
// - Text: `X=.. Y=.. Z=..` and compact `V(..)` forms
// - Batch: cubic Bezier sampling and k-means cluster centers
//
// Operations without a tolerance argument read `Tolerances::DEFAULT`; their
// `_with` forms take a `&Tolerances` instead.

mod batch;
mod decimal_vector;
mod geometry;
mod text;

pub use decimal_vector::{Axis, DecimalVector};
