// ============================================================================
// Numeric Module
// Deterministic decimal scalar for reproducible spatial math
// ============================================================================
//
// This module provides:
// - Decimal: decimal scalar with infinity/NaN sentinels
// - IntoDecimal: promotion of native numbers and numeral strings
// - NumericError: Error types for the textual contract
//
// Design principles:
// - No binary floating-point in the representation
// - Floats enter through a 4-digit canonical rendering
// - Arithmetic never panics; non-finite results are values
// - One generic operator per operation instead of per-type overloads

mod decimal;
mod errors;
pub(crate) mod numeral;

pub use decimal::{Decimal, IntoDecimal};
pub use errors::{NumericError, NumericResult};
pub use numeral::is_canonical as is_canonical_numeral;
