// ============================================================================
// Serde Support
// Maps Decimal and DecimalVector onto their canonical text forms
// ============================================================================

use crate::numeric::Decimal;
use crate::vector::DecimalVector;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Decimal: exact canonical numeral, or `inf` / `-inf` / `nan`.

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_exact_string())
    }
}

struct DecimalVisitor;

impl Visitor<'_> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a canonical decimal numeral string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        Decimal::parse_exact(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(DecimalVisitor)
    }
}

// DecimalVector: `X=<x> Y=<y> Z=<z>` at full precision.

impl Serialize for DecimalVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_exact_string())
    }
}

struct DecimalVectorVisitor;

impl Visitor<'_> for DecimalVectorVisitor {
    type Value = DecimalVector;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a vector string of the form `X=<n> Y=<n> Z=<n>`")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DecimalVector, E> {
        DecimalVector::parse_exact(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for DecimalVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(DecimalVectorVisitor)
    }
}
