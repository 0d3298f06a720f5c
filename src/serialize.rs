// src/serialize.rs

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::decimal::BigDecimal;
use crate::integer::BigInt;

// Both numeric types serialize as their canonical decimal strings, which
// round-trip exactly (including the decimal's exponent).

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal integer string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<BigInt, E> {
                BigInt::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(BigIntVisitor)
    }
}

impl Serialize for BigDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_scientific_string())
    }
}

impl<'de> Deserialize<'de> for BigDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BigDecimalVisitor;

        impl<'de> Visitor<'de> for BigDecimalVisitor {
            type Value = BigDecimal;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal number string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<BigDecimal, E> {
                BigDecimal::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(BigDecimalVisitor)
    }
}
