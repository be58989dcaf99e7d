//! Lenient numeric decoding for hotel backend payloads.
//!
//! The backend serializes some numeric fields as JSON strings, and upstream
//! records occasionally carry values that do not parse at all. Every such
//! field decodes through this module, in one place:
//!
//! - monetary amounts and quantities: number or numeric string -> value,
//!   anything else (malformed, null, missing) -> zero
//! - identifiers: number or numeric string -> value, anything else is a
//!   deserialization error

use rust_decimal::Decimal;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a monetary amount, collapsing anything unparseable to zero.
pub fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value))
}

/// Decode a quantity, collapsing anything unparseable to zero.
pub fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(u32_from_value(&value))
}

/// Decode an optional count such as a guest headcount. Malformed values
/// read as absent rather than zero.
pub fn optional_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null => Ok(None),
        other => Ok(match u32_from_value(other) {
            0 => None,
            n => Some(n),
        }),
    }
}

/// Decode an identifier sent as either a number or a numeric string.
/// Non-numeric identifiers are rejected outright.
pub fn flexible_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom("expected an integer id")),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom("expected an integer id")),
        _ => Err(D::Error::custom("expected an integer id")),
    }
}

pub(crate) fn decimal_from_value(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => n.to_string().parse().unwrap_or(Decimal::ZERO),
        Value::String(s) => s.trim().parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

pub(crate) fn u32_from_value(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()).unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
