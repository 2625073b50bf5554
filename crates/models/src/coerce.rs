//! Lenient numeric decoding for client payloads.
//!
//! Clients send `COMMISSION` and `COMPANY_ID` either as JSON numbers or as
//! numeric strings; both are accepted.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)).ok()
}

/// Interpret a JSON value as a `Decimal`, parsing its textual form so no
/// binary float rounding creeps in.
pub fn decimal_from_value(v: &Value) -> Option<Decimal> {
    match v {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// Loose truthiness: `null`, `false`, `0` and `""` are falsy, everything else is truthy.
/// A numeric string such as `"0"` is a non-empty string and therefore truthy.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Interpret a JSON value as an `i32`; fractional numbers are rejected.
pub fn integer_from_value(v: &Value) -> Option<i32> {
    match v {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).ok(),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
                .map(|f| f as i32),
        },
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

pub fn decimal_lenient<'de, D>(d: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    decimal_from_value(&v).ok_or_else(|| de::Error::custom("expected a number or numeric string"))
}

pub fn i32_lenient<'de, D>(d: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    integer_from_value(&v).ok_or_else(|| de::Error::custom("expected an integer or integer string"))
}
