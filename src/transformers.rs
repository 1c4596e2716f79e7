//! Value transformers applied to columns on the write (`to`) and read (`from`)
//! paths.
//!
//! Every transformer only acts on the value kinds it knows about and passes
//! everything else through untouched.

use std::fmt::Debug;

use crate::error::{Result, TransformError};
use crate::value::Value;

/// A pair of pure conversions between an application value and its stored
/// representation.
pub trait ValueTransformer: Send + Sync + Debug {
    /// Write path: application value to stored value.
    fn to(&self, value: Value) -> Result<Value>;

    /// Read path: stored value to application value.
    fn from(&self, value: Value) -> Result<Value>;
}

/// Stores numeric identifiers as decimal strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdStringifier;

impl ValueTransformer for IdStringifier {
    fn to(&self, value: Value) -> Result<Value> {
        Ok(match value {
            Value::Integer(n) => Value::Text(n.to_string()),
            // Non-finite reals have no decimal form.
            Value::Real(n) if n.is_finite() => Value::Text(n.to_string()),
            other => other,
        })
    }

    fn from(&self, value: Value) -> Result<Value> {
        match value {
            Value::Text(text) => parse_number(&text),
            other => Ok(other),
        }
    }
}

const I64_MIN: f64 = i64::MIN as f64;
const I64_MAX_EXCLUSIVE: f64 = 9_223_372_036_854_775_808.0;

/// Accepts decimal notation only; integral values collapse to `Integer`.
fn parse_number(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Value::Integer(0));
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(Value::Integer(n));
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 && n >= I64_MIN && n < I64_MAX_EXCLUSIVE => {
            Ok(Value::Integer(n as i64))
        }
        Ok(n) if n.is_finite() => Ok(Value::Real(n)),
        _ => Err(TransformError::InvalidId {
            value: text.to_string(),
        }),
    }
}

/// Lowercases text on write. Reads are returned as stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCaser;

impl ValueTransformer for LowerCaser {
    fn to(&self, value: Value) -> Result<Value> {
        Ok(match value {
            Value::Text(text) => Value::Text(text.to_lowercase()),
            other => other,
        })
    }

    fn from(&self, value: Value) -> Result<Value> {
        Ok(value)
    }
}

/// Unmarshals JSON text into a structured value on read.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectRetriever;

impl ValueTransformer for ObjectRetriever {
    fn to(&self, value: Value) -> Result<Value> {
        Ok(value)
    }

    fn from(&self, value: Value) -> Result<Value> {
        decode_json_text(value)
    }
}

/// Parses `Text` as JSON, leaving every other kind of value untouched.
pub(crate) fn decode_json_text(value: Value) -> Result<Value> {
    match value {
        Value::Text(text) => {
            let json: serde_json::Value = serde_json::from_str(&text)?;
            Ok(Value::Json(json))
        }
        other => Ok(other),
    }
}
