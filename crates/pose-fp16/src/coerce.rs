//! Coercion of JSON leaves and landmark components into `f64`.
//!
//! Numbers pass through, strings are parsed after trimming surrounding
//! whitespace (`inf`, `-inf` and `nan` are accepted), booleans map to
//! `1.0` / `0.0`. Everything else is a [`Fp16Error::Coercion`].

use serde_json::Value;

use crate::error::{Fp16Error, Result};

/// Coerce a JSON value to a number.
pub fn coerce_number(value: &Value, location: &str) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Fp16Error::coercion(location, n.to_string())),
        Value::String(s) => parse_component(s, location),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        other => Err(Fp16Error::coercion(location, other.to_string())),
    }
}

/// Parse one textual component such as `"0.25"` or `" 1e-3 "`.
pub fn parse_component(text: &str, location: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| Fp16Error::coercion(location, format!("{text:?}")))
}
