//! Dynamic claim values and type coercion
//!
//! A claim payload is JSON, so a stored value has no fixed Rust type.
//! [`ClaimValue`] models the payload shapes this library accepts as a closed
//! tagged union, and the `as_*` methods implement the coercion rules for
//! reading a value back as a concrete type. Reads are lenient where a
//! conversion is well defined (numbers and booleans from strings, text from
//! any scalar) and fail with [`Error::ClaimValueInvalid`] everywhere else.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single claim value
///
/// Variant order matters for deserialization: `#[serde(untagged)]` tries
/// variants top to bottom, so integral JSON numbers become `Int` and only
/// non-integral ones become `Float`.
///
/// "Absent" is not a variant; a missing claim surfaces as
/// [`Error::NotFound`] at the container level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    /// JSON boolean
    Bool(bool),
    /// JSON number without a fractional part
    Int(i64),
    /// JSON number with a fractional part
    Float(f64),
    /// JSON string
    String(String),
    /// JSON array of strings (the shape the `aud` claim requires)
    StringArray(Vec<String>),
}

impl ClaimValue {
    /// Coerce to a string
    ///
    /// Strings are returned as-is. Every other variant falls back to a
    /// deterministic text rendering: booleans as `true`/`false`, integers in
    /// decimal, floats in their shortest round-trippable form (no trailing
    /// zeros), and string arrays as their JSON encoding (`["a","b"]`). The
    /// fallback forms are best-effort for display and not a stability
    /// contract.
    pub fn as_str(&self) -> Result<String> {
        match self {
            ClaimValue::String(s) => Ok(s.clone()),
            ClaimValue::Bool(b) => Ok(b.to_string()),
            ClaimValue::Int(i) => Ok(i.to_string()),
            ClaimValue::Float(f) => Ok(f.to_string()),
            ClaimValue::StringArray(a) => {
                serde_json::to_string(a).map_err(|e| Error::InvalidJson(e.to_string()))
            }
        }
    }

    /// Coerce to a boolean
    ///
    /// Accepts a stored boolean, or a string holding one of the classic
    /// boolean tokens: `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
    /// counterparts. Anything else is invalid.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            ClaimValue::Bool(b) => Ok(*b),
            ClaimValue::String(s) => match s.as_str() {
                "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
                "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
                _ => Err(Error::ClaimValueInvalid),
            },
            _ => Err(Error::ClaimValueInvalid),
        }
    }

    /// Coerce to an integer
    ///
    /// Accepts a stored integer, a float (truncated toward zero), or a
    /// string parsed as base-10 signed decimal.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            ClaimValue::Int(i) => Ok(*i),
            ClaimValue::Float(f) => Ok(*f as i64),
            ClaimValue::String(s) => s.parse::<i64>().map_err(|_| Error::ClaimValueInvalid),
            _ => Err(Error::ClaimValueInvalid),
        }
    }

    /// Coerce to a float
    ///
    /// Accepts a stored float or a string parsed as decimal. An integer is
    /// not accepted; a value stored as `Int` stays an integer until the
    /// caller asks for one.
    pub fn as_float(&self) -> Result<f64> {
        match self {
            ClaimValue::Float(f) => Ok(*f),
            ClaimValue::String(s) => s.parse::<f64>().map_err(|_| Error::ClaimValueInvalid),
            _ => Err(Error::ClaimValueInvalid),
        }
    }

    /// Coerce to a string array
    ///
    /// Strict: only a stored string array qualifies. A lone string is
    /// rejected, because the callers of this shape (the `aud` claim) need
    /// list semantics, not a scalar that happens to look like one.
    pub fn as_str_array(&self) -> Result<Vec<String>> {
        match self {
            ClaimValue::StringArray(a) => Ok(a.clone()),
            _ => Err(Error::ClaimValueInvalid),
        }
    }
}

impl From<&str> for ClaimValue {
    fn from(value: &str) -> Self {
        ClaimValue::String(value.to_string())
    }
}

impl From<String> for ClaimValue {
    fn from(value: String) -> Self {
        ClaimValue::String(value)
    }
}

impl From<bool> for ClaimValue {
    fn from(value: bool) -> Self {
        ClaimValue::Bool(value)
    }
}

impl From<i32> for ClaimValue {
    fn from(value: i32) -> Self {
        ClaimValue::Int(value.into())
    }
}

impl From<i64> for ClaimValue {
    fn from(value: i64) -> Self {
        ClaimValue::Int(value)
    }
}

impl From<u32> for ClaimValue {
    fn from(value: u32) -> Self {
        ClaimValue::Int(value.into())
    }
}

impl From<u64> for ClaimValue {
    fn from(value: u64) -> Self {
        ClaimValue::Int(value as i64)
    }
}

impl From<f64> for ClaimValue {
    fn from(value: f64) -> Self {
        ClaimValue::Float(value)
    }
}

impl From<Vec<String>> for ClaimValue {
    fn from(value: Vec<String>) -> Self {
        ClaimValue::StringArray(value)
    }
}

impl From<Vec<&str>> for ClaimValue {
    fn from(value: Vec<&str>) -> Self {
        ClaimValue::StringArray(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ClaimValue {
    fn from(value: &[&str]) -> Self {
        ClaimValue::StringArray(value.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_coercion() {
        assert_eq!(
            ClaimValue::from("hello world").as_str().unwrap(),
            "hello world"
        );
        assert_eq!(ClaimValue::from(8675309i64).as_str().unwrap(), "8675309");
        assert_eq!(ClaimValue::from(86753.09).as_str().unwrap(), "86753.09");
        assert_eq!(ClaimValue::from(true).as_str().unwrap(), "true");
        assert_eq!(
            ClaimValue::from(vec!["a", "b"]).as_str().unwrap(),
            r#"["a","b"]"#
        );
    }

    #[test]
    fn float_to_string_has_no_trailing_zeros() {
        assert_eq!(ClaimValue::from(5.0).as_str().unwrap(), "5");
        assert_eq!(ClaimValue::from(0.5).as_str().unwrap(), "0.5");
    }

    #[test]
    fn bool_coercion() {
        assert!(ClaimValue::from(true).as_bool().unwrap());
        assert!(!ClaimValue::from(false).as_bool().unwrap());
        for token in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(ClaimValue::from(token).as_bool().unwrap(), "{token}");
        }
        for token in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!ClaimValue::from(token).as_bool().unwrap(), "{token}");
        }
        assert_eq!(
            ClaimValue::from("yes").as_bool(),
            Err(Error::ClaimValueInvalid)
        );
        assert_eq!(
            ClaimValue::from(1i64).as_bool(),
            Err(Error::ClaimValueInvalid)
        );
    }

    #[test]
    fn int_coercion() {
        assert_eq!(ClaimValue::from(8675309i64).as_int().unwrap(), 8675309);
        assert_eq!(ClaimValue::from(8675309u64).as_int().unwrap(), 8675309);
        assert_eq!(ClaimValue::from("8675309").as_int().unwrap(), 8675309);
        // floats truncate toward zero
        assert_eq!(ClaimValue::from(86753.09).as_int().unwrap(), 86753);
        assert_eq!(ClaimValue::from(-86753.09).as_int().unwrap(), -86753);
        assert_eq!(
            ClaimValue::from("not a number").as_int(),
            Err(Error::ClaimValueInvalid)
        );
        assert_eq!(
            ClaimValue::from(true).as_int(),
            Err(Error::ClaimValueInvalid)
        );
    }

    #[test]
    fn float_coercion() {
        assert_eq!(ClaimValue::from(8675309.69).as_float().unwrap(), 8675309.69);
        assert_eq!(
            ClaimValue::from("8675309.69").as_float().unwrap(),
            8675309.69
        );
        // an Int stays an integer; it does not widen implicitly
        assert_eq!(
            ClaimValue::from(5i64).as_float(),
            Err(Error::ClaimValueInvalid)
        );
        assert_eq!(
            ClaimValue::from("five").as_float(),
            Err(Error::ClaimValueInvalid)
        );
    }

    #[test]
    fn str_array_is_strict() {
        let aud = ClaimValue::from(vec!["Google", "Facebook"]);
        assert_eq!(aud.as_str_array().unwrap(), vec!["Google", "Facebook"]);
        assert_eq!(
            ClaimValue::from("single-audience").as_str_array(),
            Err(Error::ClaimValueInvalid)
        );
    }

    #[test]
    fn untagged_wire_shapes() {
        let v: ClaimValue = serde_json::from_str("8675309").unwrap();
        assert_eq!(v, ClaimValue::Int(8675309));
        let v: ClaimValue = serde_json::from_str("86753.09").unwrap();
        assert_eq!(v, ClaimValue::Float(86753.09));
        let v: ClaimValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, ClaimValue::Bool(true));
        let v: ClaimValue = serde_json::from_str(r#""hi""#).unwrap();
        assert_eq!(v, ClaimValue::String("hi".to_string()));
        let v: ClaimValue = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(v, ClaimValue::StringArray(vec!["a".into(), "b".into()]));
        // shapes outside the closed variant are rejected
        assert!(serde_json::from_str::<ClaimValue>("null").is_err());
        assert!(serde_json::from_str::<ClaimValue>(r#"{"nested":1}"#).is_err());
        assert!(serde_json::from_str::<ClaimValue>(r#"[1,2]"#).is_err());
    }
}
