//! Claims container
//!
//! [`Claims`] is a mapping from claim name to dynamic [`ClaimValue`]. It is
//! the single payload type on both sides of the codec: callers build one up
//! with [`set`](Claims::set) before signing, and [`parse`](crate::parse)
//! materializes one from an incoming token. Registered claims (`iss`, `aud`,
//! `exp`, ...) are ordinary entries in the same mapping with typed accessors
//! layered on top.
//!
//! A `Claims` value is owned plainly: mutation goes through `&mut self`, so
//! the borrow checker enforces the one-writer-at-a-time contract, and shared
//! reads of a built container are safe from any number of threads.

mod convert;
mod registered;
mod validator;
pub mod value;

pub use registered::{AUDIENCE, EXPIRES_AT, ISSUED_AT, ISSUER, NOT_BEFORE, SUBJECT, TOKEN_ID};
pub use value::ClaimValue;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A mapping from claim name to claim value
///
/// Claim names are case-sensitive and unique; setting a name that already
/// exists overwrites the previous value. The backing map is ordered so the
/// serialized payload is deterministic (keys in sorted order).
///
/// # Examples
///
/// ```
/// use sigtoken::Claims;
///
/// let mut claims = Claims::new();
/// claims.set("first_name", "billy");
/// claims.set("age", 27);
///
/// assert!(claims.has("first_name"));
/// assert_eq!(claims.get_str("first_name").unwrap(), "billy");
/// assert_eq!(claims.get_int("age").unwrap(), 27);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims {
    entries: BTreeMap<String, ClaimValue>,
}

impl Claims {
    /// Create an empty claims container
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a claim, overwriting any previous value under the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ClaimValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Whether a claim exists
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove a claim; a no-op when the name is absent
    pub fn delete(&mut self, name: &str) {
        self.entries.remove(name);
    }

    /// Get the raw value of a claim
    pub fn get(&self, name: &str) -> Result<&ClaimValue> {
        self.entries.get(name).ok_or(Error::NotFound)
    }

    /// Get a claim coerced to a string
    pub fn get_str(&self, name: &str) -> Result<String> {
        self.get(name)?.as_str()
    }

    /// Get a claim coerced to a boolean
    pub fn get_bool(&self, name: &str) -> Result<bool> {
        self.get(name)?.as_bool()
    }

    /// Get a claim coerced to an integer
    pub fn get_int(&self, name: &str) -> Result<i64> {
        self.get(name)?.as_int()
    }

    /// Get a claim coerced to a float
    pub fn get_float(&self, name: &str) -> Result<f64> {
        self.get(name)?.as_float()
    }

    /// Get a claim as a string array; strict, no coercion from a scalar
    pub fn get_str_array(&self, name: &str) -> Result<Vec<String>> {
        self.get(name)?.as_str_array()
    }

    /// Number of claims
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the container holds no claims
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over claims in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClaimValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle() {
        let mut claims = Claims::new();
        assert!(claims.is_empty());

        claims.set("temp", "temp val");
        assert!(claims.has("temp"));
        assert_eq!(
            claims.get("temp").unwrap(),
            &ClaimValue::String("temp val".to_string())
        );

        claims.delete("temp");
        assert!(!claims.has("temp"));
        // deleting an absent claim is a no-op
        claims.delete("temp");

        assert_eq!(claims.get("temp"), Err(Error::NotFound));
    }

    #[test]
    fn set_overwrites() {
        let mut claims = Claims::new();
        claims.set("role", "user");
        claims.set("role", "admin");
        assert_eq!(claims.len(), 1);
        assert_eq!(claims.get_str("role").unwrap(), "admin");
    }

    #[test]
    fn typed_getters_report_absence_before_shape() {
        let claims = Claims::new();
        assert_eq!(claims.get_str("missing"), Err(Error::NotFound));
        assert_eq!(claims.get_bool("missing"), Err(Error::NotFound));
        assert_eq!(claims.get_int("missing"), Err(Error::NotFound));
        assert_eq!(claims.get_float("missing"), Err(Error::NotFound));
        assert_eq!(claims.get_str_array("missing"), Err(Error::NotFound));
    }

    #[test]
    fn typed_getters_delegate_to_coercion() {
        let mut claims = Claims::new();
        claims.set("stringint", "8675309");
        claims.set("floatint", 86753.09);
        claims.set("flag", "true");

        assert_eq!(claims.get_int("stringint").unwrap(), 8675309);
        assert_eq!(claims.get_int("floatint").unwrap(), 86753);
        assert!(claims.get_bool("flag").unwrap());
        assert_eq!(claims.get_bool("stringint"), Err(Error::ClaimValueInvalid));
    }

    #[test]
    fn serialized_key_order_is_deterministic() {
        let mut claims = Claims::new();
        claims.set("zeta", 1);
        claims.set("alpha", 2);
        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"alpha":2,"zeta":1}"#);
    }
}
