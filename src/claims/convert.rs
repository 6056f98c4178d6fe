//! Record ↔ claims conversion
//!
//! Pass-through adapters for callers who keep their claims in a plain Rust
//! struct: any `Serialize` record whose fields fit the closed claim-value
//! shapes converts into [`Claims`], and back out into any `DeserializeOwned`
//! record. Both directions go through `serde_json::Value`, so a field
//! outside the supported shapes (a nested object, a null, a mixed array)
//! fails with the underlying JSON error.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::claims::Claims;
use crate::error::{Error, Result};

impl Claims {
    /// Build claims from any serializable record
    ///
    /// ```
    /// use serde::Serialize;
    /// use sigtoken::Claims;
    ///
    /// #[derive(Serialize)]
    /// struct Profile {
    ///     first_name: String,
    ///     last_name: String,
    /// }
    ///
    /// let profile = Profile {
    ///     first_name: "Billy".to_string(),
    ///     last_name: "Mister".to_string(),
    /// };
    /// let claims = Claims::from_serialize(&profile).unwrap();
    /// assert!(claims.has("first_name"));
    /// ```
    pub fn from_serialize<T: Serialize>(record: &T) -> Result<Claims> {
        let value = serde_json::to_value(record).map_err(|e| Error::InvalidJson(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| Error::InvalidJson(e.to_string()))
    }

    /// Deserialize the claims into a caller-defined record
    pub fn to_deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let value = serde_json::to_value(self).map_err(|e| Error::InvalidJson(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| Error::InvalidJson(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        first_name: String,
        last_name: String,
    }

    #[test]
    fn record_round_trip() {
        let profile = Profile {
            first_name: "Billy".to_string(),
            last_name: "Mister".to_string(),
        };

        let claims = Claims::from_serialize(&profile).unwrap();
        assert_eq!(claims.get_str("first_name").unwrap(), "Billy");

        let back: Profile = claims.to_deserialize().unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn unsupported_field_shape_is_rejected() {
        #[derive(Serialize)]
        struct Nested {
            inner: Profile,
        }

        let nested = Nested {
            inner: Profile {
                first_name: "Billy".to_string(),
                last_name: "Mister".to_string(),
            },
        };
        assert!(matches!(
            Claims::from_serialize(&nested),
            Err(Error::InvalidJson(_))
        ));
    }
}
