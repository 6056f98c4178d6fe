//! Fixed token header
//!
//! Every token this library emits carries the same two-field header:
//! `{"typ":"JWT","alg":"HS256"}`. On the decode side both fields are
//! optional in shape but checked strictly: a wrong `typ` is a header error,
//! and any `alg` other than HS256 (including `"none"`) is an algorithm
//! mismatch. There is no algorithm negotiation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Token type constant, the header `typ` field
pub const TOKEN_TYPE: &str = "JWT";

/// Signing algorithm constant, the header `alg` field
pub const ALGORITHM: &str = "HS256";

/// The token header record
///
/// Field order here is emission order on the wire: `typ` then `alg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Token type, "JWT" on every token this library emits
    #[serde(rename = "typ", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// Signing algorithm, always "HS256"
    #[serde(rename = "alg", skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
}

impl Header {
    /// The canonical header for generated tokens
    pub fn hs256() -> Self {
        Self {
            token_type: Some(TOKEN_TYPE.to_string()),
            algorithm: Some(ALGORITHM.to_string()),
        }
    }

    /// Check a decoded header
    ///
    /// `typ` may be absent, but when present it must be "JWT". `alg` must be
    /// exactly "HS256"; rejecting everything else closes the classic JWT
    /// algorithm-confusion hole.
    pub fn check(&self) -> Result<()> {
        if let Some(token_type) = self.token_type.as_deref() {
            if token_type != TOKEN_TYPE {
                return Err(Error::TokenHeaderInvalid);
            }
        }

        if self.algorithm.as_deref() != Some(ALGORITHM) {
            tracing::debug!(
                algorithm = self.algorithm.as_deref().unwrap_or("<missing>"),
                "rejected token with non-HS256 algorithm"
            );
            return Err(Error::TokenAlgorithmMismatch);
        }

        Ok(())
    }
}
