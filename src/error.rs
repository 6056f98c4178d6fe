//! Error types for claims access and token processing
//!
//! All fallible operations in this crate return [`Result`] with a single
//! [`Error`] enum. Variants are `Clone + PartialEq` so callers (and tests)
//! can match on exact failure kinds.

use thiserror::Error;

/// Errors that can occur while reading claims or processing tokens
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Claim errors
    /// Claim key not found in claims
    #[error("Claim key not found in claims")]
    NotFound,

    /// Claim is present but cannot be coerced to the requested type
    #[error("Claim value invalid")]
    ClaimValueInvalid,

    // Token errors
    /// Token is not three '.'-separated segments
    #[error("Token is invalid")]
    TokenInvalid,

    /// Header segment is undecodable, not valid JSON, or carries a wrong `typ`
    #[error("Token header is invalid")]
    TokenHeaderInvalid,

    /// Header `alg` is not exactly HS256 (rejects `none` and every other algorithm)
    #[error("Token algorithm mismatch: only HS256 is accepted")]
    TokenAlgorithmMismatch,

    /// Signature segment is undecodable or does not match the recomputed MAC
    #[error("Token signature is invalid")]
    TokenSignatureInvalid,

    /// Secret is below the 32-byte minimum
    #[error("Secret must be at least 32 bytes")]
    SecretTooShort,

    // Validation errors
    /// Current time is at or past the `exp` claim
    #[error("Token has expired")]
    TokenHasExpired,

    /// Current time is before the `nbf` claim
    #[error("Token is not yet valid")]
    TokenNotYetValid,

    // Encoding errors
    /// Base64URL decoding failed
    #[error("Base64URL decoding failed: {0}")]
    InvalidBase64(String),

    /// JSON serialization or parsing failed
    #[error("JSON parsing failed: {0}")]
    InvalidJson(String),
}

/// Result type alias for sigtoken operations
pub type Result<T> = std::result::Result<T, Error>;
