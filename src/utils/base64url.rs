//! Base64URL encoding/decoding per RFC 4648
//!
//! Thin wrapper around the `base64` crate. The unpadded URL-safe engine is
//! the only encoding a compact token ever uses.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::error::{Error, Result};

/// Encode bytes as an unpadded Base64URL string
pub(crate) fn encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode an unpadded Base64URL string to bytes
pub(crate) fn decode(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::InvalidBase64(format!("Base64URL decode failed: {e}")))
}
