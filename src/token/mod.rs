//! Token codec: generate, parse, verify
//!
//! A token is three unpadded Base64URL segments joined by `.`: the fixed
//! header, the serialized claims payload, and an HMAC-SHA-256 signature over
//! the first two segments exactly as emitted. The codec is stateless; the
//! secret is always an explicit parameter and is never stored.
//!
//! The three operations are deliberately independent:
//!
//! - [`generate`] serializes and signs a claims container,
//! - [`parse`] decodes a token structurally without touching the signature,
//! - [`verify`] checks only the signature and reduces every failure to
//!   `false`.
//!
//! Callers composing "parse then trust" must call [`verify`] themselves;
//! parsed claims are attacker-controlled data until the signature checks
//! out.

mod header;

pub use header::{Header, ALGORITHM, TOKEN_TYPE};

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::utils::base64url;

/// Minimum secret length in bytes, a floor on key entropy
pub const MIN_SECRET_LEN: usize = 32;

const HEADER_SEGMENT: usize = 0;
const PAYLOAD_SEGMENT: usize = 1;
const SIGNATURE_SEGMENT: usize = 2;
const SEGMENT_COUNT: usize = 3;

type HmacSha256 = Hmac<Sha256>;

/// Serialize and sign a claims container into a compact token
///
/// Fails with [`Error::SecretTooShort`] before any other work when the
/// secret is under 32 bytes. A claims value that cannot be serialized (a
/// non-finite float) propagates as a JSON error; no partial token is ever
/// returned.
///
/// ```
/// use sigtoken::Claims;
///
/// let mut claims = Claims::new();
/// claims.set("hello", "world");
/// let token = sigtoken::generate(&claims, b"0123456789abcdef0123456789abcdef").unwrap();
/// assert_eq!(token.split('.').count(), 3);
/// ```
pub fn generate(claims: &Claims, secret: &[u8]) -> Result<String> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(Error::SecretTooShort);
    }

    let header_json =
        serde_json::to_string(&Header::hs256()).map_err(|e| Error::InvalidJson(e.to_string()))?;
    let claims_json =
        serde_json::to_string(claims).map_err(|e| Error::InvalidJson(e.to_string()))?;

    let mut token = format!(
        "{}.{}",
        base64url::encode(header_json.as_bytes()),
        base64url::encode(claims_json.as_bytes())
    );

    let signature = sign(token.as_bytes(), secret);
    token.push('.');
    token.push_str(&base64url::encode(&signature));

    Ok(token)
}

/// Decode a token string into its claims, without verifying the signature
///
/// Purely structural: the segment count and header are checked, the payload
/// is deserialized, and the signature segment is not inspected. No secret is
/// involved. Combine with [`verify`] before trusting the result.
pub fn parse(token: &str) -> Result<Claims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != SEGMENT_COUNT {
        tracing::debug!(
            segments = segments.len(),
            "rejected token with wrong segment count"
        );
        return Err(Error::TokenInvalid);
    }

    let header_bytes =
        base64url::decode(segments[HEADER_SEGMENT]).map_err(|_| Error::TokenHeaderInvalid)?;
    let header: Header =
        serde_json::from_slice(&header_bytes).map_err(|_| Error::TokenHeaderInvalid)?;
    header.check()?;

    let payload = base64url::decode(segments[PAYLOAD_SEGMENT])?;
    let claims: Claims =
        serde_json::from_slice(&payload).map_err(|e| Error::InvalidJson(e.to_string()))?;

    Ok(claims)
}

/// Check a token's signature against a candidate secret
///
/// Returns `true` only for a well-formed token whose signature matches the
/// HMAC-SHA-256 of its first two segments under `secret`. Every failure
/// mode (wrong segment count, short secret, undecodable signature,
/// mismatch) is `false`, so callers cannot branch on why verification
/// failed.
pub fn verify(token: &str, secret: &[u8]) -> bool {
    check_signature(token, secret).is_ok()
}

/// The error-typed core of [`verify`]
///
/// The MAC input is the token's own header and payload segments as found on
/// the wire; re-serializing the claims would break verification whenever
/// the original emitter's byte encoding differs from ours.
fn check_signature(token: &str, secret: &[u8]) -> Result<()> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != SEGMENT_COUNT {
        return Err(Error::TokenInvalid);
    }
    if secret.len() < MIN_SECRET_LEN {
        tracing::debug!("refused to verify with a secret under the minimum length");
        return Err(Error::SecretTooShort);
    }

    let signing_input = format!(
        "{}.{}",
        segments[HEADER_SEGMENT], segments[PAYLOAD_SEGMENT]
    );
    let expected = sign(signing_input.as_bytes(), secret);

    let provided = base64url::decode(segments[SIGNATURE_SEGMENT])
        .map_err(|_| Error::TokenSignatureInvalid)?;

    if provided.len() != expected.len() {
        return Err(Error::TokenSignatureInvalid);
    }
    if !constant_time_eq(&provided, &expected) {
        return Err(Error::TokenSignatureInvalid);
    }

    Ok(())
}

fn sign(input: &[u8], secret: &[u8]) -> Vec<u8> {
    // HMAC accepts keys of any length
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC key of any length");
    mac.update(input);
    mac.finalize().into_bytes().to_vec()
}
