//! Registered claim names and typed accessors
//!
//! The seven registered claims from RFC 7519 Section 4.1 are stored as
//! ordinary entries in the claims mapping; nothing here adds separate
//! storage. Each accessor is a thin wrap over `set`/`get`/`delete` with the
//! fixed name and the expected shape. Temporal setters take a
//! [`SystemTime`] and store integer Unix seconds.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::claims::Claims;
use crate::error::Result;
use crate::id;

/// JWT ID (jti) - unique identifier for this token
pub const TOKEN_ID: &str = "jti";

/// Issuer (iss) - principal that issued the token
pub const ISSUER: &str = "iss";

/// Audience (aud) - recipients the token is intended for
pub const AUDIENCE: &str = "aud";

/// Subject (sub) - principal the token is about
pub const SUBJECT: &str = "sub";

/// Issued At (iat) - Unix seconds at which the token was issued
pub const ISSUED_AT: &str = "iat";

/// Expiration Time (exp) - Unix seconds at which the token expires
pub const EXPIRES_AT: &str = "exp";

/// Not Before (nbf) - Unix seconds before which the token must be rejected
pub const NOT_BEFORE: &str = "nbf";

fn unix_seconds(at: SystemTime) -> i64 {
    at.duration_since(UNIX_EPOCH)
        .expect("time is before Unix epoch")
        .as_secs() as i64
}

impl Claims {
    /// Set a fresh crypto-random token id under `jti`
    pub fn set_token_id(&mut self) {
        self.set(TOKEN_ID, id::generate());
    }

    /// Get the token id
    pub fn token_id(&self) -> Result<String> {
        self.get_str(TOKEN_ID)
    }

    /// Remove the token id
    pub fn delete_token_id(&mut self) {
        self.delete(TOKEN_ID);
    }

    /// Set the issuer
    pub fn set_issuer(&mut self, issuer: impl Into<String>) {
        self.set(ISSUER, issuer.into());
    }

    /// Get the issuer
    pub fn issuer(&self) -> Result<String> {
        self.get_str(ISSUER)
    }

    /// Remove the issuer
    pub fn delete_issuer(&mut self) {
        self.delete(ISSUER);
    }

    /// Set the audience list
    pub fn set_audience(&mut self, audience: Vec<String>) {
        self.set(AUDIENCE, audience);
    }

    /// Get the audience list
    ///
    /// Strict: the stored value must be a string array. A token whose `aud`
    /// is a lone string fails with `ClaimValueInvalid`; audience semantics
    /// require a list.
    pub fn audience(&self) -> Result<Vec<String>> {
        self.get_str_array(AUDIENCE)
    }

    /// Remove the audience
    pub fn delete_audience(&mut self) {
        self.delete(AUDIENCE);
    }

    /// Set the subject
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.set(SUBJECT, subject.into());
    }

    /// Get the subject
    pub fn subject(&self) -> Result<String> {
        self.get_str(SUBJECT)
    }

    /// Remove the subject
    pub fn delete_subject(&mut self) {
        self.delete(SUBJECT);
    }

    /// Set the issued-at time, stored as Unix seconds
    pub fn set_issued_at(&mut self, at: SystemTime) {
        self.set(ISSUED_AT, unix_seconds(at));
    }

    /// Get the issued-at time in Unix seconds
    pub fn issued_at(&self) -> Result<i64> {
        self.get_int(ISSUED_AT)
    }

    /// Remove the issued-at time
    pub fn delete_issued_at(&mut self) {
        self.delete(ISSUED_AT);
    }

    /// Set the expires-at time, stored as Unix seconds
    pub fn set_expires_at(&mut self, at: SystemTime) {
        self.set(EXPIRES_AT, unix_seconds(at));
    }

    /// Get the expires-at time in Unix seconds
    pub fn expires_at(&self) -> Result<i64> {
        self.get_int(EXPIRES_AT)
    }

    /// Remove the expires-at time
    pub fn delete_expires_at(&mut self) {
        self.delete(EXPIRES_AT);
    }

    /// Set the not-before time, stored as Unix seconds
    pub fn set_not_before_at(&mut self, at: SystemTime) {
        self.set(NOT_BEFORE, unix_seconds(at));
    }

    /// Get the not-before time in Unix seconds
    pub fn not_before_at(&self) -> Result<i64> {
        self.get_int(NOT_BEFORE)
    }

    /// Remove the not-before time
    pub fn delete_not_before_at(&mut self) {
        self.delete(NOT_BEFORE);
    }
}
