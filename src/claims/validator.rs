//! Time-based validation of registered temporal claims
//!
//! Validation runs on an already-materialized [`Claims`] container; it is
//! independent of signature verification and of parsing. The checks are
//! ordered: not-before first, then expiry, and only the first violation is
//! reported.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::claims::{Claims, EXPIRES_AT, NOT_BEFORE};
use crate::error::{Error, Result};

impl Claims {
    /// Validate temporal claims against the system clock
    ///
    /// Fails with [`Error::TokenNotYetValid`] when `nbf` is in the future,
    /// otherwise with [`Error::TokenHasExpired`] when the current time is at
    /// or past `exp`. A token expires exactly at `exp`, not a second after.
    /// Absent claims are simply not checked.
    pub fn validate(&self) -> Result<()> {
        self.validate_at(current_timestamp())
    }

    /// Validate temporal claims against an explicit time, in Unix seconds
    ///
    /// A temporal claim that is present but not integer-shaped is skipped
    /// here; shape errors surface through the typed getters instead.
    pub fn validate_at(&self, now: i64) -> Result<()> {
        if let Ok(nbf) = self.get_int(NOT_BEFORE) {
            if now < nbf {
                return Err(Error::TokenNotYetValid);
            }
        }

        if let Ok(exp) = self.get_int(EXPIRES_AT) {
            if now >= exp {
                return Err(Error::TokenHasExpired);
            }
        }

        Ok(())
    }
}

/// Current Unix timestamp
fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time is before Unix epoch")
        .as_secs() as i64
}
