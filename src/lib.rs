//! # sigtoken - Compact Signed Tokens
//!
//! > Build named claims, sign them into an HS256 JWT, parse and verify.
//!
//! **sigtoken** is a small signed-token library with a deliberately narrow
//! surface: one algorithm (HMAC-SHA-256), one wire format (three unpadded
//! Base64URL segments joined by `.`), and a dynamic claims container that
//! reads values back as whatever concrete type the caller asks for. Tokens
//! are signed, not encrypted; the payload is readable by anyone who holds
//! the token.
//!
//! ## Quick Start
//!
//! ```
//! use sigtoken::Claims;
//!
//! let secret = b"an-example-secret-of-32-bytes-ok";
//!
//! // Build and sign
//! let mut claims = Claims::new();
//! claims.set("first_name", "billy");
//! claims.set_expires_at(std::time::SystemTime::now() + std::time::Duration::from_secs(3600));
//! let token = sigtoken::generate(&claims, secret).unwrap();
//!
//! // Receive: verify, then parse, then validate
//! assert!(sigtoken::verify(&token, secret));
//! let claims = sigtoken::parse(&token).unwrap();
//! claims.validate().unwrap();
//! assert_eq!(claims.get_str("first_name").unwrap(), "billy");
//! ```
//!
//! ## Processing Flow
//!
//! The receive-side steps are independent operations, composed by the
//! caller:
//!
//! ```text
//! token string
//!     │ verify(token, secret)     -- signature only, bool
//!     │ parse(token)              -- structure only, no secret
//!     ▼
//! Claims
//!     │ .validate()               -- temporal claims (nbf, exp)
//!     ▼
//! typed getters (get_str, get_int, issuer(), audience(), ...)
//! ```
//!
//! [`parse`] never checks the signature, so its output is untrusted input
//! until [`verify`] has returned `true` for the same token string.
//!
//! ## Claims
//!
//! A [`Claims`] container maps case-sensitive names to dynamic values
//! (string, boolean, integer, float, or string array). Typed getters
//! coerce across those shapes where the conversion is well defined; the
//! registered claims of RFC 7519 (`jti`, `iss`, `aud`, `sub`, `iat`, `exp`,
//! `nbf`) get dedicated accessors over the same storage.
//!
//! ## Security
//!
//! - Only HS256 is ever accepted. A header declaring any other algorithm,
//!   including `"none"`, is rejected at parse time and fails verification,
//!   so the classic algorithm-confusion attacks do not apply.
//! - Secrets under 32 bytes are refused when signing and fail closed when
//!   verifying.
//! - Signature comparison is constant-time.
//! - [`verify`] reduces every failure mode to `false`, so callers cannot
//!   leak why a token was rejected.

pub mod claims;
pub mod error;
pub mod id;
pub mod token;

mod utils;

pub use claims::{ClaimValue, Claims};
pub use claims::{AUDIENCE, EXPIRES_AT, ISSUED_AT, ISSUER, NOT_BEFORE, SUBJECT, TOKEN_ID};
pub use error::{Error, Result};
pub use token::{generate, parse, verify, Header, ALGORITHM, MIN_SECRET_LEN, TOKEN_TYPE};
