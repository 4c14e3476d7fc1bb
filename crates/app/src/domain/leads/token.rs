//! Download token issuance.
//!
//! A token is the only credential needed to redeem a lead's download, so it is
//! drawn from a random v4 UUID (122 random bits) and rendered in canonical
//! hyphenated form. Collisions are not retried; the unique index on the token
//! column rejects one should it ever happen.

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

/// How long an issued token stays redeemable.
pub const TOKEN_TTL: SignedDuration = SignedDuration::from_hours(24);

/// Opaque single-use download credential.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DownloadToken(String);

impl DownloadToken {
    /// Draw a fresh random token.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for DownloadToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DownloadToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for DownloadToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// A freshly generated token together with its absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: DownloadToken,
    pub expires_at: Timestamp,
}

/// Issue a token that expires [`TOKEN_TTL`] after `now`.
#[must_use]
pub fn issue_token(now: Timestamp) -> IssuedToken {
    IssuedToken {
        token: DownloadToken::generate(),
        expires_at: now + TOKEN_TTL,
    }
}
