//! Lead Records

use jiff::Timestamp;
use uuid::Uuid;

use crate::domain::leads::token::DownloadToken;

/// Identifier of a captured lead, unique within its category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadUuid(Uuid);

impl LeadUuid {
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<LeadUuid> for Uuid {
    fn from(lead: LeadUuid) -> Self {
        lead.0
    }
}

/// Triage status written on newly captured leads.
pub const NEW_LEAD_STATUS: &str = "new";

/// Lead Record
#[derive(Debug, Clone, PartialEq)]
pub struct LeadRecord {
    pub uuid: LeadUuid,
    pub name: String,
    pub email: String,
    pub company: String,
    pub asset_slug: String,
    pub asset_title: Option<String>,
    pub token: DownloadToken,
    pub token_expires_at: Timestamp,
    pub token_used: bool,
    pub downloaded_at: Option<Timestamp>,
    pub source: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// Whether a token may still be redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValidity {
    Valid,
    AlreadyUsed,
    Expired,
    NotFound,
}

impl TokenValidity {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Machine-readable reason reported to clients for an unusable token.
    #[must_use]
    pub const fn reason(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::AlreadyUsed => Some("already_used"),
            Self::Expired => Some("expired"),
            Self::NotFound => Some("not_found"),
        }
    }
}

impl LeadRecord {
    /// Classify this lead's token at `now`. A used token reports as used even
    /// once it has also expired.
    #[must_use]
    pub fn token_validity(&self, now: Timestamp) -> TokenValidity {
        if self.token_used {
            TokenValidity::AlreadyUsed
        } else if self.token_expires_at <= now {
            TokenValidity::Expired
        } else {
            TokenValidity::Valid
        }
    }
}

/// Result of presenting a token for redemption.
#[derive(Debug, Clone, PartialEq)]
pub enum Redemption {
    /// The conditional update matched and the token is now consumed.
    Redeemed(LeadRecord),

    /// The conditional update matched no row; carries why.
    Rejected(TokenValidity),
}

impl Redemption {
    #[must_use]
    pub const fn token_used(&self) -> bool {
        matches!(self, Self::Redeemed(_))
    }

    #[must_use]
    pub const fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Redeemed(_) => None,
            Self::Rejected(validity) => validity.reason(),
        }
    }
}
