//! Lead Data

use jiff::Timestamp;
use thiserror::Error;

use crate::domain::leads::token::{DownloadToken, IssuedToken};

/// Raw form fields as submitted by a visitor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub asset_slug: Option<String>,
    pub asset_title: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// A submission whose required fields are present and normalised.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidLeadSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub asset_slug: String,
    pub asset_title: Option<String>,
}

/// New Lead Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub company: String,
    pub asset_slug: String,
    pub asset_title: Option<String>,
    pub token: DownloadToken,
    pub token_expires_at: Timestamp,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, LeadValidationError> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(LeadValidationError::MissingField(field))
}

impl LeadSubmission {
    /// Check required fields, trimming every value and lowercasing the email.
    ///
    /// # Errors
    ///
    /// Returns the first required field that is absent or blank.
    pub fn validate(self) -> Result<ValidLeadSubmission, LeadValidationError> {
        Ok(ValidLeadSubmission {
            name: required(self.name, "name")?,
            email: required(self.email, "email")?.to_lowercase(),
            company: required(self.company, "company")?,
            asset_slug: required(self.asset_slug, "asset_slug")?,
            asset_title: self
                .asset_title
                .map(|title| title.trim().to_string())
                .filter(|title| !title.is_empty()),
        })
    }
}

impl ValidLeadSubmission {
    /// Attach an issued token, producing the row to persist.
    #[must_use]
    pub fn into_new_lead(self, issued: IssuedToken) -> NewLead {
        NewLead {
            name: self.name,
            email: self.email,
            company: self.company,
            asset_slug: self.asset_slug,
            asset_title: self.asset_title,
            token: issued.token,
            token_expires_at: issued.expires_at,
        }
    }
}

/// Raw download form fields: the issued token and the asset being fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DownloadSubmission {
    pub token: Option<String>,
    pub asset_slug: Option<String>,
}

/// A download request with both fields present and trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDownloadSubmission {
    pub token: DownloadToken,
    pub asset_slug: String,
}

impl DownloadSubmission {
    /// Check that the token and asset slug are present.
    ///
    /// # Errors
    ///
    /// Returns the first field that is absent or blank.
    pub fn validate(self) -> Result<ValidDownloadSubmission, LeadValidationError> {
        Ok(ValidDownloadSubmission {
            token: required(self.token, "token")?.into(),
            asset_slug: required(self.asset_slug, "asset_slug")?,
        })
    }
}
