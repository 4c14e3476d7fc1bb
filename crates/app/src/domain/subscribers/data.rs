//! Subscriber Data

use thiserror::Error;

/// Source tag used when the form does not name one.
pub const DEFAULT_SUBSCRIBER_SOURCE: &str = "website";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubscriptionValidationError {
    #[error("email is required")]
    MissingEmail,

    #[error("email is not a valid address")]
    InvalidEmail,
}

/// New Subscriber Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubscriber {
    pub email: String,
    pub source: String,
}

impl NewSubscriber {
    /// Normalise a newsletter form submission.
    ///
    /// The email is trimmed and lowercased and must contain an `@`.
    ///
    /// # Errors
    ///
    /// Returns an error when the email is absent, blank or lacks an `@`.
    pub fn from_submission(
        email: Option<String>,
        source: Option<String>,
    ) -> Result<Self, SubscriptionValidationError> {
        let email = email
            .map(|email| email.trim().to_lowercase())
            .filter(|email| !email.is_empty())
            .ok_or(SubscriptionValidationError::MissingEmail)?;

        if !email.contains('@') {
            return Err(SubscriptionValidationError::InvalidEmail);
        }

        let source = source
            .map(|source| source.trim().to_string())
            .filter(|source| !source.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBSCRIBER_SOURCE.to_string());

        Ok(Self { email, source })
    }
}
