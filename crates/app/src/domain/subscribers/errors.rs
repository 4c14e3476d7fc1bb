//! Subscribers service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::database::is_unconfigured;

#[derive(Debug, Error)]
pub enum SubscribersServiceError {
    #[error("subscriber store is not configured")]
    NotConfigured(#[source] Error),

    #[error("subscriber already exists")]
    AlreadyExists,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for SubscribersServiceError {
    fn from(error: Error) -> Self {
        if is_unconfigured(&error) {
            return Self::NotConfigured(error);
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
