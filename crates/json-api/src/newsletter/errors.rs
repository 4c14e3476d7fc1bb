//! Newsletter Errors

use salvo::http::StatusError;
use tracing::{error, info};

use leadgate_app::domain::subscribers::SubscribersServiceError;

/// Map subscription failures the handler does not absorb itself. Duplicate
/// emails are a success and never reach this mapping in practice.
pub(crate) fn into_status_error(error: SubscribersServiceError) -> StatusError {
    match error {
        error @ (SubscribersServiceError::AlreadyExists
        | SubscribersServiceError::MissingRequiredData
        | SubscribersServiceError::InvalidData) => {
            info!("subscriber rejected by store constraints: {error}");

            StatusError::bad_request().brief("Invalid subscription")
        }
        SubscribersServiceError::NotConfigured(source) | SubscribersServiceError::Sql(source) => {
            error!("failed to store subscriber: {source}");

            StatusError::internal_server_error()
        }
    }
}
