//! Lead Errors

use salvo::http::StatusError;
use tracing::error;

use leadgate_app::domain::leads::LeadsServiceError;

pub(crate) fn into_status_error(error: LeadsServiceError) -> StatusError {
    match error {
        LeadsServiceError::NotFound => StatusError::not_found().brief("Lead not found"),
        LeadsServiceError::AlreadyExists => {
            error!("download token collided with an existing lead");

            StatusError::internal_server_error()
        }
        error @ (LeadsServiceError::InvalidReference
        | LeadsServiceError::MissingRequiredData
        | LeadsServiceError::InvalidData) => {
            error!("lead rejected by store constraints: {error}");

            StatusError::internal_server_error()
        }
        LeadsServiceError::NotConfigured(source) | LeadsServiceError::Sql(source) => {
            error!("lead store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
