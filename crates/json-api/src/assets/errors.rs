//! Asset Errors

use salvo::http::StatusError;
use tracing::error;

use leadgate_app::domain::assets::AssetsServiceError;

pub(crate) fn into_status_error(error: AssetsServiceError) -> StatusError {
    match error {
        AssetsServiceError::NotFound => StatusError::not_found().brief("Asset not found"),
        error @ (AssetsServiceError::MissingRequiredData | AssetsServiceError::InvalidData) => {
            error!("asset row violates store constraints: {error}");

            StatusError::internal_server_error()
        }
        AssetsServiceError::NotConfigured(source) | AssetsServiceError::Sql(source) => {
            error!("asset store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
