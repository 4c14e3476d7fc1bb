//! Newsletter Subscribe Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use leadgate_app::domain::subscribers::{SubscribersServiceError, data::NewSubscriber};

use crate::{extensions::*, newsletter::errors::into_status_error};

const UNSAVED_SUBSCRIBER_WARNING: &str =
    "Newsletter storage is unavailable; the subscription was not saved";

/// Subscribe Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscribeRequest {
    pub email: Option<String>,

    /// Where the form was submitted from; defaults to `website`
    pub source: Option<String>,
}

/// Subscribe Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscribeResponse {
    pub success: bool,

    /// Present when the subscription could not be stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Newsletter Subscribe Handler
///
/// Subscribing an address that is already on the list succeeds.
#[endpoint(
    tags("newsletter"),
    summary = "Subscribe to Newsletter",
    responses(
        (status_code = StatusCode::OK, description = "Subscribed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or invalid email"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SubscribeResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let request = req
        .parse_json::<SubscribeRequest>()
        .await
        .or_500("failed to parse newsletter subscription")?;

    let subscriber =
        NewSubscriber::from_submission(request.email, request.source).or_400("Invalid email")?;

    let warning = match state.app.subscribers.subscribe(subscriber).await {
        Ok(_subscriber) => None,
        Err(SubscribersServiceError::AlreadyExists) => {
            debug!("newsletter email already subscribed");

            None
        }
        Err(SubscribersServiceError::NotConfigured(source)) => {
            warn!("newsletter store unavailable, subscription dropped: {source}");

            Some(UNSAVED_SUBSCRIBER_WARNING.to_string())
        }
        Err(error) => return Err(into_status_error(error)),
    };

    Ok(Json(SubscribeResponse {
        success: true,
        warning,
    }))
}
