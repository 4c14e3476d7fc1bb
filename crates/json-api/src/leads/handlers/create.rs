//! Create Lead Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use leadgate_app::domain::leads::{
    LeadsServiceError,
    data::LeadSubmission,
    token::issue_token,
};

use crate::{extensions::*, leads::errors::into_status_error, state::State};

const UNSAVED_LEAD_WARNING: &str = "Lead storage is unavailable; the download token was not saved";

/// Create Lead Request
///
/// Fields are optional so that missing values are reported as validation
/// failures rather than body parse errors.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateLeadRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub asset_slug: Option<String>,
    pub asset_title: Option<String>,
}

impl From<CreateLeadRequest> for LeadSubmission {
    fn from(request: CreateLeadRequest) -> Self {
        LeadSubmission {
            name: request.name,
            email: request.email,
            company: request.company,
            asset_slug: request.asset_slug,
            asset_title: request.asset_title,
        }
    }
}

/// Lead Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LeadCreatedResponse {
    pub success: bool,

    /// Single-use token to present when downloading the asset
    pub download_token: String,

    /// Present when the lead could not be stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Create Lead Handler
///
/// Captures a lead for a gated asset and issues its download token.
#[endpoint(
    tags("leads"),
    summary = "Capture Lead",
    responses(
        (status_code = StatusCode::OK, description = "Lead captured"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing required field"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown asset category"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    category: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LeadCreatedResponse>, StatusError> {
    let category = category.into_category()?;
    let state: &Arc<State> = depot.state_or_500()?;

    let submission = req
        .parse_json::<CreateLeadRequest>()
        .await
        .or_500("failed to parse lead submission")?;

    let submission = LeadSubmission::from(submission)
        .validate()
        .or_400("Invalid lead submission")?;

    let issued = issue_token(Timestamp::now());
    let download_token = issued.token.to_string();

    let warning = match state
        .app
        .leads
        .create_lead(category, submission.into_new_lead(issued))
        .await
    {
        Ok(_lead) => None,
        Err(LeadsServiceError::NotConfigured(source)) => {
            warn!(%category, "lead store unavailable, token issued without a lead: {source}");

            Some(UNSAVED_LEAD_WARNING.to_string())
        }
        Err(error) => return Err(into_status_error(error)),
    };

    Ok(Json(LeadCreatedResponse {
        success: true,
        download_token,
        warning,
    }))
}
