//! Download Asset Handler

use jiff::Timestamp;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use leadgate_app::domain::{
    assets::{AssetsServiceError, records::AssetRecord},
    leads::{
        data::{DownloadSubmission, ValidDownloadSubmission},
        records::Redemption,
    },
};

use crate::extensions::*;

/// Download Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct DownloadRequest {
    pub token: Option<String>,
    pub asset_slug: Option<String>,
}

impl From<DownloadRequest> for DownloadSubmission {
    fn from(request: DownloadRequest) -> Self {
        DownloadSubmission {
            token: request.token,
            asset_slug: request.asset_slug,
        }
    }
}

/// Download Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DownloadResponse {
    pub success: bool,
    pub download_url: String,
    pub title: String,

    /// Whether this request consumed the token
    pub token_used: bool,

    /// Why the token was not consumed: `already_used`, `expired` or `not_found`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Download Asset Handler
///
/// Redeems a download token and resolves where the asset can be fetched.
/// The download location is returned even when the token was not consumed.
#[endpoint(
    tags("leads"),
    summary = "Redeem Download Token",
    responses(
        (status_code = StatusCode::OK, description = "Download resolved"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing token or asset slug"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown asset category"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    category: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<DownloadResponse>, StatusError> {
    let category = category.into_category()?;
    let state = depot.state_or_500()?;

    let request = req
        .parse_json::<DownloadRequest>()
        .await
        .or_500("failed to parse download request")?;

    let ValidDownloadSubmission {
        token,
        asset_slug: slug,
    } = DownloadSubmission::from(request)
        .validate()
        .or_400("Invalid download request")?;

    let redemption = match state
        .app
        .leads
        .redeem_token(category, token, Timestamp::now())
        .await
    {
        Ok(redemption) => Some(redemption),
        Err(redeem_error) => {
            error!(%category, %slug, "failed to redeem download token: {redeem_error}");

            None
        }
    };

    if let Some(reason) = redemption.as_ref().and_then(Redemption::reason) {
        info!(%category, %slug, reason, "serving download for an unredeemed token");
    }

    let asset = match state.app.assets.get_asset(category, slug.clone()).await {
        Ok(asset) => Some(asset),
        Err(AssetsServiceError::NotFound) => None,
        Err(lookup_error) => {
            warn!(%category, %slug, "asset lookup failed, using fallback path: {lookup_error}");

            None
        }
    };

    let download_url = asset.as_ref().map_or_else(
        || category.fallback_download_path(&slug),
        AssetRecord::download_location,
    );

    let lead_title = match &redemption {
        Some(Redemption::Redeemed(lead)) => lead.asset_title.clone(),
        _ => None,
    };

    let title = asset
        .map(|asset| asset.title)
        .or(lead_title)
        .unwrap_or(slug);

    Ok(Json(DownloadResponse {
        success: true,
        download_url,
        title,
        token_used: redemption.as_ref().is_some_and(Redemption::token_used),
        reason: redemption
            .as_ref()
            .and_then(Redemption::reason)
            .map(ToString::to_string),
    }))
}
