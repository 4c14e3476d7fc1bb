//! Get Asset Handler

use std::string::ToString;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use leadgate_app::domain::assets::records::AssetRecord;

use crate::{assets::errors::into_status_error, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AssetResponse {
    /// URL-safe identifier of the asset
    pub slug: String,

    /// Asset category, `playbook` or `whitepaper`
    pub category: String,

    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,

    /// Whether the asset is highlighted on listing pages
    pub featured: bool,

    /// The date and time the asset was created
    pub created_at: String,

    /// The date and time the asset was last updated
    pub updated_at: String,
}

impl From<AssetRecord> for AssetResponse {
    fn from(asset: AssetRecord) -> Self {
        AssetResponse {
            slug: asset.slug,
            category: asset.category.to_string(),
            title: asset.title,
            description: asset.description,
            cover_image: asset.cover_image,
            featured: asset.featured,
            created_at: asset.created_at.to_string(),
            updated_at: asset.updated_at.to_string(),
        }
    }
}

/// Get Asset Handler
///
/// Returns a published asset. Its file location is only revealed through a
/// download token.
#[endpoint(
    tags("assets"),
    summary = "Get Asset",
    responses(
        (status_code = StatusCode::OK, description = "Asset found"),
        (status_code = StatusCode::NOT_FOUND, description = "Asset or category not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    category: PathParam<String>,
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<AssetResponse>, StatusError> {
    let category = category.into_category()?;
    let state = depot.state_or_500()?;

    let asset = state
        .app
        .assets
        .get_asset(category, slug.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(asset.into()))
}
