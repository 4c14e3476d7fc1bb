//! Lead Index Handler

use std::string::ToString;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use leadgate_app::domain::leads::records::LeadRecord;

use crate::extensions::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LeadResponse {
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub company: String,
    pub asset_slug: String,
    pub asset_title: Option<String>,
    pub token_used: bool,
    pub token_expires_at: String,
    pub downloaded_at: Option<String>,
    pub source: String,
    pub status: String,
    pub created_at: String,
}

impl From<LeadRecord> for LeadResponse {
    fn from(lead: LeadRecord) -> Self {
        LeadResponse {
            uuid: lead.uuid.into(),
            name: lead.name,
            email: lead.email,
            company: lead.company,
            asset_slug: lead.asset_slug,
            asset_title: lead.asset_title,
            token_used: lead.token_used,
            token_expires_at: lead.token_expires_at.to_string(),
            downloaded_at: lead.downloaded_at.as_ref().map(ToString::to_string),
            source: lead.source,
            status: lead.status,
            created_at: lead.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LeadsResponse {
    /// Captured leads, newest first
    pub leads: Vec<LeadResponse>,
}

/// Lead Index Handler
///
/// Lists every lead captured for a category. Store failures are logged and
/// reported as an empty list.
#[endpoint(
    tags("leads"),
    summary = "List Leads",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    category: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<LeadsResponse>, StatusError> {
    let category = category.into_category()?;
    let state = depot.state_or_500()?;

    let leads = state
        .app
        .leads
        .list_leads(category)
        .await
        .unwrap_or_else(|list_error| {
            error!(%category, "failed to list leads: {list_error}");

            Vec::new()
        });

    Ok(Json(LeadsResponse {
        leads: leads.into_iter().map(Into::into).collect(),
    }))
}
