//! Test Helpers

use crate::domain::{
    assets::{data::AssetUpsert, records::AssetStatus},
    categories::LeadCategory,
    leads::{data::NewLead, token::IssuedToken},
};

pub(crate) fn new_lead(email: &str, issued: IssuedToken) -> NewLead {
    NewLead {
        name: "Ada Lovelace".to_string(),
        email: email.to_string(),
        company: "Analytical Engines".to_string(),
        asset_slug: "ai-readiness".to_string(),
        asset_title: Some("AI Readiness".to_string()),
        token: issued.token,
        token_expires_at: issued.expires_at,
    }
}

pub(crate) fn asset_upsert(slug: &str, status: AssetStatus, featured: bool) -> AssetUpsert {
    AssetUpsert {
        slug: slug.to_string(),
        category: LeadCategory::Whitepaper,
        title: format!("Whitepaper {slug}"),
        description: None,
        cover_image: None,
        file_location: None,
        featured,
        status,
    }
}
