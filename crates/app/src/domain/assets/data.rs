//! Asset Data

use crate::domain::{assets::records::AssetStatus, categories::LeadCategory};

/// Asset contents written by the back office; replaces any row with the same slug.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetUpsert {
    pub slug: String,
    pub category: LeadCategory,
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub file_location: Option<String>,
    pub featured: bool,
    pub status: AssetStatus,
}
