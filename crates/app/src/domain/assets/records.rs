//! Asset Records

use std::str::FromStr;

use jiff::Timestamp;
use thiserror::Error;

use crate::domain::categories::LeadCategory;

/// Publication state of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Draft,
    Published,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown asset status: {0}")]
pub struct UnknownAssetStatus(pub String);

impl AssetStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl FromStr for AssetStatus {
    type Err = UnknownAssetStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(UnknownAssetStatus(other.to_string())),
        }
    }
}

/// Asset Record
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub slug: String,
    pub category: LeadCategory,
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub file_location: Option<String>,
    pub featured: bool,
    pub status: AssetStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AssetRecord {
    /// Where a redeemed download should point: the stored file, or the
    /// category's conventional path for this slug.
    #[must_use]
    pub fn download_location(&self) -> String {
        self.file_location
            .clone()
            .unwrap_or_else(|| self.category.fallback_download_path(&self.slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(file_location: Option<&str>) -> AssetRecord {
        AssetRecord {
            slug: "zero-trust".to_string(),
            category: LeadCategory::Whitepaper,
            title: "Zero Trust".to_string(),
            description: None,
            cover_image: None,
            file_location: file_location.map(ToString::to_string),
            featured: false,
            status: AssetStatus::Published,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn stored_file_location_wins() {
        let asset = asset(Some("https://cdn.example.com/zero-trust.pdf"));

        assert_eq!(
            asset.download_location(),
            "https://cdn.example.com/zero-trust.pdf"
        );
    }

    #[test]
    fn missing_file_location_falls_back_to_slug_path() {
        assert_eq!(
            asset(None).download_location(),
            "/downloads/whitepapers/zero-trust.pdf"
        );
    }

    #[test]
    fn status_parses_round_trip() {
        for status in [AssetStatus::Draft, AssetStatus::Published] {
            assert_eq!(status.as_str().parse(), Ok(status));
        }

        assert!("archived".parse::<AssetStatus>().is_err());
    }
}
