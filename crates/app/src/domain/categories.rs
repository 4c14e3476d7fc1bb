//! Asset categories.
//!
//! Every downloadable asset belongs to exactly one category, and each category
//! keeps its leads in a table of its own.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// Asset category served by the lead endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadCategory {
    Playbook,
    Whitepaper,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown lead category: {0}")]
pub struct UnknownCategory(pub String);

impl LeadCategory {
    pub const ALL: [Self; 2] = [Self::Playbook, Self::Whitepaper];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playbook => "playbook",
            Self::Whitepaper => "whitepaper",
        }
    }

    /// Table holding the leads captured for this category.
    #[must_use]
    pub const fn leads_table(self) -> &'static str {
        match self {
            Self::Playbook => "playbook_leads",
            Self::Whitepaper => "whitepaper_leads",
        }
    }

    /// Provenance tag written on every lead captured for this category.
    #[must_use]
    pub const fn source_tag(self) -> &'static str {
        match self {
            Self::Playbook => "playbook_download",
            Self::Whitepaper => "whitepaper_download",
        }
    }

    /// Download path used when an asset has no stored file location.
    #[must_use]
    pub fn fallback_download_path(self, slug: &str) -> String {
        let directory = match self {
            Self::Playbook => "playbooks",
            Self::Whitepaper => "whitepapers",
        };

        format!("/downloads/{directory}/{slug}.pdf")
    }

    /// Substitute the category's lead table into a `{table}` query template.
    pub(crate) fn render_leads_sql(self, template: &str) -> String {
        template.replace("{table}", self.leads_table())
    }
}

impl Display for LeadCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_categories() {
        assert_eq!("playbook".parse(), Ok(LeadCategory::Playbook));
        assert_eq!("whitepaper".parse(), Ok(LeadCategory::Whitepaper));
    }

    #[test]
    fn rejects_unknown_categories() {
        assert_eq!(
            "ebook".parse::<LeadCategory>(),
            Err(UnknownCategory("ebook".to_string()))
        );
    }

    #[test]
    fn fallback_path_is_derived_from_slug() {
        assert_eq!(
            LeadCategory::Whitepaper.fallback_download_path("ai-readiness"),
            "/downloads/whitepapers/ai-readiness.pdf"
        );
        assert_eq!(
            LeadCategory::Playbook.fallback_download_path("cloud-migration"),
            "/downloads/playbooks/cloud-migration.pdf"
        );
    }

    #[test]
    fn renders_table_into_template() {
        assert_eq!(
            LeadCategory::Playbook.render_leads_sql("SELECT * FROM {table}"),
            "SELECT * FROM playbook_leads"
        );
    }
}
