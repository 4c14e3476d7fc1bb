//! Assets service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::{
    assets::{
        data::AssetUpsert, errors::AssetsServiceError, records::AssetRecord,
        repository::PgAssetsRepository,
    },
    categories::LeadCategory,
};

#[derive(Debug, Clone)]
pub struct PgAssetsService {
    repository: PgAssetsRepository,
}

impl PgAssetsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAssetsRepository::new(pool),
        }
    }
}

#[async_trait]
impl AssetsService for PgAssetsService {
    async fn get_asset(
        &self,
        category: LeadCategory,
        slug: String,
    ) -> Result<AssetRecord, AssetsServiceError> {
        self.repository
            .get_asset(category, &slug)
            .await
            .map_err(Into::into)
    }

    async fn list_assets(
        &self,
        category: LeadCategory,
    ) -> Result<Vec<AssetRecord>, AssetsServiceError> {
        self.repository
            .list_assets(category)
            .await
            .map_err(Into::into)
    }

    async fn upsert_asset(&self, asset: AssetUpsert) -> Result<AssetRecord, AssetsServiceError> {
        self.repository
            .upsert_asset(asset)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub trait AssetsService: Send + Sync {
    /// Retrieve a published asset by slug.
    async fn get_asset(
        &self,
        category: LeadCategory,
        slug: String,
    ) -> Result<AssetRecord, AssetsServiceError>;

    /// Retrieve published assets, featured first then newest.
    async fn list_assets(
        &self,
        category: LeadCategory,
    ) -> Result<Vec<AssetRecord>, AssetsServiceError>;

    /// Create or replace an asset.
    async fn upsert_asset(&self, asset: AssetUpsert) -> Result<AssetRecord, AssetsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::assets::records::AssetStatus,
        test::{TestContext, helpers::asset_upsert},
    };

    use super::*;

    #[tokio::test]
    async fn get_asset_returns_published_asset() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.assets
            .upsert_asset(asset_upsert("zero-trust", AssetStatus::Published, false))
            .await?;

        let asset = ctx
            .assets
            .get_asset(LeadCategory::Whitepaper, "zero-trust".to_string())
            .await?;

        assert_eq!(asset.slug, "zero-trust");
        assert_eq!(asset.category, LeadCategory::Whitepaper);

        Ok(())
    }

    #[tokio::test]
    async fn get_asset_hides_drafts() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.assets
            .upsert_asset(asset_upsert("zero-trust", AssetStatus::Draft, false))
            .await?;

        let result = ctx
            .assets
            .get_asset(LeadCategory::Whitepaper, "zero-trust".to_string())
            .await;

        assert!(
            matches!(result, Err(AssetsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_asset_is_scoped_to_category() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.assets
            .upsert_asset(asset_upsert("zero-trust", AssetStatus::Published, false))
            .await?;

        let result = ctx
            .assets
            .get_asset(LeadCategory::Playbook, "zero-trust".to_string())
            .await;

        assert!(
            matches!(result, Err(AssetsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_assets_puts_featured_first() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.assets
            .upsert_asset(asset_upsert("plain", AssetStatus::Published, false))
            .await?;
        ctx.assets
            .upsert_asset(asset_upsert("featured", AssetStatus::Published, true))
            .await?;
        ctx.assets
            .upsert_asset(asset_upsert("hidden", AssetStatus::Draft, true))
            .await?;

        let assets = ctx.assets.list_assets(LeadCategory::Whitepaper).await?;
        let slugs: Vec<&str> = assets.iter().map(|asset| asset.slug.as_str()).collect();

        assert_eq!(slugs, vec!["featured", "plain"]);

        Ok(())
    }

    #[tokio::test]
    async fn upsert_asset_replaces_existing_slug() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.assets
            .upsert_asset(asset_upsert("zero-trust", AssetStatus::Published, false))
            .await?;

        let mut update = asset_upsert("zero-trust", AssetStatus::Published, true);
        update.file_location = Some("https://cdn.example.com/zero-trust-v2.pdf".to_string());

        let updated = ctx.assets.upsert_asset(update).await?;

        assert!(updated.featured);
        assert_eq!(
            updated.download_location(),
            "https://cdn.example.com/zero-trust-v2.pdf"
        );

        Ok(())
    }
}
