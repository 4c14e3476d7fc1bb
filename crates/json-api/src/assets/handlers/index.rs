//! Asset Index Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use leadgate_app::domain::assets::AssetsServiceError;

use crate::{
    assets::{errors::into_status_error, get::AssetResponse},
    extensions::*,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AssetsResponse {
    /// Published assets, featured first then newest
    pub assets: Vec<AssetResponse>,
}

/// Asset Index Handler
///
/// Lists the published assets of a category. An unavailable store yields an
/// empty catalogue.
#[endpoint(tags("assets"), summary = "List Assets")]
pub(crate) async fn handler(
    category: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<AssetsResponse>, StatusError> {
    let category = category.into_category()?;
    let state = depot.state_or_500()?;

    let assets = match state.app.assets.list_assets(category).await {
        Ok(assets) => assets,
        Err(AssetsServiceError::NotConfigured(source)) => {
            warn!(%category, "asset store unavailable, serving empty catalogue: {source}");

            Vec::new()
        }
        Err(error) => return Err(into_status_error(error)),
    };

    Ok(Json(AssetsResponse {
        assets: assets.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use leadgate_app::domain::{assets::MockAssetsService, categories::LeadCategory};

    use crate::test_helpers::{make_asset, make_service, state_with_assets};

    use super::*;

    fn service(assets: MockAssetsService) -> Service {
        make_service(
            state_with_assets(assets),
            Router::with_path("assets/{category}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_returns_assets() -> TestResult {
        let mut assets = MockAssetsService::new();

        assets
            .expect_list_assets()
            .once()
            .withf(|category| *category == LeadCategory::Playbook)
            .return_once(|_| {
                Ok(vec![
                    make_asset(LeadCategory::Playbook, "ai-readiness", None),
                    make_asset(LeadCategory::Playbook, "data-strategy", None),
                ])
            });

        assets.expect_get_asset().never();
        assets.expect_upsert_asset().never();

        let mut res = TestClient::get("http://example.com/assets/playbook")
            .send(&service(assets))
            .await;

        let body: AssetsResponse = res.take_json().await?;

        let slugs: Vec<&str> = body.assets.iter().map(|asset| asset.slug.as_str()).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(slugs, ["ai-readiness", "data-strategy"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unconfigured_store_returns_empty_list() -> TestResult {
        let mut assets = MockAssetsService::new();

        assets
            .expect_list_assets()
            .once()
            .return_once(|_| Err(AssetsServiceError::NotConfigured(sqlx::Error::PoolClosed)));

        assets.expect_get_asset().never();
        assets.expect_upsert_asset().never();

        let mut res = TestClient::get("http://example.com/assets/whitepaper")
            .send(&service(assets))
            .await;

        let body: AssetsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.assets.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_category_returns_404() -> TestResult {
        let mut assets = MockAssetsService::new();

        assets.expect_list_assets().never();
        assets.expect_get_asset().never();
        assets.expect_upsert_asset().never();

        let res = TestClient::get("http://example.com/assets/podcast")
            .send(&service(assets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
