//! Assets Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::{
    assets::{
        data::AssetUpsert,
        records::{AssetRecord, AssetStatus},
    },
    categories::LeadCategory,
};

const GET_ASSET_SQL: &str = include_str!("sql/get_asset.sql");
const LIST_ASSETS_SQL: &str = include_str!("sql/list_assets.sql");
const UPSERT_ASSET_SQL: &str = include_str!("sql/upsert_asset.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAssetsRepository {
    pool: PgPool,
}

impl PgAssetsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn get_asset(
        &self,
        category: LeadCategory,
        slug: &str,
    ) -> Result<AssetRecord, sqlx::Error> {
        query_as::<Postgres, AssetRecord>(GET_ASSET_SQL)
            .bind(category.as_str())
            .bind(slug)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn list_assets(
        &self,
        category: LeadCategory,
    ) -> Result<Vec<AssetRecord>, sqlx::Error> {
        query_as::<Postgres, AssetRecord>(LIST_ASSETS_SQL)
            .bind(category.as_str())
            .fetch_all(&self.pool)
            .await
    }

    pub(crate) async fn upsert_asset(&self, asset: AssetUpsert) -> Result<AssetRecord, sqlx::Error> {
        query_as::<Postgres, AssetRecord>(UPSERT_ASSET_SQL)
            .bind(asset.slug)
            .bind(asset.category.as_str())
            .bind(asset.title)
            .bind(asset.description)
            .bind(asset.cover_image)
            .bind(asset.file_location)
            .bind(asset.featured)
            .bind(asset.status.as_str())
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for AssetRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let category = row
            .try_get::<String, _>("category")?
            .parse::<LeadCategory>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "category".to_string(),
                source: Box::new(e),
            })?;

        let status = row
            .try_get::<String, _>("status")?
            .parse::<AssetStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            slug: row.try_get("slug")?,
            category,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            cover_image: row.try_get("cover_image")?,
            file_location: row.try_get("file_location")?,
            featured: row.try_get("featured")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
