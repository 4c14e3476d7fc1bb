//! Leads Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::{
    categories::LeadCategory,
    leads::{
        data::NewLead,
        records::{LeadRecord, LeadUuid, NEW_LEAD_STATUS},
        token::DownloadToken,
    },
};

const CREATE_LEAD_SQL: &str = include_str!("sql/create_lead.sql");
const LIST_LEADS_SQL: &str = include_str!("sql/list_leads.sql");
const FIND_LEAD_BY_TOKEN_SQL: &str = include_str!("sql/find_lead_by_token.sql");
const REDEEM_TOKEN_SQL: &str = include_str!("sql/redeem_token.sql");

/// PostgreSQL-backed leads repository, one table per category.
#[derive(Debug, Clone)]
pub(crate) struct PgLeadsRepository {
    pool: PgPool,
}

impl PgLeadsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_lead(
        &self,
        category: LeadCategory,
        lead: NewLead,
    ) -> Result<LeadRecord, sqlx::Error> {
        let sql = category.render_leads_sql(CREATE_LEAD_SQL);

        query_as::<Postgres, LeadRecord>(&sql)
            .bind(lead.name)
            .bind(lead.email)
            .bind(lead.company)
            .bind(lead.asset_slug)
            .bind(lead.asset_title)
            .bind(lead.token.into_string())
            .bind(SqlxTimestamp::from(lead.token_expires_at))
            .bind(category.source_tag())
            .bind(NEW_LEAD_STATUS)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn list_leads(
        &self,
        category: LeadCategory,
    ) -> Result<Vec<LeadRecord>, sqlx::Error> {
        let sql = category.render_leads_sql(LIST_LEADS_SQL);

        query_as::<Postgres, LeadRecord>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    pub(crate) async fn find_lead_by_token(
        &self,
        category: LeadCategory,
        token: &DownloadToken,
    ) -> Result<Option<LeadRecord>, sqlx::Error> {
        let sql = category.render_leads_sql(FIND_LEAD_BY_TOKEN_SQL);

        query_as::<Postgres, LeadRecord>(&sql)
            .bind(token.as_str())
            .fetch_optional(&self.pool)
            .await
    }

    /// Consume the token if it is unused and unexpired at `now`.
    ///
    /// Returns `None` when no row matched; the predicate on `token_used` makes
    /// at most one of any concurrent callers succeed.
    pub(crate) async fn redeem_token(
        &self,
        category: LeadCategory,
        token: &DownloadToken,
        now: Timestamp,
    ) -> Result<Option<LeadRecord>, sqlx::Error> {
        let sql = category.render_leads_sql(REDEEM_TOKEN_SQL);

        query_as::<Postgres, LeadRecord>(&sql)
            .bind(token.as_str())
            .bind(SqlxTimestamp::from(now))
            .fetch_optional(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for LeadRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: LeadUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            company: row.try_get("company")?,
            asset_slug: row.try_get("asset_slug")?,
            asset_title: row.try_get("asset_title")?,
            token: DownloadToken::from(row.try_get::<String, _>("token")?),
            token_expires_at: row
                .try_get::<SqlxTimestamp, _>("token_expires_at")?
                .to_jiff(),
            token_used: row.try_get("token_used")?,
            downloaded_at: row
                .try_get::<Option<SqlxTimestamp>, _>("downloaded_at")?
                .map(SqlxTimestamp::to_jiff),
            source: row.try_get("source")?,
            status: row.try_get("status")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
