//! Subscribers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::subscribers::{
    data::NewSubscriber,
    records::{ACTIVE_SUBSCRIBER_STATUS, SubscriberRecord},
};

const CREATE_SUBSCRIBER_SQL: &str = include_str!("sql/create_subscriber.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgSubscribersRepository {
    pool: PgPool,
}

impl PgSubscribersRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_subscriber(
        &self,
        subscriber: NewSubscriber,
    ) -> Result<SubscriberRecord, sqlx::Error> {
        query_as::<Postgres, SubscriberRecord>(CREATE_SUBSCRIBER_SQL)
            .bind(subscriber.email)
            .bind(subscriber.source)
            .bind(ACTIVE_SUBSCRIBER_STATUS)
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SubscriberRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            email: row.try_get("email")?,
            source: row.try_get("source")?,
            status: row.try_get("status")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
