//! Subscribers service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::subscribers::{
    data::NewSubscriber, errors::SubscribersServiceError, records::SubscriberRecord,
    repository::PgSubscribersRepository,
};

#[derive(Debug, Clone)]
pub struct PgSubscribersService {
    repository: PgSubscribersRepository,
}

impl PgSubscribersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgSubscribersRepository::new(pool),
        }
    }
}

#[async_trait]
impl SubscribersService for PgSubscribersService {
    async fn subscribe(
        &self,
        subscriber: NewSubscriber,
    ) -> Result<SubscriberRecord, SubscribersServiceError> {
        self.repository
            .create_subscriber(subscriber)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// Newsletter subscription persistence.
pub trait SubscribersService: Send + Sync {
    /// Records a new subscriber; an email that is already subscribed is
    /// reported as [`SubscribersServiceError::AlreadyExists`].
    async fn subscribe(
        &self,
        subscriber: NewSubscriber,
    ) -> Result<SubscriberRecord, SubscribersServiceError>;
}

#[cfg(test)]
mod tests {
    use sqlx::query_scalar;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn subscriber(email: &str) -> NewSubscriber {
        NewSubscriber {
            email: email.to_string(),
            source: "footer".to_string(),
        }
    }

    #[tokio::test]
    async fn subscribe_creates_active_subscriber() -> TestResult {
        let ctx = TestContext::new().await;

        let record = ctx
            .subscribers
            .subscribe(subscriber("ada@example.com"))
            .await?;

        assert_eq!(record.email, "ada@example.com");
        assert_eq!(record.source, "footer");
        assert_eq!(record.status, "active");

        Ok(())
    }

    #[tokio::test]
    async fn subscribe_twice_keeps_one_row() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.subscribers
            .subscribe(subscriber("ada@example.com"))
            .await?;

        let second = ctx
            .subscribers
            .subscribe(subscriber("ada@example.com"))
            .await;

        assert!(
            matches!(second, Err(SubscribersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {second:?}"
        );

        let rows: i64 =
            query_scalar("SELECT count(*) FROM newsletter_subscribers WHERE email = $1")
                .bind("ada@example.com")
                .fetch_one(ctx.db.pool())
                .await?;

        assert_eq!(rows, 1);

        Ok(())
    }
}
