//! Leads service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::{
    categories::LeadCategory,
    leads::{
        data::NewLead,
        errors::LeadsServiceError,
        records::{LeadRecord, Redemption, TokenValidity},
        repository::PgLeadsRepository,
        token::DownloadToken,
    },
};

#[derive(Debug, Clone)]
pub struct PgLeadsService {
    repository: PgLeadsRepository,
}

impl PgLeadsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgLeadsRepository::new(pool),
        }
    }
}

#[async_trait]
impl LeadsService for PgLeadsService {
    async fn create_lead(
        &self,
        category: LeadCategory,
        lead: NewLead,
    ) -> Result<LeadRecord, LeadsServiceError> {
        self.repository
            .create_lead(category, lead)
            .await
            .map_err(Into::into)
    }

    async fn list_leads(&self, category: LeadCategory) -> Result<Vec<LeadRecord>, LeadsServiceError> {
        self.repository
            .list_leads(category)
            .await
            .map_err(Into::into)
    }

    async fn check_token(
        &self,
        category: LeadCategory,
        token: DownloadToken,
        now: Timestamp,
    ) -> Result<TokenValidity, LeadsServiceError> {
        let lead = self.repository.find_lead_by_token(category, &token).await?;

        Ok(lead.map_or(TokenValidity::NotFound, |lead| lead.token_validity(now)))
    }

    async fn redeem_token(
        &self,
        category: LeadCategory,
        token: DownloadToken,
        now: Timestamp,
    ) -> Result<Redemption, LeadsServiceError> {
        if let Some(lead) = self.repository.redeem_token(category, &token, now).await? {
            return Ok(Redemption::Redeemed(lead));
        }

        let validity = self
            .repository
            .find_lead_by_token(category, &token)
            .await?
            .map_or(TokenValidity::NotFound, |lead| lead.token_validity(now));

        // A row that still reads as redeemable lost the race to a concurrent
        // redemption that committed between the update and this read.
        let validity = match validity {
            TokenValidity::Valid => TokenValidity::AlreadyUsed,
            rejected => rejected,
        };

        debug!(%category, reason = validity.reason(), "token redemption rejected");

        Ok(Redemption::Rejected(validity))
    }
}

#[automock]
#[async_trait]
/// Lead persistence and token lifecycle operations.
pub trait LeadsService: Send + Sync {
    /// Persists a new lead carrying an issued token.
    async fn create_lead(
        &self,
        category: LeadCategory,
        lead: NewLead,
    ) -> Result<LeadRecord, LeadsServiceError>;

    /// Retrieves all leads of a category, newest first.
    async fn list_leads(&self, category: LeadCategory) -> Result<Vec<LeadRecord>, LeadsServiceError>;

    /// Reports whether a token could be redeemed at `now`, without consuming it.
    async fn check_token(
        &self,
        category: LeadCategory,
        token: DownloadToken,
        now: Timestamp,
    ) -> Result<TokenValidity, LeadsServiceError>;

    /// Consumes a token if it is unused and unexpired at `now`.
    async fn redeem_token(
        &self,
        category: LeadCategory,
        token: DownloadToken,
        now: Timestamp,
    ) -> Result<Redemption, LeadsServiceError>;
}
