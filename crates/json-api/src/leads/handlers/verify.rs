//! Verify Token Handler

use jiff::Timestamp;
use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use leadgate_app::domain::leads::{LeadsServiceError, token::DownloadToken};

use crate::{extensions::*, leads::errors::into_status_error};

/// Token Validity Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TokenValidityResponse {
    pub valid: bool,

    /// Why the token cannot be redeemed: `already_used`, `expired` or `not_found`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Verify Token Handler
///
/// Reports whether a download token could still be redeemed without
/// consuming it. An unavailable lead store fails open.
#[endpoint(
    tags("leads"),
    summary = "Verify Download Token",
    responses(
        (status_code = StatusCode::OK, description = "Token checked"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing token"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown asset category"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    category: PathParam<String>,
    token: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<TokenValidityResponse>, StatusError> {
    let category = category.into_category()?;
    let state = depot.state_or_500()?;

    let token = token
        .into_inner()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| StatusError::bad_request().brief("Missing token"))?;

    match state
        .app
        .leads
        .check_token(category, DownloadToken::from(token), Timestamp::now())
        .await
    {
        Ok(validity) => Ok(Json(TokenValidityResponse {
            valid: validity.is_valid(),
            reason: validity.reason().map(ToString::to_string),
        })),
        Err(LeadsServiceError::NotConfigured(source)) => {
            warn!(%category, "lead store unavailable, treating token as valid: {source}");

            Ok(Json(TokenValidityResponse {
                valid: true,
                reason: None,
            }))
        }
        Err(error) => Err(into_status_error(error)),
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use leadgate_app::domain::{
        categories::LeadCategory,
        leads::{MockLeadsService, records::TokenValidity},
    };

    use crate::test_helpers::{make_service, state_with_leads};

    use super::*;

    fn service(leads: MockLeadsService) -> Service {
        make_service(
            state_with_leads(leads),
            Router::with_path("leads/{category}/verify").get(handler),
        )
    }

    fn checking(result: Result<TokenValidity, LeadsServiceError>) -> MockLeadsService {
        let mut leads = MockLeadsService::new();

        leads
            .expect_check_token()
            .once()
            .withf(|category, token, _| {
                *category == LeadCategory::Whitepaper && token.as_str() == "abc"
            })
            .return_once(move |_, _, _| result);

        leads.expect_create_lead().never();
        leads.expect_list_leads().never();
        leads.expect_redeem_token().never();

        leads
    }

    #[tokio::test]
    async fn test_verify_valid_token() -> TestResult {
        let mut res = TestClient::get("http://example.com/leads/whitepaper/verify?token=abc")
            .send(&service(checking(Ok(TokenValidity::Valid))))
            .await;

        let body: TokenValidityResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.valid);
        assert_eq!(body.reason, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_verify_expired_token_reports_reason() -> TestResult {
        let mut res = TestClient::get("http://example.com/leads/whitepaper/verify?token=abc")
            .send(&service(checking(Ok(TokenValidity::Expired))))
            .await;

        let body: TokenValidityResponse = res.take_json().await?;

        assert!(!body.valid);
        assert_eq!(body.reason.as_deref(), Some("expired"));

        Ok(())
    }

    #[tokio::test]
    async fn test_verify_unknown_token_reports_not_found() -> TestResult {
        let mut res = TestClient::get("http://example.com/leads/whitepaper/verify?token=abc")
            .send(&service(checking(Ok(TokenValidity::NotFound))))
            .await;

        let body: TokenValidityResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(!body.valid);
        assert_eq!(body.reason.as_deref(), Some("not_found"));

        Ok(())
    }

    #[tokio::test]
    async fn test_verify_missing_token_returns_400() -> TestResult {
        let mut leads = MockLeadsService::new();

        leads.expect_check_token().never();
        leads.expect_create_lead().never();
        leads.expect_list_leads().never();
        leads.expect_redeem_token().never();

        let res = TestClient::get("http://example.com/leads/whitepaper/verify")
            .send(&service(leads))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_verify_unconfigured_store_fails_open() -> TestResult {
        let leads = checking(Err(LeadsServiceError::NotConfigured(
            sqlx::Error::PoolTimedOut,
        )));

        let mut res = TestClient::get("http://example.com/leads/whitepaper/verify?token=abc")
            .send(&service(leads))
            .await;

        let body: TokenValidityResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.valid);

        Ok(())
    }

    #[tokio::test]
    async fn test_verify_store_failure_returns_500() -> TestResult {
        let leads = checking(Err(LeadsServiceError::Sql(sqlx::Error::RowNotFound)));

        let res = TestClient::get("http://example.com/leads/whitepaper/verify?token=abc")
            .send(&service(leads))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
