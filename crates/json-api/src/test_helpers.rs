//! Test helpers.

use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use leadgate_app::{
    context::AppContext,
    domain::{
        assets::{
            MockAssetsService,
            records::{AssetRecord, AssetStatus},
        },
        categories::LeadCategory,
        leads::{
            MockLeadsService,
            records::{LeadRecord, LeadUuid, NEW_LEAD_STATUS},
            token::DownloadToken,
        },
        subscribers::MockSubscribersService,
    },
};

use crate::{admin::AdminGuard, state::State};

pub(crate) fn strict_leads_mock() -> MockLeadsService {
    let mut leads = MockLeadsService::new();

    leads.expect_create_lead().never();
    leads.expect_list_leads().never();
    leads.expect_check_token().never();
    leads.expect_redeem_token().never();

    leads
}

pub(crate) fn strict_assets_mock() -> MockAssetsService {
    let mut assets = MockAssetsService::new();

    assets.expect_get_asset().never();
    assets.expect_list_assets().never();
    assets.expect_upsert_asset().never();

    assets
}

pub(crate) fn strict_subscribers_mock() -> MockSubscribersService {
    let mut subscribers = MockSubscribersService::new();

    subscribers.expect_subscribe().never();

    subscribers
}

pub(crate) fn make_state(
    leads: MockLeadsService,
    assets: MockAssetsService,
    subscribers: MockSubscribersService,
) -> Arc<State> {
    let app = AppContext {
        leads: Arc::new(leads),
        assets: Arc::new(assets),
        subscribers: Arc::new(subscribers),
    };

    State::shared(app, AdminGuard::default())
}

pub(crate) fn state_with_admin(admin: AdminGuard) -> Arc<State> {
    let app = AppContext {
        leads: Arc::new(strict_leads_mock()),
        assets: Arc::new(strict_assets_mock()),
        subscribers: Arc::new(strict_subscribers_mock()),
    };

    State::shared(app, admin)
}

pub(crate) fn state_with_leads(leads: MockLeadsService) -> Arc<State> {
    make_state(leads, strict_assets_mock(), strict_subscribers_mock())
}

pub(crate) fn state_with_assets(assets: MockAssetsService) -> Arc<State> {
    make_state(strict_leads_mock(), assets, strict_subscribers_mock())
}

pub(crate) fn state_with_subscribers(subscribers: MockSubscribersService) -> Arc<State> {
    make_state(strict_leads_mock(), strict_assets_mock(), subscribers)
}

pub(crate) fn make_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn make_lead(token: &str, asset_title: Option<&str>) -> LeadRecord {
    LeadRecord {
        uuid: LeadUuid::from_uuid(Uuid::nil()),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        company: "Analytical Engines".to_string(),
        asset_slug: "ai-readiness".to_string(),
        asset_title: asset_title.map(ToString::to_string),
        token: DownloadToken::from(token),
        token_expires_at: Timestamp::UNIX_EPOCH + SignedDuration::from_hours(24),
        token_used: false,
        downloaded_at: None,
        source: LeadCategory::Playbook.source_tag().to_string(),
        status: NEW_LEAD_STATUS.to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_asset(
    category: LeadCategory,
    slug: &str,
    file_location: Option<&str>,
) -> AssetRecord {
    AssetRecord {
        slug: slug.to_string(),
        category,
        title: "AI Readiness Playbook".to_string(),
        description: Some("Where to start with AI".to_string()),
        cover_image: None,
        file_location: file_location.map(ToString::to_string),
        featured: false,
        status: AssetStatus::Published,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
