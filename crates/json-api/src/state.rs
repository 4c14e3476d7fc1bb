//! State

use std::sync::Arc;

use leadgate_app::context::AppContext;

use crate::admin::AdminGuard;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) admin: AdminGuard,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, admin: AdminGuard) -> Self {
        Self { app, admin }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, admin: AdminGuard) -> Arc<Self> {
        Arc::new(Self::new(app, admin))
    }
}
