//! App Router

use salvo::Router;

use crate::{admin, assets, healthcheck, leads, newsletter};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("leads/{category}")
                .post(leads::create::handler)
                .push(
                    Router::new()
                        .hoop(admin::middleware::handler)
                        .get(leads::index::handler),
                )
                .push(Router::with_path("verify").get(leads::verify::handler))
                .push(Router::with_path("download").post(leads::download::handler)),
        )
        .push(Router::with_path("newsletter").post(newsletter::subscribe::handler))
        .push(
            Router::with_path("assets/{category}")
                .get(assets::index::handler)
                .push(Router::with_path("{slug}").get(assets::get::handler)),
        )
}
