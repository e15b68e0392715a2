use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Json, Router};

use crate::config::IssuesConfig;
use crate::domain::service::Service;

use super::{handlers, openapi};

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Path the project-scoped resource is mounted at.
#[must_use]
pub fn resource_path(config: &IssuesConfig) -> String {
    format!("{}/{{project}}", config.route_prefix.trim_end_matches('/'))
}

#[must_use]
pub fn register_routes(mut router: Router, config: &IssuesConfig, service: Arc<Service>) -> Router {
    let path = resource_path(config);
    tracing::debug!(path = %path, "registering issues routes");

    router = router.route(
        &path,
        get(handlers::list_issues)
            .post(handlers::create_issue)
            .put(handlers::update_issue)
            .delete(handlers::delete_issue),
    );

    let doc = openapi::build_openapi(&path);
    router = router.route(
        OPENAPI_PATH,
        get(move || {
            let doc = doc.clone();
            async move { Json(doc) }
        }),
    );

    router = router.layer(Extension(service));

    router
}
