use std::net::SocketAddr;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderName, Request, Response};
use axum::routing::get;
use issue_tracker::IssueTrackerModule;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::signals;

/// Header carrying the per-request identifier, generated when absent.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

async fn health_check() -> &'static str {
    "ok"
}

/// Assemble the application router: liveness probe, issues resource and
/// request tracing.
#[must_use]
pub fn build_router(module: &IssueTrackerModule) -> Router {
    let router = Router::new().route("/health", get(health_check));
    let router = module.register_rest(router);
    apply_middleware_stack(router)
}

/// Requests flow `SetRequestId` -> `PropagateRequestId` -> Trace -> Router.
fn apply_middleware_stack(router: Router) -> Router {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    apply_trace_layer(router)
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &Response<Body>, latency: std::time::Duration, span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                    tracing::debug!(parent: span, "request completed");
                },
            ),
    )
}

/// Bind `addr` and serve until a shutdown signal arrives.
///
/// # Errors
/// Returns an error if the socket cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, router: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    let shutdown = async {
        if let Err(e) = signals::wait_for_shutdown().await {
            tracing::error!(error = %e, "shutdown signal handling failed");
        }
        tracing::info!("HTTP server shutting down gracefully");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
