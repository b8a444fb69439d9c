//! Combined router for all sign-in endpoints

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Create a combined router for all sign-in endpoints
///
/// The endpoints will be available at:
/// - {GL_ROUTE_PREFIX}/          (login trigger)
/// - {GL_ROUTE_PREFIX}/callback  (the configured redirect URI)
/// - {GL_ROUTE_PREFIX}/login     (login page)
/// - {GL_ROUTE_PREFIX}/logout
/// - {GL_ROUTE_PREFIX}/style.css
/// - {GL_ROUTE_PREFIX}/admin/settings
///
/// Mount it once in the application under [`google_login::GL_ROUTE_PREFIX`].
pub fn google_login_router() -> Router {
    google_login_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Create a combined router for all sign-in endpoints without HTTP tracing
///
/// This is the same as `google_login_router()` but without the HTTP tracing
/// middleware. Use this to add your own tracing middleware instead.
pub fn google_login_router_no_trace() -> Router {
    Router::new()
        .merge(super::oauth2::router())
        .merge(super::pages::router())
        .nest("/admin", super::admin::router())
}
