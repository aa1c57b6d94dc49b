//! Router assembly for the leaddesk HTTP API.
//!
//! [`build_router`] wires the handlers with tracing and the CORS
//! response-header layer.
//!
//! CORS is deliberately NOT `tower_http::cors::CorsLayer`: that layer
//! answers every OPTIONS request itself with 200, while this API's contract
//! is a 204 preflight. The explicit [`handlers::leads::preflight`] handler
//! owns the preflight response and `SetResponseHeaderLayer` attaches
//! `Access-Control-Allow-Origin` to simple responses.

use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// `/api/leads` serves GET and OPTIONS; anything else falls through to the
/// 405 handler so the `Allow` header lists exactly the supported methods.
pub fn build_router(state: AppState) -> Router {
    let allow_origin = SetResponseHeaderLayer::if_not_present(
        axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
        state.allowed_origin.clone(),
    );

    Router::new()
        .route(
            "/api/leads",
            get(handlers::leads::list_leads)
                .options(handlers::leads::preflight)
                .fallback(handlers::leads::method_not_allowed),
        )
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(allow_origin)
        .with_state(state)
}
