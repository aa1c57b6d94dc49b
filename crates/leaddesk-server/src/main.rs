//! Binary entrypoint for the leaddesk HTTP server.
//!
//! Reads configuration from environment variables:
//! - `LEADDESK_PORT`: Server listen port (default: "3000")
//! - `LEADDESK_SEED_PATH`: JSON lead fixture path (default: built-in seed)
//! - `LEADDESK_ALLOWED_ORIGIN`: CORS origin (default: the front end's
//!   deployed origin)

use axum::http::HeaderValue;
use leaddesk_core::seed;
use leaddesk_server::router::build_router;
use leaddesk_server::state::{AppState, DEFAULT_ALLOWED_ORIGIN};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("LEADDESK_PORT")
        .unwrap_or_else(|_| "3000".to_string());
    let allowed_origin = std::env::var("LEADDESK_ALLOWED_ORIGIN")
        .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());
    let allowed_origin = HeaderValue::from_str(&allowed_origin)
        .expect("LEADDESK_ALLOWED_ORIGIN is not a valid header value");

    let leads = match std::env::var("LEADDESK_SEED_PATH") {
        Ok(path) => {
            let leads = seed::from_json_file(&path)
                .expect("failed to load lead seed file");
            tracing::info!("loaded {} leads from {}", leads.len(), path);
            leads
        }
        Err(_) => {
            let leads = seed::builtin();
            tracing::info!("loaded {} leads from the built-in seed", leads.len());
            leads
        }
    };

    let state = AppState::new(leads, allowed_origin);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("leaddesk server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
