//! Router assembly shared by the binary and the integration tests.

use crate::auth::middleware::{session_gate, AppState};
use crate::config::Config;
use crate::middleware::{security_headers, SecurityHeaders};
use crate::routes;
use axum::{extract::DefaultBodyLimit, http::header::InvalidHeaderValue, middleware, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Build the full application:
/// - admin session API routes
/// - static file serving (fallback)
/// - session gate over the admin prefixes
/// - security headers on every response, outermost so redirects carry them
pub fn build_app(config: Config) -> Result<Router, InvalidHeaderValue> {
    let headers = Arc::new(SecurityHeaders::new(&config.analytics_domain)?);
    let static_files = ServeDir::new(&config.static_dir);
    let body_limit = config.max_body_bytes;

    let state = AppState {
        config: Arc::new(config),
    };

    // CorsLayer::new() with no allowed origins rejects all CORS preflight requests.
    let app = routes::api_router()
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::new())
        .layer(middleware::from_fn_with_state(state.clone(), session_gate))
        .layer(middleware::from_fn_with_state(headers, security_headers))
        .with_state(state);

    Ok(app)
}
