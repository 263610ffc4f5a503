//! API route handlers.

pub mod auth;

use crate::auth::middleware::AppState;
use crate::auth::path::{CHECK_AUTH_API, LOGIN_API, LOGOUT_API};
use axum::{routing::get, routing::post, Router};

/// Build the API router with all endpoints.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route(LOGIN_API, post(auth::login))
        .route(LOGOUT_API, post(auth::logout))
        .route(CHECK_AUTH_API, get(auth::check_auth))
}
