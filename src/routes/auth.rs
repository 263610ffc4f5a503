//! Admin session endpoints.

use crate::auth::middleware::AppState;
use crate::auth::session::{clear_session_cookie, is_authenticated, session_cookie};
use crate::error::AppError;
use crate::models::{AuthStatus, LoginRequest, SessionResponse};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;

/// POST /api/admin/login — Exchange credentials for the session cookie
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    // Malformed JSON surfaces as an internal error, field problems as 400
    let value: serde_json::Value = serde_json::from_slice(&body)?;
    let req = LoginRequest::from_json(&value).map_err(AppError::Validation)?;

    let config = &state.config;
    if req.username != config.admin_username || req.password != config.admin_password {
        tracing::warn!(action = "login_failed", username = %req.username, "Invalid admin credentials");
        return Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    tracing::info!(action = "login_success", username = %req.username, "Admin logged in");

    Ok((
        [(header::SET_COOKIE, session_cookie(config))],
        Json(SessionResponse {
            success: true,
            message: "Login successful",
        }),
    ))
}

/// POST /api/admin/logout — Clear the session cookie
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    tracing::info!(action = "logout", "Admin session cleared");

    (
        [(header::SET_COOKIE, clear_session_cookie(&state.config))],
        Json(SessionResponse {
            success: true,
            message: "Logged out successfully",
        }),
    )
}

/// GET /api/admin/check-auth — Report whether the session cookie is valid
pub async fn check_auth(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let authenticated = is_authenticated(&jar, &state.config);
    let status = if authenticated {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };

    (status, Json(AuthStatus { authenticated }))
}
