//! Shared state and the admin session gate.

use crate::auth::path::{classify_request_path, PathClass, LOGIN_PAGE};
use crate::auth::session::is_authenticated;
use crate::config::Config;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Request interceptor guarding the admin prefixes.
///
/// Protected paths without a cookie matching the configured session token
/// are redirected to the login page; everything else is forwarded as is.
pub async fn session_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    if classify_request_path(path) == PathClass::Protected
        && !is_authenticated(&jar, &state.config)
    {
        tracing::debug!(action = "gate_redirect", path = %path, "Unauthenticated admin request");
        return Redirect::temporary(LOGIN_PAGE).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            config: Arc::new(Config {
                admin_username: "admin".to_string(),
                admin_password: "hunter2".to_string(),
                session_token: "tok-123".to_string(),
                production: false,
                bind_addr: "127.0.0.1:0".parse().unwrap(),
                static_dir: PathBuf::from("public"),
                analytics_domain: "va.vercel-scripts.com".to_string(),
                max_body_bytes: 16_384,
            }),
        }
    }

    fn app() -> Router {
        let state = test_state();
        Router::new()
            .route("/", get(|| async { "home" }))
            .route("/admin", get(|| async { "dashboard" }))
            .route("/admin/posts", get(|| async { "posts" }))
            .route("/admin/login", get(|| async { "login" }))
            .route("/api/admin/check-auth", get(|| async { "check" }))
            .layer(middleware::from_fn_with_state(state.clone(), session_gate))
            .with_state(state)
    }

    async fn get_with_cookie(uri: &str, cookie: Option<&str>) -> axum::response::Response {
        let mut builder = Request::builder().uri(uri);
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, c);
        }
        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    fn assert_redirects_to_login(response: &axum::response::Response) {
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/admin/login");
    }

    #[tokio::test]
    async fn test_missing_cookie_redirects() {
        assert_redirects_to_login(&get_with_cookie("/admin", None).await);
        assert_redirects_to_login(&get_with_cookie("/admin/posts", None).await);
    }

    #[tokio::test]
    async fn test_wrong_or_empty_cookie_redirects() {
        for cookie in [
            "admin-session=",
            "admin-session=wrong",
            "admin-session=tok-12",
            "admin-session=tok-123x",
            "session=tok-123",
        ] {
            let response = get_with_cookie("/admin/posts", Some(cookie)).await;
            assert_redirects_to_login(&response);
        }
    }

    #[tokio::test]
    async fn test_valid_cookie_passes() {
        let response = get_with_cookie("/admin/posts", Some("admin-session=tok-123")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, "posts");
    }

    #[tokio::test]
    async fn test_unprotected_paths_pass_without_cookie() {
        for uri in ["/", "/admin/login", "/api/admin/check-auth"] {
            let response = get_with_cookie(uri, None).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_non_canonical_admin_paths_redirect() {
        for uri in ["//admin/posts", "/./admin/posts", "/%61dmin/posts", "/ADMIN"] {
            assert_redirects_to_login(&get_with_cookie(uri, None).await);
        }
    }

    #[tokio::test]
    async fn test_unrouted_protected_path_still_redirects() {
        // The gate runs before routing, so unknown admin paths never 404 for
        // unauthenticated callers.
        assert_redirects_to_login(&get_with_cookie("/admin/does-not-exist", None).await);
    }
}
