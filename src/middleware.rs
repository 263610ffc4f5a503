//! Site-wide security headers middleware.

use axum::{
    extract::{Request, State},
    http::{header::InvalidHeaderValue, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Header values stamped onto every response.
///
/// Built once at startup because the Content-Security-Policy embeds the
/// configured analytics domain.
#[derive(Debug, Clone)]
pub struct SecurityHeaders {
    content_security_policy: HeaderValue,
}

impl SecurityHeaders {
    pub fn new(analytics_domain: &str) -> Result<Self, InvalidHeaderValue> {
        let csp = format!(
            "default-src 'self'; \
             script-src 'self' 'unsafe-inline' 'unsafe-eval' https://{analytics_domain}; \
             style-src 'self' 'unsafe-inline'; \
             img-src 'self' data: https:; \
             font-src 'self' data:; \
             connect-src 'self' https://{analytics_domain}; \
             frame-ancestors 'none'"
        );

        Ok(SecurityHeaders {
            content_security_policy: HeaderValue::from_str(&csp)?,
        })
    }
}

/// Middleware that adds the fixed security header set to all responses,
/// including redirects issued by inner layers and error responses.
///
/// ```rust,no_run
/// use axum::{middleware, Router};
/// use folio_admin::middleware::{security_headers, SecurityHeaders};
/// use std::sync::Arc;
///
/// let headers = Arc::new(SecurityHeaders::new("va.vercel-scripts.com").unwrap());
/// let app: Router = Router::new()
///     .layer(middleware::from_fn_with_state(headers, security_headers));
/// ```
pub async fn security_headers(
    State(config): State<Arc<SecurityHeaders>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert("x-xss-protection", HeaderValue::from_static("1; mode=block"));
    headers.insert(
        "x-content-type-options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        "referrer-policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        "content-security-policy",
        config.content_security_policy.clone(),
    );
    headers.insert(
        "permissions-policy",
        HeaderValue::from_static(
            "camera=(), microphone=(), geolocation=(), interest-cohort=()",
        ),
    );

    response
}
