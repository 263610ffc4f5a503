//! Session cookie issuance and verification.

use crate::config::{Config, SESSION_MAX_AGE_SECS};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use time::Duration;

/// Cookie name carrying the admin session token.
pub const SESSION_COOKIE: &str = "admin-session";

/// `Set-Cookie` value issued on successful login.
pub fn session_cookie(config: &Config) -> String {
    build_cookie(&config.session_token, SESSION_MAX_AGE_SECS, config.production)
}

/// `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie(config: &Config) -> String {
    build_cookie("", 0, config.production)
}

fn build_cookie(value: &str, max_age_secs: u64, secure: bool) -> String {
    Cookie::build((SESSION_COOKIE, value.to_string()))
        .path("/")
        .max_age(Duration::seconds(max_age_secs as i64))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
        .to_string()
}

/// Whether the request carries the configured session token.
///
/// Plain byte equality: a missing cookie and an empty or mismatched value
/// are all unauthenticated.
pub fn is_authenticated(jar: &CookieJar, config: &Config) -> bool {
    jar.get(SESSION_COOKIE)
        .is_some_and(|cookie| cookie.value() == config.session_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, HeaderValue};
    use std::path::PathBuf;

    fn test_config(production: bool) -> Config {
        Config {
            admin_username: "admin".to_string(),
            admin_password: "hunter2".to_string(),
            session_token: "tok-123".to_string(),
            production,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            static_dir: PathBuf::from("public"),
            analytics_domain: "va.vercel-scripts.com".to_string(),
            max_body_bytes: 16_384,
        }
    }

    fn jar_with(cookie_header: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie_header).unwrap());
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie(&test_config(false));
        assert!(cookie.starts_with("admin-session=tok-123;"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_secure_only_in_production() {
        for cookie in [
            session_cookie(&test_config(true)),
            clear_session_cookie(&test_config(true)),
        ] {
            assert!(cookie.split("; ").any(|attr| attr == "Secure"), "{}", cookie);
        }
    }

    #[test]
    fn test_clear_cookie() {
        let cookie = clear_session_cookie(&test_config(false));
        assert!(cookie.starts_with("admin-session=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Path=/"));
    }

    #[test]
    fn test_is_authenticated() {
        let config = test_config(false);

        assert!(is_authenticated(&jar_with("admin-session=tok-123"), &config));
        assert!(is_authenticated(
            &jar_with("theme=dark; admin-session=tok-123"),
            &config
        ));

        assert!(!is_authenticated(&CookieJar::new(), &config));
        assert!(!is_authenticated(&jar_with("admin-session="), &config));
        assert!(!is_authenticated(&jar_with("admin-session=tok-1234"), &config));
        assert!(!is_authenticated(&jar_with("admin-session=TOK-123"), &config));
        assert!(!is_authenticated(&jar_with("other=tok-123"), &config));
    }
}
