//! Request path classification for the session gate.

use percent_encoding::percent_decode_str;

/// Login page the gate redirects to.
pub const LOGIN_PAGE: &str = "/admin/login";
pub const LOGIN_API: &str = "/api/admin/login";
pub const LOGOUT_API: &str = "/api/admin/logout";
pub const CHECK_AUTH_API: &str = "/api/admin/check-auth";

const ADMIN_PREFIXES: [&str; 2] = ["/admin", "/api/admin"];

/// How the gate treats a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Outside the admin prefixes.
    Public,
    /// The login page and anything beneath it.
    LoginPage,
    LoginApi,
    /// Logout and check-auth, which answer unauthenticated callers themselves.
    SessionApi,
    /// Requires a valid session cookie.
    Protected,
}

/// Classify a request path. Prefixes match on whole segments, so
/// `/administrator` is public while `/admin/` and `/admin/posts` are not.
pub fn classify(path: &str) -> PathClass {
    if under(path, LOGIN_PAGE) {
        return PathClass::LoginPage;
    }
    if path == LOGIN_API {
        return PathClass::LoginApi;
    }
    if path == LOGOUT_API || path == CHECK_AUTH_API {
        return PathClass::SessionApi;
    }
    if ADMIN_PREFIXES.iter().any(|prefix| under(path, prefix)) {
        return PathClass::Protected;
    }
    PathClass::Public
}

/// Classify a raw request path the way the static file server will resolve it.
///
/// The path is percent-decoded and its empty and `.` segments dropped before
/// classification, so `//admin/`, `/./admin/` and `/%61dmin/` all count as
/// `/admin/`. Paths that cannot be normalized (`..` segments, backslashes,
/// NUL bytes, invalid UTF-8) are treated as protected.
pub fn classify_request_path(raw: &str) -> PathClass {
    match normalize(raw) {
        Some(path) => classify(&path),
        None => PathClass::Protected,
    }
}

/// Canonical form of a request path: decoded, lowercased, with `/`-joined
/// non-empty segments. Lowercasing keeps case-insensitive file systems from
/// serving `/Admin/` past the gate.
pub fn normalize(raw: &str) -> Option<String> {
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    if decoded.contains(['\\', '\0']) {
        return None;
    }

    let mut segments = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            s => segments.push(s),
        }
    }

    Some(format!("/{}", segments.join("/")).to_ascii_lowercase())
}

fn under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
