use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_SESSION_TOKEN: &str = "admin-session-token";

/// Session cookie lifetime issued on login (7 days).
pub const SESSION_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Clone)]
pub struct Config {
    // Admin identity
    pub admin_username: String,
    pub admin_password: String,
    pub session_token: String,

    // Deployment
    pub production: bool,

    // Server
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,

    // Headers
    pub analytics_domain: String,

    // Limits
    pub max_body_bytes: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"[REDACTED]")
            .field("session_token", &"[REDACTED]")
            .field("production", &self.production)
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .field("analytics_domain", &self.analytics_domain)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Attempt to load .env file, but don't fail if it doesn't exist
        let _ = dotenvy::dotenv();

        let production = env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let admin_username = env_or_fallback("ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME, production)?;
        let admin_password = env_or_fallback("ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD, production)?;
        let session_token =
            env_or_fallback("ADMIN_SESSION_TOKEN", DEFAULT_SESSION_TOKEN, production)?;

        // The token is written verbatim into Set-Cookie
        if !is_cookie_value(&session_token) {
            return Err(ConfigError::InvalidValue(
                "ADMIN_SESSION_TOKEN".to_string(),
                "may only contain visible ASCII characters other than space, '\"', ',', ';' and '\\'"
                    .to_string(),
            ));
        }

        // Server
        let bind_addr_str = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_addr = bind_addr_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::ParseError("BIND_ADDR".to_string(), e.to_string()))?;

        let static_dir = PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()));

        // Headers
        let analytics_domain =
            env::var("ANALYTICS_DOMAIN").unwrap_or_else(|_| "va.vercel-scripts.com".to_string());
        if analytics_domain.is_empty()
            || !analytics_domain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        {
            return Err(ConfigError::InvalidValue(
                "ANALYTICS_DOMAIN".to_string(),
                "must be a hostname".to_string(),
            ));
        }

        // Limits
        let max_body_bytes = parse_env_or_default("MAX_BODY_BYTES", 16_384)?;

        Ok(Config {
            admin_username,
            admin_password,
            session_token,
            production,
            bind_addr,
            static_dir,
            analytics_domain,
            max_body_bytes,
        })
    }
}

/// Read a required-but-defaulted variable. Empty values are rejected so an
/// accidental `ADMIN_PASSWORD=` never turns into an empty credential.
fn env_or_fallback(key: &str, fallback: &str, production: bool) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(val) if val.is_empty() => Err(ConfigError::InvalidValue(
            key.to_string(),
            "cannot be empty".to_string(),
        )),
        Ok(val) => Ok(val),
        Err(_) => {
            if production {
                tracing::warn!(var = key, "Using insecure built-in default in production");
            }
            Ok(fallback.to_string())
        }
    }
}

/// RFC 6265 cookie-octet check.
fn is_cookie_value(value: &str) -> bool {
    value.bytes().all(|b| {
        matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
    })
}

/// Helper function to parse environment variable with a default value
fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(key.to_string(), format!("{}: {}", e, val))),
        Err(_) => Ok(default),
    }
}
