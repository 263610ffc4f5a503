//! Request and response models for the admin API.

use crate::error::FieldError;
use serde::Serialize;
use serde_json::Value;

/// Login credentials submitted to `POST /api/admin/login`.
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl LoginRequest {
    /// Check a parsed JSON body against the login schema.
    ///
    /// Both fields must be non-empty strings. Every failing field is
    /// reported, `username` before `password`.
    pub fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();
        let username = required_string(body, "username", &mut errors);
        let password = required_string(body, "password", &mut errors);

        match (username, password) {
            (Some(username), Some(password)) if errors.is_empty() => {
                Ok(LoginRequest { username, password })
            }
            _ => Err(errors),
        }
    }
}

fn required_string(body: &Value, field: &'static str, errors: &mut Vec<FieldError>) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError {
                field,
                message: format!("{} is required", field),
            });
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(FieldError {
                field,
                message: format!("{} is required", field),
            });
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError {
                field,
                message: format!("{} must be a string", field),
            });
            None
        }
    }
}

/// Body of successful login and logout responses.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Body of `GET /api/admin/check-auth`.
#[derive(Debug, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
}
