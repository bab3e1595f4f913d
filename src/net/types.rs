//! Wire types and outcome classification for backend calls.
//!
//! Outcomes are plain values: every failure mode of a call is folded into
//! one of the variants so callers never handle transport errors directly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role assigned to every self-registered account.
pub const DEFAULT_ROLE: &str = "user";
/// Placeholder phone number sent with every registration.
pub const PLACEHOLDER_PHONE: &str = "123456789";

// =============================================================================
// REQUESTS
// =============================================================================

/// Body of `POST /register`. Field order is the serialized key order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub phone: String,
}

impl RegisterRequest {
    /// Build a payload from user-entered fields plus the fixed role and phone.
    #[must_use]
    pub fn from_form(name: &str, surname: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.to_owned(),
            surname: surname.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            role: DEFAULT_ROLE.to_owned(),
            phone: PLACEHOLDER_PHONE.to_owned(),
        }
    }
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// =============================================================================
// OUTCOMES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationResult {
    /// 2xx from the backend, whatever the body looked like.
    Created,
    /// Non-2xx; carries the backend's text or the status code.
    Rejected(String),
    /// No response was received.
    Unreachable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginResult {
    Accepted,
    Rejected(String),
    Unreachable,
}

/// Message shown for a non-success response.
///
/// Prefers `message`, then `error`, from a JSON object body; falls back to
/// the raw body text, and to the status code when the body is empty.
#[must_use]
pub fn rejection_message(status: u16, body: Option<&str>) -> String {
    let text = body.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return status.to_string();
    }

    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(text) {
        let field = map
            .get("message")
            .and_then(serde_json::Value::as_str)
            .or_else(|| map.get("error").and_then(serde_json::Value::as_str));
        if let Some(message) = field.filter(|m| !m.trim().is_empty()) {
            return message.to_owned();
        }
    }

    text.to_owned()
}
