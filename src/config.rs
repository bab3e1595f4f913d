//! Backend configuration parsed from environment variables.
//!
//! The backend address is opaque to the core: base URL and port are joined
//! into the request prefix and nothing else is checked.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost";
pub const DEFAULT_BACKEND_PORT: &str = "3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// How a login submission is confirmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginPolicy {
    /// Any login submission is accepted and captured into the session.
    #[default]
    Trust,
    /// Credentials are checked with `POST /login` before the session is written.
    Verify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for RequestTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub port: String,
    pub login_policy: LoginPolicy,
    pub timeouts: RequestTimeouts,
}

impl BackendConfig {
    /// Config pointing at `base_url:port` with default policy and timeouts.
    #[must_use]
    pub fn new(base_url: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            port: port.into(),
            login_policy: LoginPolicy::default(),
            timeouts: RequestTimeouts::default(),
        }
    }

    /// Build typed backend config from environment variables.
    ///
    /// Optional:
    /// - `BACKEND_URL`: default `http://localhost`
    /// - `BACKEND_PORT`: default `3000`
    /// - `VERIFY_LOGIN`: boolean, default false
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same parsing as [`BackendConfig::from_env`] over an arbitrary lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        let port = lookup("BACKEND_PORT").unwrap_or_else(|| DEFAULT_BACKEND_PORT.to_owned());

        let login_policy = match lookup("VERIFY_LOGIN").as_deref().and_then(parse_bool) {
            Some(true) => LoginPolicy::Verify,
            _ => LoginPolicy::Trust,
        };
        let timeouts = RequestTimeouts {
            request_secs: parse_u64(lookup("BACKEND_REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("BACKEND_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Self { login_policy, timeouts, ..Self::new(base_url, port) }
    }

    /// Request prefix shared by every backend endpoint, e.g. `http://localhost:3000`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.base_url, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
