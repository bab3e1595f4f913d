//! HTTP client for the account backend.
//!
//! ERROR HANDLING
//! ==============
//! Calls never return errors: transport failures become `Unreachable`,
//! non-2xx responses become `Rejected`. Only client construction can fail.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::types::{LoginRequest, LoginResult, RegisterRequest, RegistrationResult, rejection_message};
use crate::config::BackendConfig;

/// Errors produced while setting up the backend client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Account operations the form controller depends on.
#[async_trait::async_trait]
pub trait BackendApi: Send + Sync {
    /// Create a new account via `POST /register`.
    async fn register(&self, payload: &RegisterRequest) -> RegistrationResult;

    /// Check credentials via `POST /login`.
    async fn login(&self, payload: &LoginRequest) -> LoginResult;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpBackend {
    http: reqwest::Client,
    address: String,
}

impl HttpBackend {
    /// Build a client for the configured backend address.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, address: config.address() })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.address)
    }

    /// POST a JSON body. `Ok` carries the status and body text when the
    /// response did not succeed; `Err` means no response arrived.
    async fn post_json<T: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Option<(u16, Option<String>)>, reqwest::Error> {
        let url = self.endpoint(path);
        let response = self.http.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.ok();
            return Ok(Some((status.as_u16(), text)));
        }

        // Success is status-driven; the body is only inspected for diagnostics.
        match response.json::<serde_json::Value>().await {
            Ok(body) => tracing::debug!(%url, %body, "backend accepted request"),
            Err(e) => tracing::debug!(%url, error = %e, "backend success body was not JSON"),
        }
        Ok(None)
    }
}

#[async_trait::async_trait]
impl BackendApi for HttpBackend {
    async fn register(&self, payload: &RegisterRequest) -> RegistrationResult {
        match self.post_json("/register", payload).await {
            Ok(None) => RegistrationResult::Created,
            Ok(Some((status, body))) => {
                let message = rejection_message(status, body.as_deref());
                tracing::info!(status, %message, "registration rejected");
                RegistrationResult::Rejected(message)
            }
            Err(e) => {
                tracing::warn!(error = %e, address = %self.address, "registration request failed");
                RegistrationResult::Unreachable
            }
        }
    }

    async fn login(&self, payload: &LoginRequest) -> LoginResult {
        match self.post_json("/login", payload).await {
            Ok(None) => LoginResult::Accepted,
            Ok(Some((status, body))) => {
                let message = rejection_message(status, body.as_deref());
                tracing::info!(status, %message, "login rejected");
                LoginResult::Rejected(message)
            }
            Err(e) => {
                tracing::warn!(error = %e, address = %self.address, "login request failed");
                LoginResult::Unreachable
            }
        }
    }
}
