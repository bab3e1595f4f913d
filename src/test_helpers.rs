//! Test doubles shared by the unit tests.

use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use crate::net::{BackendApi, LoginRequest, LoginResult, RegisterRequest, RegistrationResult};
use crate::shell::{Destination, Notification, ViewShell};

// =========================================================================
// MockBackend
// =========================================================================

/// Scripted backend. Results are handed out in order; once the script runs
/// out every call succeeds. With a gate, each call waits for one permit
/// before answering.
#[derive(Default)]
pub struct MockBackend {
    register_results: Mutex<Vec<RegistrationResult>>,
    login_results: Mutex<Vec<LoginResult>>,
    pub register_calls: Mutex<Vec<RegisterRequest>>,
    pub login_calls: Mutex<Vec<LoginRequest>>,
    gate: Option<Arc<Notify>>,
}

impl MockBackend {
    pub fn registering(results: Vec<RegistrationResult>) -> Self {
        Self { register_results: Mutex::new(results), ..Self::default() }
    }

    pub fn logging_in(results: Vec<LoginResult>) -> Self {
        Self { login_results: Mutex::new(results), ..Self::default() }
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn register_count(&self) -> usize {
        self.register_calls.lock().unwrap().len()
    }

    pub fn login_count(&self) -> usize {
        self.login_calls.lock().unwrap().len()
    }

    async fn wait_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait::async_trait]
impl BackendApi for MockBackend {
    async fn register(&self, payload: &RegisterRequest) -> RegistrationResult {
        self.register_calls.lock().unwrap().push(payload.clone());
        self.wait_gate().await;
        let mut results = self.register_results.lock().unwrap();
        if results.is_empty() { RegistrationResult::Created } else { results.remove(0) }
    }

    async fn login(&self, payload: &LoginRequest) -> LoginResult {
        self.login_calls.lock().unwrap().push(payload.clone());
        self.wait_gate().await;
        let mut results = self.login_results.lock().unwrap();
        if results.is_empty() { LoginResult::Accepted } else { results.remove(0) }
    }
}

// =========================================================================
// RecordingShell
// =========================================================================

#[derive(Default)]
pub struct RecordingShell {
    pub navigations: Mutex<Vec<Destination>>,
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingShell {
    pub fn navigations(&self) -> Vec<Destination> {
        self.navigations.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl ViewShell for RecordingShell {
    fn navigate(&self, destination: Destination) {
        self.navigations.lock().unwrap().push(destination);
    }

    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}
