//! Backend networking: wire types and the HTTP client.

pub mod api;
pub mod types;

pub use api::{ApiError, BackendApi, HttpBackend};
pub use types::{LoginRequest, LoginResult, RegisterRequest, RegistrationResult};
