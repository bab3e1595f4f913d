//! # portal
//!
//! Client-side core of the portal web application: the process-wide session
//! store, the registration/login network client, and the dual-mode auth form
//! controller that ties them together.
//!
//! Screens are rendered by a view shell that implements [`shell::ViewShell`].
//! The `portal` binary ships a terminal shell; other front ends plug in the
//! same way.

pub mod config;
pub mod form;
pub mod net;
pub mod pages;
pub mod session;
pub mod shell;
pub mod state;

#[cfg(test)]
pub(crate) mod test_helpers;
