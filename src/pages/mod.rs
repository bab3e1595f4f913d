//! Terminal renditions of the application screens.
//!
//! DESIGN
//! ======
//! Each page is a pure `render_*` function returning text so the binary can
//! print it and tests can inspect it. `TerminalShell` is the [`ViewShell`]
//! the binary hands to the auth form: it tracks the current route and prints
//! notifications as they arrive.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod home;
pub mod login;
pub mod navbar;

use std::sync::{Mutex, PoisonError};

use crate::shell::{Destination, Notification, Severity, ViewShell};

/// Routable screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Login,
    Contact,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Contact => "/contact",
        }
    }

    /// Accepts paths (`/login`) as well as bare names (`login`, `home`).
    #[must_use]
    pub fn from_path(raw: &str) -> Option<Self> {
        match raw.trim().trim_start_matches('/').to_ascii_lowercase().as_str() {
            "" | "home" => Some(Self::Home),
            "login" => Some(Self::Login),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Landing => Self::Home,
            Destination::Login => Self::Login,
        }
    }
}

/// The contact page belongs to another team; only its route exists here.
#[must_use]
pub fn render_contact() -> String {
    "Contact\n\nThis page is not available in the terminal client.".to_owned()
}

/// Prefix used when printing a notification.
#[must_use]
pub fn format_notification(notification: &Notification) -> String {
    let marker = match notification.severity {
        Severity::Success => "[ok]",
        Severity::Error => "[error]",
    };
    format!("{marker} {}", notification.message)
}

// =============================================================================
// TERMINAL SHELL
// =============================================================================

#[derive(Debug, Default)]
pub struct TerminalShell {
    route: Mutex<Route>,
}

impl TerminalShell {
    #[must_use]
    pub fn new(route: Route) -> Self {
        Self { route: Mutex::new(route) }
    }

    #[must_use]
    pub fn route(&self) -> Route {
        *self.route.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn go(&self, route: Route) {
        tracing::debug!(path = route.path(), "route changed");
        *self.route.lock().unwrap_or_else(PoisonError::into_inner) = route;
    }
}

impl ViewShell for TerminalShell {
    fn navigate(&self, destination: Destination) {
        self.go(destination.into());
    }

    fn notify(&self, notification: Notification) {
        println!("{}", format_notification(&notification));
    }
}
