//! Capabilities the auth core needs from whatever renders the screens.

/// Screens the core can send the user to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Landing page shown after login.
    Landing,
    /// Login form shown after registration.
    Login,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Toast-style message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { severity: Severity::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }
}

/// Navigation and notification hooks implemented by the view layer.
///
/// Both calls are fire-and-forget; the core never waits on the shell.
pub trait ViewShell: Send + Sync {
    fn navigate(&self, destination: Destination);
    fn notify(&self, notification: Notification);
}
