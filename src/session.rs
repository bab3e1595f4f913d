//! Process-wide session store.
//!
//! DESIGN
//! ======
//! The store is an explicit handle created once at startup and cloned into
//! every consumer (form controller, screens). All clones share a single
//! `watch` channel, so a write is visible to every handle and subscriber as
//! soon as `set_current_user` returns. There is no logout: the identity lives
//! until the process exits.
//!
//! The captured password is kept as plain text. Consumers only see [`User`]
//! through this module, so a token-based session can replace it without
//! touching them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use tokio::sync::watch;

/// Identity captured by the last successful login. Empty strings mean
/// nobody is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub password: String,
}

impl User {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        !self.email.is_empty()
    }
}

/// Shared handle to the current session identity.
#[derive(Clone, Debug)]
pub struct SessionStore {
    tx: Arc<watch::Sender<User>>,
}

impl SessionStore {
    /// Empty session.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(User::default());
        Self { tx: Arc::new(tx) }
    }

    /// Current identity, or the empty user when no session exists.
    #[must_use]
    pub fn current_user(&self) -> User {
        self.tx.borrow().clone()
    }

    /// Replace the identity wholesale. No validation happens here.
    pub fn set_current_user(&self, user: User) {
        tracing::debug!(email = %user.email, "session user replaced");
        self.tx.send_replace(user);
    }

    /// Observe identity changes from a screen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<User> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
