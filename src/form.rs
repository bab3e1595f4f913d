//! Auth form controller: the login/registration state machine.
//!
//! DESIGN
//! ======
//! One controller per mounted form. Form state sits behind a mutex that is
//! only held between awaits, never across the backend call, so the view can
//! keep editing fields while a registration is in flight.
//!
//! The `Submitting` state doubles as the re-entrancy guard: a second submit
//! while one is pending is refused before any request is issued. Guards are
//! per controller, not global.
//!
//! Login is unauthenticated by default (`LoginPolicy::Trust`): the captured
//! email and password are written to the session without a backend round
//! trip. `LoginPolicy::Verify` adds the `POST /login` check.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::LoginPolicy;
use crate::net::{BackendApi, LoginResult, RegistrationResult};
use crate::session::{SessionStore, User};
use crate::shell::{Destination, Notification, ViewShell};
use crate::state::auth::{AuthMode, Field, FormError, FormState, Submission};

pub const LOGIN_SUCCESS: &str = "Logged in";
pub const REGISTER_SUCCESS: &str = "Account created! You can log in now.";
pub const TRY_AGAIN_LATER: &str = "Something went wrong, please try again later.";

const UNREACHABLE_REASON: &str = "backend unreachable";

pub struct AuthForm<B, V> {
    state: Mutex<FormState>,
    active: AtomicBool,
    session: SessionStore,
    backend: B,
    shell: V,
    login_policy: LoginPolicy,
}

impl<B: BackendApi, V: ViewShell> AuthForm<B, V> {
    /// Controller in `Login` mode with an idle submission.
    #[must_use]
    pub fn new(session: SessionStore, backend: B, shell: V) -> Self {
        Self {
            state: Mutex::new(FormState::default()),
            active: AtomicBool::new(true),
            session,
            backend,
            shell,
            login_policy: LoginPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_login_policy(mut self, login_policy: LoginPolicy) -> Self {
        self.login_policy = login_policy;
        self
    }

    /// Copy of the current form state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> FormState {
        self.lock().clone()
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn shell(&self) -> &V {
        &self.shell
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Mark the form as unmounted. Pending results still settle the
    /// submission but no longer switch mode or navigate.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// # Errors
    ///
    /// Returns [`FormError::Busy`] while a submission is pending.
    pub fn switch_mode(&self, target: AuthMode) -> Result<(), FormError> {
        self.lock().switch_mode(target)
    }

    /// Returns false when the field is not part of the current form.
    pub fn set_field(&self, field: Field, value: impl Into<String>) -> bool {
        self.lock().set_field(field, value)
    }

    /// Submit the login form.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Busy`] while another submission is pending and
    /// [`FormError::WrongMode`] when the registration form is shown. Neither
    /// has side effects.
    pub async fn submit_login(&self) -> Result<LoginResult, FormError> {
        let verify = self.login_policy == LoginPolicy::Verify;
        let creds = {
            let mut state = self.lock();
            if state.is_submitting() {
                return Err(FormError::Busy);
            }
            state.require_mode(AuthMode::Login)?;
            if verify {
                state.begin_submission()?;
            }
            state.credentials()
        };

        if verify {
            let mut pending = PendingSubmission::new(&self.state);
            let outcome = self.backend.login(&creds).await;
            pending.disarm();

            match &outcome {
                LoginResult::Accepted => {}
                LoginResult::Rejected(message) => {
                    self.lock().submission = Submission::Failed(message.clone());
                    self.shell.notify(Notification::error(format!("Login failed: {message}")));
                    return Ok(outcome);
                }
                LoginResult::Unreachable => {
                    self.lock().submission = Submission::Failed(UNREACHABLE_REASON.to_owned());
                    self.shell.notify(Notification::error(TRY_AGAIN_LATER));
                    return Ok(outcome);
                }
            }
        }

        self.session.set_current_user(User::new(creds.email, creds.password));
        self.lock().submission = Submission::Succeeded;
        if self.is_active() {
            self.shell.navigate(Destination::Landing);
        }
        self.shell.notify(Notification::success(LOGIN_SUCCESS));
        tracing::info!(verified = verify, "login captured");
        Ok(LoginResult::Accepted)
    }

    /// Submit the registration form and wait for the backend's answer.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Busy`] while another submission is pending, in
    /// which case no request is sent, and [`FormError::WrongMode`] when the
    /// login form is shown.
    pub async fn submit_register(&self) -> Result<RegistrationResult, FormError> {
        let payload = {
            let mut state = self.lock();
            if state.is_submitting() {
                tracing::debug!("registration already in flight; ignoring submit");
                return Err(FormError::Busy);
            }
            state.require_mode(AuthMode::Register)?;
            state.begin_submission()?;
            state.registration_payload()
        };

        tracing::info!(email = %payload.email, "submitting registration");
        let mut pending = PendingSubmission::new(&self.state);
        let result = self.backend.register(&payload).await;
        pending.disarm();

        let active = self.is_active();
        {
            let mut state = self.lock();
            state.submission = match &result {
                RegistrationResult::Created => Submission::Succeeded,
                RegistrationResult::Rejected(message) => Submission::Failed(message.clone()),
                RegistrationResult::Unreachable => Submission::Failed(UNREACHABLE_REASON.to_owned()),
            };
            if active && result == RegistrationResult::Created {
                state.enter_mode(AuthMode::Login);
            }
        }

        match &result {
            RegistrationResult::Created => {
                self.shell.notify(Notification::success(REGISTER_SUCCESS));
                if active {
                    self.shell.navigate(Destination::Login);
                } else {
                    tracing::debug!("form inactive; skipping post-registration navigation");
                }
            }
            RegistrationResult::Rejected(message) => {
                self.shell.notify(Notification::error(format!("Registration failed: {message}")));
            }
            RegistrationResult::Unreachable => {
                self.shell.notify(Notification::error(TRY_AGAIN_LATER));
            }
        }
        Ok(result)
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Puts `Submitting` back to `Idle` if the submit future is dropped before
/// the backend answers.
struct PendingSubmission<'a> {
    state: &'a Mutex<FormState>,
    armed: bool,
}

impl<'a> PendingSubmission<'a> {
    fn new(state: &'a Mutex<FormState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.is_submitting() {
            tracing::debug!("submission dropped before completion");
            state.submission = Submission::Idle;
        }
    }
}
