#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{LoginRequest, RegisterRequest};

/// Errors returned by form transitions that are not allowed right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A submission is still waiting for its outcome.
    #[error("a submission is already in progress")]
    Busy,
    /// The submit action belongs to the other form.
    #[error("form is in {current:?} mode")]
    WrongMode { current: AuthMode },
}

/// Which of the two forms is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Lifecycle of the current form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Editable form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    Name,
    Surname,
}

impl Field {
    /// Name/Surname only exist on the registration form.
    #[must_use]
    pub fn applies_to(self, mode: AuthMode) -> bool {
        match self {
            Self::Email | Self::Password => true,
            Self::Name | Self::Surname => mode == AuthMode::Register,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Name => "name",
            Self::Surname => "surname",
        }
    }

    /// Parse a field name as typed by the user.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            "name" => Some(Self::Name),
            "surname" => Some(Self::Surname),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fields {
    pub email: String,
    pub password: String,
    pub name: String,
    pub surname: String,
}

/// Form state owned by one auth form controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub mode: AuthMode,
    pub fields: Fields,
    pub submission: Submission,
}

impl FormState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    /// Show the other form. Not allowed mid-submission.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Busy`] while a submission is pending.
    pub fn switch_mode(&mut self, target: AuthMode) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::Busy);
        }
        if self.mode == target {
            return Ok(());
        }
        self.enter_mode(target);
        self.submission = Submission::Idle;
        Ok(())
    }

    /// Change mode without touching the submission; leaving Register drops
    /// the registration-only inputs.
    pub(crate) fn enter_mode(&mut self, target: AuthMode) {
        if self.mode == AuthMode::Register && target != AuthMode::Register {
            self.fields.name.clear();
            self.fields.surname.clear();
        }
        self.mode = target;
    }

    /// Update one input. Returns false when the field is not on the current form.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if !field.applies_to(self.mode) {
            return false;
        }
        let slot = match field {
            Field::Email => &mut self.fields.email,
            Field::Password => &mut self.fields.password,
            Field::Name => &mut self.fields.name,
            Field::Surname => &mut self.fields.surname,
        };
        *slot = value.into();
        true
    }

    /// Enter `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Busy`] if a submission is already pending.
    pub fn begin_submission(&mut self) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::Busy);
        }
        self.submission = Submission::Submitting;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`FormError::WrongMode`] unless the form is in `expected` mode.
    pub fn require_mode(&self, expected: AuthMode) -> Result<(), FormError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(FormError::WrongMode { current: self.mode })
        }
    }

    #[must_use]
    pub fn registration_payload(&self) -> RegisterRequest {
        let f = &self.fields;
        RegisterRequest::from_form(&f.name, &f.surname, &f.email, &f.password)
    }

    #[must_use]
    pub fn credentials(&self) -> LoginRequest {
        LoginRequest { email: self.fields.email.clone(), password: self.fields.password.clone() }
    }

    /// Inputs the current form would refuse to submit: empty required fields
    /// and an email without a `local@domain` shape.
    ///
    /// This is the input-layer check; the controller submits regardless.
    #[must_use]
    pub fn missing_required(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.mode == AuthMode::Register {
            if self.fields.name.trim().is_empty() {
                missing.push(Field::Name);
            }
            if self.fields.surname.trim().is_empty() {
                missing.push(Field::Surname);
            }
        }
        if !looks_like_email(&self.fields.email) {
            missing.push(Field::Email);
        }
        if self.fields.password.is_empty() {
            missing.push(Field::Password);
        }
        missing
    }
}

fn looks_like_email(raw: &str) -> bool {
    let mut parts = raw.trim().split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}
