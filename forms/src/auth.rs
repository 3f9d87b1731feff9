//! Sign-in / sign-up form fields and validation.
//!
//! DESIGN
//! ======
//! The modal edits one flat [`AuthFields`] record whatever the mode, but
//! validation produces a tagged [`AuthInput`], so a sign-in request can never
//! carry sign-up fields and a sign-up request can never miss them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::contact::{looks_like_email, trimmed_len};
use crate::error::ValidationError;
use crate::status::Form;

const MIN_NAME_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 6;

/// Delay between a successful auth reply and closing the modal.
pub const AUTH_SUCCESS_DELAY: Duration = Duration::from_millis(1500);

/// Generic fallback when an auth endpoint declines without an `error`.
pub const AUTH_FALLBACK_MESSAGE: &str = "Authentication failed. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    /// Path of the endpoint handling this mode.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::SignIn => "/api/auth/signin",
            Self::SignUp => "/api/auth/signup",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome back!",
            Self::SignUp => "Account created successfully!",
        }
    }
}

/// Raw modal fields. `name` and `confirm_password` only matter for sign-up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFields {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Field selector for input handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl AuthField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

impl AuthFields {
    #[must_use]
    pub fn new(mode: AuthMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn set(&mut self, field: AuthField, value: String) {
        match field {
            AuthField::Name => self.name = value,
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = value,
            AuthField::ConfirmPassword => self.confirm_password = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Check fields in priority order: email, password length, then for
    /// sign-up the name and the password confirmation.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<AuthInput, ValidationError> {
        if !looks_like_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS || self.password.trim().is_empty() {
            return Err(ValidationError::PasswordTooShort);
        }
        match self.mode {
            AuthMode::SignIn => Ok(AuthInput::SignIn(SignInInput {
                email: self.email.clone(),
                password: self.password.clone(),
            })),
            AuthMode::SignUp => {
                if trimmed_len(&self.name) < MIN_NAME_CHARS {
                    return Err(ValidationError::NameTooShort);
                }
                if self.password != self.confirm_password {
                    return Err(ValidationError::PasswordMismatch);
                }
                Ok(AuthInput::SignUp(SignUpInput {
                    name: self.name.clone(),
                    email: self.email.clone(),
                    password: self.password.clone(),
                    confirm_password: self.confirm_password.clone(),
                }))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validated auth request. Serializes to the bare JSON body of its endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthInput {
    SignIn(SignInInput),
    SignUp(SignUpInput),
}

impl AuthInput {
    #[must_use]
    pub fn mode(&self) -> AuthMode {
        match self {
            Self::SignIn(_) => AuthMode::SignIn,
            Self::SignUp(_) => AuthMode::SignUp,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        self.mode().endpoint()
    }
}

impl Form for AuthFields {
    type Input = AuthInput;

    fn validate(&self) -> Result<Self::Input, ValidationError> {
        AuthFields::validate(self)
    }

    // Fields stay filled in until the modal closes.
    fn accepted(&mut self, input: &Self::Input) -> String {
        input.mode().success_message().to_owned()
    }
}
