use crate::error::{FormError, HttpError};
use crate::requests::Credentials;

pub const LOGIN_ERROR: &str = "Invalid username or password.";
pub const REGISTER_ERROR: &str = "An error occurred. Please try again.";
pub const REGISTER_SUCCESS: &str = "Registration successful! You can now log in.";

/// Username/password form shared by the login and registration pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CredentialsForm {
    username: String,
    password: String,
    error: Option<String>,
    submitting: bool,
}

impl CredentialsForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_username(&mut self, value: &str) {
        self.username = value.to_string();
    }

    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_string();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn prepare(&mut self) -> Option<Credentials> {
        self.error = None;
        let username = self.username.trim();
        let missing = if username.is_empty() {
            Some(FormError::Required("Username"))
        } else if self.password.is_empty() {
            Some(FormError::Required("Password"))
        } else {
            None
        };
        if let Some(err) = missing {
            self.error = Some(err.to_string());
            return None;
        }
        self.submitting = true;
        Some(Credentials {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }

    /// Returns the session token on success.
    pub fn finish_login(&mut self, result: Result<String, HttpError>) -> Option<String> {
        self.finish(result, LOGIN_ERROR)
    }

    /// Returns the confirmation text on success.
    pub fn finish_register(&mut self, result: Result<(), HttpError>) -> Option<&'static str> {
        self.finish(result, REGISTER_ERROR).map(|_| REGISTER_SUCCESS)
    }

    fn finish<T>(&mut self, result: Result<T, HttpError>, fallback: &str) -> Option<T> {
        self.submitting = false;
        match result {
            Ok(value) => {
                *self = Self::new();
                Some(value)
            }
            Err(err) => {
                self.error = Some(err.user_message(fallback));
                None
            }
        }
    }
}
