//! Login form model.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::{FieldErrors, FormModel};
use super::register::EMAIL_RULES;
use super::rules::{Rule, first_violation};
use crate::net::types::LoginRequest;

const PASSWORD_RULES: &[Rule] = &[Rule::Required("Please enter your password")];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl FormModel for LoginForm {
    type Field = LoginField;

    fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }
}

impl LoginForm {
    /// Clear the password after a rejected attempt, keeping the email.
    pub fn clear_password(&mut self) {
        self.password.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors<LoginField>> {
        let mut errors = FieldErrors::new();
        if let Some(message) = first_violation(&self.email, EMAIL_RULES) {
            errors.set(LoginField::Email, message);
        }
        if let Some(message) = first_violation(&self.password, PASSWORD_RULES) {
            errors.set(LoginField::Password, message);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginRequest { email: self.email.clone(), password: self.password.clone() })
    }
}
