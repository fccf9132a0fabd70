//! Registration form model and its validation rules.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::{FieldErrors, FormModel};
use super::rules::{
    Rule, first_violation, has_digit, has_lowercase, has_no_whitespace, has_symbol, has_uppercase, is_valid_email,
};
use crate::net::types::RegisterRequest;

pub const NAME_ERROR: &str = "Please enter your first name & last name";
pub const CONFIRM_PASSWORD_ERROR: &str = "Please confirm your password";

const USERNAME_RULES: &[Rule] = &[
    Rule::Required("Please enter your username"),
    Rule::MinLength(3, "Your username must have 3 characters"),
];

const FIRST_NAME_RULES: &[Rule] = &[
    Rule::Required("Please enter your first name"),
    Rule::MinLength(3, "Your first name must have 3 characters"),
];

const LAST_NAME_RULES: &[Rule] = &[
    Rule::Required("Please enter your last name"),
    Rule::MinLength(3, "Your last name must have 3 characters"),
];

pub(crate) const EMAIL_RULES: &[Rule] = &[
    Rule::Required("Please enter your email"),
    Rule::Check(is_valid_email, "Please provide a valid email"),
];

const PASSWORD_RULES: &[Rule] = &[
    Rule::Required("Please enter your password"),
    Rule::MinLength(8, "Your password must have 8 characters"),
    Rule::Check(has_no_whitespace, "Your password must not contain whitespace"),
    Rule::Check(has_uppercase, "Your password must have at least one uppercase character"),
    Rule::Check(has_lowercase, "Your password must have at least one lowercase character"),
    Rule::Check(has_digit, "Your password must have at least one digit"),
    Rule::Check(has_symbol, "Your password must have at least one special symbol"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrationField {
    Username,
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl RegistrationField {
    pub const ALL: [Self; 6] = [
        Self::Username,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
    ];

    fn rules(self) -> &'static [Rule] {
        match self {
            Self::Username => USERNAME_RULES,
            Self::FirstName => FIRST_NAME_RULES,
            Self::LastName => LAST_NAME_RULES,
            Self::Email => EMAIL_RULES,
            Self::Password => PASSWORD_RULES,
            Self::ConfirmPassword => &[],
        }
    }
}

/// Raw registration input as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormModel for RegistrationForm {
    type Field = RegistrationField;

    fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Username => &self.username,
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::Email => &self.email,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn set(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::Username => &mut self.username,
            RegistrationField::FirstName => &mut self.first_name,
            RegistrationField::LastName => &mut self.last_name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Password => &mut self.password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }
}

impl RegistrationForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Run every field rule, then the confirmation check.
    ///
    /// The confirmation mismatch is only reported once all field rules pass.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors<RegistrationField>> {
        let mut errors = FieldErrors::new();
        for field in RegistrationField::ALL {
            if let Some(message) = first_violation(self.value(field), field.rules()) {
                errors.set(field, message);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        if self.password != self.confirm_password {
            errors.set(RegistrationField::ConfirmPassword, CONFIRM_PASSWORD_ERROR);
            return Err(errors);
        }
        Ok(RegisterRequest {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }
}

/// The single message shown under the first/last name pair.
pub fn name_error(errors: &FieldErrors<RegistrationField>) -> Option<&'static str> {
    (errors.has(RegistrationField::FirstName) || errors.has(RegistrationField::LastName)).then_some(NAME_ERROR)
}
