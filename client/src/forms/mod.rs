//! Client-side form validation.
//!
//! DESIGN
//! ======
//! Each form is a plain struct of raw input strings plus a field enum. Rules
//! run in declaration order and the first failing rule's message becomes the
//! field error, so a field never shows more than one message at a time.
//! Validation failures stay local and never reach the network.

pub mod login;
pub mod register;
pub mod rules;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::collections::BTreeMap;

/// A form whose raw input strings are addressed by a field enum.
pub trait FormModel {
    type Field: Ord + Copy;

    fn value(&self, field: Self::Field) -> &str;
    fn set(&mut self, field: Self::Field, value: String);
}

/// Field-scoped validation messages keyed by a form's field enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self { errors: BTreeMap::new() }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
