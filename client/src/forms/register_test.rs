use super::*;
use crate::forms::{FieldErrors, FormModel};

fn error_count(errors: &FieldErrors<RegistrationField>) -> usize {
    RegistrationField::ALL.into_iter().filter(|field| errors.has(*field)).count()
}

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        username: "ada".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Secret#123".to_owned(),
        confirm_password: "Secret#123".to_owned(),
    }
}

fn password_error(password: &str) -> Option<String> {
    let mut form = valid_form();
    form.password = password.to_owned();
    form.confirm_password = password.to_owned();
    form.validate()
        .err()
        .and_then(|errors| errors.get(RegistrationField::Password).map(str::to_owned))
}

// =============================================================
// Happy path
// =============================================================

#[test]
fn valid_form_builds_request() {
    let request = valid_form().validate().unwrap();
    assert_eq!(request.username, "ada");
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.last_name, "Lovelace");
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, "Secret#123");
    assert_eq!(request.confirm_password, "Secret#123");
}

// =============================================================
// Per-field rules
// =============================================================

#[test]
fn empty_form_reports_required_messages() {
    let errors = RegistrationForm::default().validate().unwrap_err();
    assert_eq!(errors.get(RegistrationField::Username), Some("Please enter your username"));
    assert_eq!(errors.get(RegistrationField::FirstName), Some("Please enter your first name"));
    assert_eq!(errors.get(RegistrationField::LastName), Some("Please enter your last name"));
    assert_eq!(errors.get(RegistrationField::Email), Some("Please enter your email"));
    assert_eq!(errors.get(RegistrationField::Password), Some("Please enter your password"));
    assert!(!errors.has(RegistrationField::ConfirmPassword));
}

#[test]
fn short_username_is_rejected() {
    let mut form = valid_form();
    form.username = "al".to_owned();
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(RegistrationField::Username), Some("Your username must have 3 characters"));
    assert_eq!(error_count(&errors), 1);
}

#[test]
fn username_length_follows_browser_units() {
    let mut form = valid_form();
    form.username = "a😀".to_owned();
    assert!(form.validate().is_ok());
}

#[test]
fn either_short_name_yields_combined_message() {
    let mut form = valid_form();
    form.last_name = "Li".to_owned();
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(RegistrationField::LastName), Some("Your last name must have 3 characters"));
    assert_eq!(name_error(&errors), Some(NAME_ERROR));

    let mut form = valid_form();
    form.first_name = String::new();
    let errors = form.validate().unwrap_err();
    assert_eq!(name_error(&errors), Some(NAME_ERROR));
}

#[test]
fn name_error_absent_when_names_valid() {
    let mut form = valid_form();
    form.username = String::new();
    let errors = form.validate().unwrap_err();
    assert_eq!(name_error(&errors), None);
}

#[test]
fn invalid_email_is_rejected() {
    let mut form = valid_form();
    form.email = "ada@example".to_owned();
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(RegistrationField::Email), Some("Please provide a valid email"));
}

#[test]
fn each_password_rule_reports_its_own_message() {
    let cases = [
        ("Sh#1a", "Your password must have 8 characters"),
        ("Secret #123", "Your password must not contain whitespace"),
        ("secret#123", "Your password must have at least one uppercase character"),
        ("SECRET#123", "Your password must have at least one lowercase character"),
        ("Secret#abc", "Your password must have at least one digit"),
        ("Secret1234", "Your password must have at least one special symbol"),
    ];
    for (password, expected) in cases {
        assert_eq!(password_error(password).as_deref(), Some(expected), "password {password:?}");
    }
}

#[test]
fn password_min_length_checked_before_character_classes() {
    assert_eq!(password_error("abc").as_deref(), Some("Your password must have 8 characters"));
}

#[test]
fn strong_password_passes() {
    assert_eq!(password_error("Tr0ub4dor&3"), None);
    assert_eq!(password_error("Rupee₹value9"), None);
}

// =============================================================
// Confirmation
// =============================================================

#[test]
fn confirm_mismatch_blocks_with_field_error() {
    let mut form = valid_form();
    form.confirm_password = "Secret#124".to_owned();
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(RegistrationField::ConfirmPassword), Some(CONFIRM_PASSWORD_ERROR));
    assert_eq!(error_count(&errors), 1);
}

#[test]
fn confirm_mismatch_not_reported_while_other_fields_fail() {
    let mut form = valid_form();
    form.username = String::new();
    form.confirm_password = "different".to_owned();
    let errors = form.validate().unwrap_err();
    assert!(errors.has(RegistrationField::Username));
    assert!(!errors.has(RegistrationField::ConfirmPassword));
}

// =============================================================
// Field access
// =============================================================

#[test]
fn set_and_value_address_the_same_slot() {
    let mut form = RegistrationForm::default();
    for field in RegistrationField::ALL {
        form.set(field, format!("{field:?}"));
    }
    for field in RegistrationField::ALL {
        assert_eq!(form.value(field), format!("{field:?}"));
    }
    form.reset();
    assert_eq!(form, RegistrationForm::default());
}
