use regex::Regex;
use secrecy::ExposeSecret as _;
use std::sync::LazyLock;

use crate::{
    const_config::registration::REGISTRATION_PASSWORD_MIN_LENGTH, req_args::NewUserReqArgs,
};

use super::{FieldError, RegistrationError, RegistrationField};

fn email_pattern() -> &'static Regex {
    static RESULT: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("test below ensures this is valid")
    });
    &RESULT
}

/// Checks the registration payload before it is sent
///
/// Every failing field is reported, with the first rule it failed
pub fn validate_registration(args: &NewUserReqArgs) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if args.name.is_empty() {
        errors.push(FieldError::new(
            RegistrationField::Name,
            RegistrationError::NameRequired,
        ));
    }

    if args.email.is_empty() {
        errors.push(FieldError::new(
            RegistrationField::Email,
            RegistrationError::EmailRequired,
        ));
    } else if !email_pattern().is_match(&args.email) {
        errors.push(FieldError::new(
            RegistrationField::Email,
            RegistrationError::EmailInvalid,
        ));
    }

    let password = args.password.expose_secret();
    if let Some(err) = check_password(password) {
        errors.push(FieldError::new(RegistrationField::Password, err));
    }

    let confirmation = args.password_confirmation.expose_secret();
    let confirmation_err = check_password(confirmation).or_else(|| {
        (confirmation != password).then_some(RegistrationError::PasswordsDoNotMatch)
    });
    if let Some(err) = confirmation_err {
        errors.push(FieldError::new(RegistrationField::PasswordConfirmation, err));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_password(value: &str) -> Option<RegistrationError> {
    if value.is_empty() {
        Some(RegistrationError::PasswordRequired)
    } else if value.chars().count() < REGISTRATION_PASSWORD_MIN_LENGTH {
        Some(RegistrationError::PasswordTooShort {
            min: REGISTRATION_PASSWORD_MIN_LENGTH,
        })
    } else {
        None
    }
}
