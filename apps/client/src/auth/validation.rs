use crate::auth::models::RegisterRequest;
use crate::errors::AppError;

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const SHORT_PASSWORD: &str = "Password must be at least 6 characters long.";
pub const MISSING_FIELDS: &str = "Please fill in all fields.";

pub const MIN_PASSWORD_LEN: usize = 6;

/// Shape check only: `local@domain.tld`, no whitespace, exactly one `@`,
/// and a dot inside the domain with something on both sides.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Checks run before a login request is sent.
pub fn check_login(email: &str, password: &str) -> Result<(), AppError> {
    if !validate_email(email) {
        return Err(AppError::Validation(INVALID_EMAIL.to_string()));
    }
    if !validate_password(password) {
        return Err(AppError::Validation(SHORT_PASSWORD.to_string()));
    }
    Ok(())
}

/// Checks run before a registration request is sent.
pub fn check_registration(form: &RegisterRequest) -> Result<(), AppError> {
    let any_missing = [&form.fname, &form.lname, &form.email, &form.password]
        .iter()
        .any(|field| field.is_empty());
    if any_missing {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    }
    check_login(&form.email, &form.password)
}
