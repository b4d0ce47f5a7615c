//! Client-side form validation.
//!
//! Pre-submission checks only; the backend remains the authority on
//! uniqueness and credentials. Messages are shown inline next to the
//! offending field.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Full name: required, at least 2 characters, no digits.
///
/// # Errors
///
/// Returns the inline message to display for the first failed rule.
pub fn validate_name(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Full name is required".to_owned());
    }
    if value.chars().any(|c| c.is_ascii_digit()) {
        return Err("Full name cannot contain digits.".to_owned());
    }
    if value.chars().count() < 2 {
        return Err("Min 2 characters".to_owned());
    }
    Ok(())
}

/// Email: required, `local@domain.tld` with an alphabetic TLD of 2+ chars.
///
/// # Errors
///
/// Returns the inline message to display for the first failed rule.
pub fn validate_email(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Email is required".to_owned());
    }
    let invalid = || Err("Invalid email format".to_owned());

    let Some((local, domain)) = value.split_once('@') else {
        return invalid();
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return invalid();
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return invalid();
    };
    if host.is_empty()
        || host.contains(char::is_whitespace)
        || host.contains('@')
        || tld.len() < 2
        || !tld.chars().all(|c| c.is_ascii_alphabetic())
    {
        return invalid();
    }
    Ok(())
}

/// Phone: required, exactly 10 ASCII digits.
///
/// # Errors
///
/// Returns the inline message to display for the first failed rule.
pub fn validate_phone(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Phone number is required".to_owned());
    }
    if value.len() != 10 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone number should be 10 digits long".to_owned());
    }
    Ok(())
}

/// Password: required, at least 6 characters.
///
/// # Errors
///
/// Returns the inline message to display for the first failed rule.
pub fn validate_password(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Password is required".to_owned());
    }
    if value.chars().count() < 6 {
        return Err("Min 6 characters".to_owned());
    }
    Ok(())
}

/// Confirm-password: required and equal to the password field.
///
/// # Errors
///
/// Returns the inline message to display for the first failed rule.
pub fn validate_confirm(password: &str, confirm: &str) -> Result<(), String> {
    if confirm.is_empty() {
        return Err("Please confirm password".to_owned());
    }
    if confirm != password {
        return Err("Passwords do not match".to_owned());
    }
    Ok(())
}
