use super::*;

// =============================================================
// Name
// =============================================================

#[test]
fn name_required() {
    assert_eq!(validate_name("").unwrap_err(), "Full name is required");
}

#[test]
fn name_rejects_digits() {
    assert_eq!(validate_name("Jane2").unwrap_err(), "Full name cannot contain digits.");
}

#[test]
fn name_min_length() {
    assert_eq!(validate_name("J").unwrap_err(), "Min 2 characters");
    assert!(validate_name("Jo").is_ok());
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_required() {
    assert_eq!(validate_email("").unwrap_err(), "Email is required");
}

#[test]
fn email_accepts_common_shapes() {
    assert!(validate_email("user@example.com").is_ok());
    assert!(validate_email("first.last+tag@sub.example.co").is_ok());
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["plain", "@example.com", "user@", "user@example", "user@.com", "user@example.c", "user@exa mple.com", "user@example.c0m"] {
        assert_eq!(validate_email(bad).unwrap_err(), "Invalid email format", "case: {bad}");
    }
}

// =============================================================
// Phone
// =============================================================

#[test]
fn phone_required() {
    assert_eq!(validate_phone("").unwrap_err(), "Phone number is required");
}

#[test]
fn phone_must_be_ten_digits() {
    assert!(validate_phone("9876543210").is_ok());
    for bad in ["123", "98765432101", "987654321x", "+919876543"] {
        assert_eq!(
            validate_phone(bad).unwrap_err(),
            "Phone number should be 10 digits long",
            "case: {bad}"
        );
    }
}

// =============================================================
// Password + confirm
// =============================================================

#[test]
fn password_required_and_min_length() {
    assert_eq!(validate_password("").unwrap_err(), "Password is required");
    assert_eq!(validate_password("12345").unwrap_err(), "Min 6 characters");
    assert!(validate_password("secret1").is_ok());
}

#[test]
fn confirm_must_match() {
    assert_eq!(validate_confirm("secret1", "").unwrap_err(), "Please confirm password");
    assert_eq!(validate_confirm("secret1", "secret2").unwrap_err(), "Passwords do not match");
    assert!(validate_confirm("secret1", "secret1").is_ok());
}
