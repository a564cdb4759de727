use super::*;

fn filled_form() -> SignupForm {
    SignupForm {
        username: "john".to_owned(),
        email: "john@farm.io".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        ..SignupForm::default()
    }
}

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn email_accepts_common_addresses() {
    assert!(is_valid_email("john@farm.io"));
    assert!(is_valid_email("a.b@sub.domain.org"));
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["", "john", "john@", "@farm.io", "john@farm", "john@.io", "john@farm.", "jo hn@farm.io", "a@b@c.io"] {
        assert!(!is_valid_email(bad), "accepted {bad:?}");
    }
}

// =============================================================
// validate_signup
// =============================================================

#[test]
fn default_form_selects_farmer() {
    assert_eq!(SignupForm::default().role, "FARMER");
    assert_eq!(ROLE_OPTIONS.iter().map(|(v, _)| *v).collect::<Vec<_>>(), ["FARMER", "BUYER", "VETERINARIAN"]);
}

#[test]
fn valid_form_builds_request_without_blank_optionals() {
    let form = SignupForm { first_name: "  John ".to_owned(), last_name: "   ".to_owned(), ..filled_form() };
    let request = validate_signup(&form).unwrap();
    assert_eq!(request.username, "john");
    assert_eq!(request.email, "john@farm.io");
    assert_eq!(request.first_name.as_deref(), Some("John"));
    assert_eq!(request.last_name, None);
    assert_eq!(request.phone_number, None);
    assert_eq!(request.role, "FARMER");
}

#[test]
fn short_username_and_password_are_reported_together() {
    let form = SignupForm { username: "jo".to_owned(), password: "12345".to_owned(), confirm_password: "12345".to_owned(), ..filled_form() };
    let errors = validate_signup(&form).unwrap_err();
    assert_eq!(errors.username, Some("Username must be at least 3 characters"));
    assert_eq!(errors.password, Some("Password must be at least 6 characters"));
    assert_eq!(errors.email, None);
    assert_eq!(errors.confirm_password, None);
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let form = SignupForm { confirm_password: "secret2".to_owned(), ..filled_form() };
    let errors = validate_signup(&form).unwrap_err();
    assert_eq!(errors, SignupErrors { confirm_password: Some("Passwords do not match"), ..SignupErrors::default() });
}

#[test]
fn missing_role_and_bad_email_are_rejected() {
    let form = SignupForm { role: String::new(), email: "john@farm".to_owned(), ..filled_form() };
    let errors = validate_signup(&form).unwrap_err();
    assert_eq!(errors.role, Some("Please select a role"));
    assert_eq!(errors.email, Some("Please enter a valid email address"));
}

#[test]
fn optional_fields_have_length_limits() {
    let form = SignupForm {
        first_name: "x".repeat(51),
        last_name: "y".repeat(50),
        phone_number: "1".repeat(16),
        ..filled_form()
    };
    let errors = validate_signup(&form).unwrap_err();
    assert_eq!(errors.first_name, Some("First name cannot exceed 50 characters"));
    assert_eq!(errors.last_name, None);
    assert_eq!(errors.phone_number, Some("Phone number cannot exceed 15 characters"));
}
