use lazy_static::lazy_static;
use regex::Regex;

use super::dto::{LoginRequest, RegisterRequest};
use crate::error::ApiError;

const MIN_PASSWORD_LEN: usize = 4;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn invalid_input(detail: &str) -> ApiError {
    ApiError::InvalidInput(detail.to_owned())
}

/// Trims the email and name in place, then checks every field.
pub(crate) fn validate_register(req: &mut RegisterRequest) -> Result<(), ApiError> {
    req.email = req.email.trim().to_owned();
    req.name = req.name.trim().to_owned();

    if !is_valid_email(&req.email) {
        return Err(invalid_input("email must be a valid email"));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(invalid_input("password must be at least 4 characters"));
    }
    if req.name.is_empty() {
        return Err(invalid_input("name is required"));
    }
    Ok(())
}

pub(crate) fn validate_login(req: &mut LoginRequest) -> Result<(), ApiError> {
    req.email = req.email.trim().to_owned();

    if !is_valid_email(&req.email) {
        return Err(invalid_input("email must be a valid email"));
    }
    if req.password.is_empty() {
        return Err(invalid_input("password is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(email: &str, password: &str, name: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@x.com"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("a x@y.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn register_accepts_and_trims() {
        let mut req = register("  a@x.com ", "pw123", " Alice ");
        validate_register(&mut req).unwrap();
        assert_eq!(req.email, "a@x.com");
        assert_eq!(req.name, "Alice");
    }

    #[test]
    fn register_keeps_email_case() {
        let mut req = register("Alice@X.com", "pw123", "Alice");
        validate_register(&mut req).unwrap();
        assert_eq!(req.email, "Alice@X.com");
    }

    #[test]
    fn register_rejects_short_password_and_blank_name() {
        assert!(validate_register(&mut register("a@x.com", "pw1", "Alice")).is_err());
        assert!(validate_register(&mut register("a@x.com", "pw123", "   ")).is_err());
        assert!(validate_register(&mut register("nope", "pw123", "Alice")).is_err());
    }

    #[test]
    fn login_requires_password() {
        let mut req = LoginRequest {
            email: "a@x.com".into(),
            password: String::new(),
        };
        let err = validate_login(&mut req).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input");
    }
}
