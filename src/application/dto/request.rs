//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Create/replace user request, shared by `POST` and `PUT`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[validate(
        custom(function = "not_blank", message = "First name is required"),
        length(max = 100, message = "First name must be at most 100 characters")
    )]
    pub first_name: String,

    #[validate(
        custom(function = "not_blank", message = "Last name is required"),
        length(max = 100, message = "Last name must be at most 100 characters")
    )]
    pub last_name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: String,

    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub phone_number: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> UserRequest {
        UserRequest {
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            email: "ana@x.com".into(),
            phone_number: "555".into(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_deserializes_camel_case() {
        let request: UserRequest = serde_json::from_str(
            r#"{"firstName":"Ana","lastName":"Ruiz","email":"ana@x.com","phoneNumber":"555"}"#,
        )
        .unwrap();

        assert_eq!(request.first_name, "Ana");
        assert_eq!(request.phone_number, "555");
    }

    #[test]
    fn test_missing_field_fails_to_deserialize() {
        let result: Result<UserRequest, _> =
            serde_json::from_str(r#"{"firstName":"Ana","lastName":"Ruiz"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_first_name_rejected() {
        let mut request = valid_request();
        request.first_name = "   ".into();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".into();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_empty_phone_number_allowed() {
        let mut request = valid_request();
        request.phone_number = String::new();

        assert!(request.validate().is_ok());
    }
}
