//! # Customer Record
//!
//! The single entity this service manages. A customer is a `(name, email)`
//! pair; no identifier is exposed by the API even though the backing table
//! may carry one.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A customer record as accepted by POST and returned by GET.
///
/// Field-shape errors (missing field, wrong type) are rejected at
/// deserialization; content rules are enforced by [`Validate::validate`]:
///
/// - `name` must be non-empty
/// - `email` must be a well-formed email address
#[derive(Debug, Clone, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct Customer {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(email(message = "email must be a well-formed email address"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, email: &str) -> Customer {
        Customer {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_customer_accepted() {
        let c = customer("Ada Lovelace", "ada@example.com");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let c = customer("", "ada@example.com");
        let err = c.validate().unwrap_err();
        assert!(err.field_errors().contains_key("name"));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let c = customer("Ada Lovelace", "not-an-email");
        let err = c.validate().unwrap_err();
        assert!(err.field_errors().contains_key("email"));
    }

    #[test]
    fn test_missing_field_rejected_at_deserialization() {
        let result: Result<Customer, _> =
            serde_json::from_str(r#"{"name": "Ada Lovelace"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_rejected_at_deserialization() {
        let result: Result<Customer, _> =
            serde_json::from_str(r#"{"name": 42, "email": "ada@example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_as_name_email_pair() {
        let c = customer("Ada Lovelace", "ada@example.com");
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Ada Lovelace", "email": "ada@example.com"})
        );
    }
}
