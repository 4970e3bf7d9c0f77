use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::validation::{check_email, check_len, check_required, FieldError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRequest {
    pub name: String,
    pub email: String,
}

impl CustomerRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if check_required(&mut errors, "name", &self.name) {
            check_len(&mut errors, "name", &self.name, 3, 50);
        }
        if check_required(&mut errors, "email", &self.email) {
            check_len(&mut errors, "email", &self.email, 3, 50);
            check_email(&mut errors, "email", &self.email);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<models::customer::Model> for CustomerResponse {
    fn from(m: models::customer::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str) -> CustomerRequest {
        CustomerRequest { name: name.into(), email: email.into() }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request("Ada", "ada@x.com").validate().is_ok());
    }

    #[test]
    fn short_name_and_bad_email_reported_together() {
        let errors = request("Al", "not-an-email").validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email"]);
    }

    #[test]
    fn blank_fields_are_required_errors() {
        let errors = request("", "  ").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.message.contains("required")));
    }
}
