use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::validation::{check_len, check_max_len, check_required, FieldError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRequest {
    pub sku: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    /// Optional at the structural level so a missing price becomes a field
    /// error rather than a body-deserialization rejection.
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProductRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if check_required(&mut errors, "sku", &self.sku) {
            check_len(&mut errors, "sku", &self.sku, 2, 20);
        }
        for (field, value) in [
            ("category", &self.category),
            ("brand", &self.brand),
            ("model", &self.model),
        ] {
            if check_required(&mut errors, field, value) {
                check_len(&mut errors, field, value, 2, 50);
            }
        }
        match self.price {
            None => errors.push(FieldError::new("price", "price is required")),
            Some(p) if !p.is_finite() || p < 0.0 => {
                errors.push(FieldError::new("price", "price must be a non-negative number"));
            }
            Some(_) => {}
        }
        if let Some(description) = &self.description {
            check_max_len(&mut errors, "description", description, 255);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub sku: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_path: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<models::product::Model> for ProductResponse {
    fn from(m: models::product::Model) -> Self {
        Self {
            id: m.id,
            sku: m.sku,
            category: m.category,
            brand: m.brand,
            model: m.model,
            price: m.price,
            description: m.description,
            image_path: m.image_path,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ProductRequest {
        ProductRequest {
            sku: "lp001".into(),
            category: "laptop".into(),
            brand: "dell".into(),
            model: "X1".into(),
            price: Some(1000.0),
            description: Some("good laptop".into()),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn missing_price_is_a_field_error() {
        let mut req = request();
        req.price = None;
        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "price");
    }

    #[test]
    fn negative_and_non_finite_prices_rejected() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let mut req = request();
            req.price = Some(bad);
            assert!(req.validate().is_err(), "expected {:?} to be rejected", bad);
        }
    }

    #[test]
    fn sku_length_bounds_enforced() {
        let mut req = request();
        req.sku = "x".into();
        assert!(req.validate().is_err());
        req.sku = "x".repeat(21);
        assert!(req.validate().is_err());
    }

    #[test]
    fn oversized_description_rejected() {
        let mut req = request();
        req.description = Some("d".repeat(256));
        let errors = req.validate().unwrap_err();
        assert_eq!(errors[0].field, "description");
    }
}
