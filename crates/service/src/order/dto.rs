use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::product::ProductResponse;
use crate::validation::FieldError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Optional at the structural level so a missing id becomes a field
    /// error rather than a body-deserialization rejection.
    pub customer_id: Option<i64>,
    /// Product ids in purchase order; the same id may appear repeatedly.
    #[serde(default)]
    pub order_items: Vec<i64>,
}

impl OrderRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.customer_id.is_none() {
            errors.push(FieldError::new("customer_id", "customer_id is required"));
        }
        if self.order_items.is_empty() {
            errors.push(FieldError::new("order_items", "order_items must not be empty"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Replacement body for an existing order. The owning customer is immutable,
/// so only the item list can be sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemsRequest {
    #[serde(default)]
    pub order_items: Vec<i64>,
}

impl OrderItemsRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        if self.order_items.is_empty() {
            return Err(vec![FieldError::new("order_items", "order_items must not be empty")]);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub products: Vec<ProductResponse>,
    pub total_items: usize,
    pub total_price: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}
