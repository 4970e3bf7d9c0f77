pub mod dto;
pub mod repository;
pub mod service;

pub use dto::{OrderItemsRequest, OrderRequest, OrderResponse};
pub use repository::{OrderRepository, SeaOrmOrderRepository};
pub use service::OrderService;

use crate::product::ProductResponse;

/// Derived order figures: item count (duplicates included) and the sum of
/// each listed product's current price, accumulated in list order starting
/// at 0.0. Never persisted; recomputed on every read, so a later price
/// change shows up in every order referencing that product.
pub fn totals(products: &[ProductResponse]) -> (usize, f64) {
    let total_price = products.iter().fold(0.0_f64, |acc, p| acc + p.price);
    (products.len(), total_price)
}
