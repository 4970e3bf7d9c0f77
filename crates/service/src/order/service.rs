use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;
use crate::order::dto::{OrderItemsRequest, OrderRequest, OrderResponse};
use crate::order::repository::OrderRepository;
use crate::order::totals;
use crate::product::repository::ProductRepository;
use crate::product::ProductResponse;

/// Application service for the order aggregate. Referential checks against
/// customers and products happen here, before anything is written; the
/// repositories stay thin.
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self { orders, customers, products }
    }

    /// Unresolved customer or product ids fail with NotFound before any
    /// persistence happens.
    pub async fn create(&self, req: &OrderRequest) -> Result<OrderResponse, ServiceError> {
        let customer_id = req
            .customer_id
            .ok_or_else(|| ServiceError::Validation("customer_id is required".into()))?;
        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("customer"))?;
        let catalog = self.resolve_products(&req.order_items).await?;
        let now = Utc::now().into();
        let order = self.orders.insert(customer_id, &req.order_items, now).await?;
        info!(id = order.id, customer_id, items = req.order_items.len(), "created order");
        Ok(build_response(order, &customer, &req.order_items, &catalog))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<OrderResponse, ServiceError> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("order"))?;
        self.load_response(order).await
    }

    /// Always a list; a customer with no orders (or an unknown customer id)
    /// yields an empty one.
    pub async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<OrderResponse>, ServiceError> {
        let orders = self.orders.find_by_customer(customer_id).await?;
        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            responses.push(self.load_response(order).await?);
        }
        Ok(responses)
    }

    /// Replaces the entire item list; nothing is merged and the owning
    /// customer cannot change.
    pub async fn update(&self, id: i64, req: &OrderItemsRequest) -> Result<OrderResponse, ServiceError> {
        let catalog = self.resolve_products(&req.order_items).await?;
        let now = Utc::now().into();
        let order = self
            .orders
            .replace_items(id, &req.order_items, now)
            .await?
            .ok_or_else(|| ServiceError::not_found("order"))?;
        let customer = self.owning_customer(&order).await?;
        info!(id = order.id, items = req.order_items.len(), "replaced order items");
        Ok(build_response(order, &customer, &req.order_items, &catalog))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.orders.delete(id).await? {
            return Err(ServiceError::not_found("order"));
        }
        info!(id, "deleted order");
        Ok(())
    }

    /// Write-path check: every requested product id must resolve.
    async fn resolve_products(
        &self,
        ids: &[i64],
    ) -> Result<HashMap<i64, models::product::Model>, ServiceError> {
        let found = self.products.find_by_ids(ids).await?;
        let catalog: HashMap<i64, models::product::Model> =
            found.into_iter().map(|p| (p.id, p)).collect();
        if ids.iter().any(|id| !catalog.contains_key(id)) {
            return Err(ServiceError::not_found("product"));
        }
        Ok(catalog)
    }

    /// Read path: item list and prices are fetched live. Items whose product
    /// has since been deleted cascade out of the join table, so the list only
    /// ever shows products that still exist.
    async fn load_response(&self, order: models::order::Model) -> Result<OrderResponse, ServiceError> {
        let customer = self.owning_customer(&order).await?;
        let item_ids = self.orders.find_item_product_ids(order.id).await?;
        let found = self.products.find_by_ids(&item_ids).await?;
        let catalog: HashMap<i64, models::product::Model> =
            found.into_iter().map(|p| (p.id, p)).collect();
        Ok(build_response(order, &customer, &item_ids, &catalog))
    }

    async fn owning_customer(
        &self,
        order: &models::order::Model,
    ) -> Result<models::customer::Model, ServiceError> {
        // the customer FK guarantees this resolves; a miss means the store
        // lost referential integrity
        self.customers.find_by_id(order.customer_id).await?.ok_or_else(|| {
            ServiceError::Db(format!(
                "customer {} missing for order {}",
                order.customer_id, order.id
            ))
        })
    }
}

fn build_response(
    order: models::order::Model,
    customer: &models::customer::Model,
    item_ids: &[i64],
    catalog: &HashMap<i64, models::product::Model>,
) -> OrderResponse {
    let products: Vec<ProductResponse> = item_ids
        .iter()
        .filter_map(|id| catalog.get(id).cloned())
        .map(ProductResponse::from)
        .collect();
    let (total_items, total_price) = totals(&products);
    OrderResponse {
        id: order.id,
        customer_id: customer.id,
        customer_name: customer.name.clone(),
        products,
        total_items,
        total_price,
        created_at: order.created_at,
        updated_at: order.updated_at,
    }
}
