//! In-memory repository implementations so service invariants can be
//! exercised without a database. Each store mimics the storage semantics the
//! services rely on: monotonic ids, stored timestamps, and (for orders)
//! item rows kept in list order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::customer::repository::CustomerRepository;
use crate::customer::CustomerService;
use crate::errors::ServiceError;
use crate::order::repository::OrderRepository;
use crate::order::OrderService;
use crate::product::repository::{ProductFields, ProductRepository};
use crate::product::{ProductRequest, ProductService};
use models::{customer, order, order_item, product};

pub fn product_request(sku: &str, category: &str, brand: &str, model: &str, price: f64) -> ProductRequest {
    ProductRequest {
        sku: sku.into(),
        category: category.into(),
        brand: brand.into(),
        model: model.into(),
        price: Some(price),
        description: None,
    }
}

/// All three services wired over shared in-memory stores, mirroring the
/// process-wide wiring the server does at startup.
pub struct Fixture {
    pub customers: CustomerService,
    pub products: ProductService,
    pub orders: OrderService,
}

pub fn fixture() -> Fixture {
    let customers = InMemoryCustomers::new();
    let products = InMemoryProducts::new();
    let orders = InMemoryOrders::new();
    Fixture {
        customers: CustomerService::new(customers.clone()),
        products: ProductService::new(products.clone()),
        orders: OrderService::new(orders, customers, products),
    }
}

#[derive(Default)]
pub struct InMemoryCustomers {
    inner: Mutex<CustomerRows>,
}

#[derive(Default)]
struct CustomerRows {
    next_id: i64,
    rows: Vec<customer::Model>,
}

impl InMemoryCustomers {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn insert(
        &self,
        name: &str,
        email: &str,
        now: DateTimeWithTimeZone,
    ) -> Result<customer::Model, ServiceError> {
        let mut t = self.inner.lock().unwrap();
        t.next_id += 1;
        let m = customer::Model {
            id: t.next_id,
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        };
        t.rows.push(m.clone());
        Ok(m)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<customer::Model>, ServiceError> {
        Ok(self.inner.lock().unwrap().rows.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<customer::Model>, ServiceError> {
        Ok(self.inner.lock().unwrap().rows.iter().find(|c| c.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<customer::Model>, ServiceError> {
        Ok(self.inner.lock().unwrap().rows.clone())
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        now: DateTimeWithTimeZone,
    ) -> Result<Option<customer::Model>, ServiceError> {
        let mut t = self.inner.lock().unwrap();
        let Some(row) = t.rows.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        row.name = name.to_string();
        row.email = email.to_string();
        row.updated_at = now;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let mut t = self.inner.lock().unwrap();
        let before = t.rows.len();
        t.rows.retain(|c| c.id != id);
        Ok(t.rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryProducts {
    inner: Mutex<ProductRows>,
}

#[derive(Default)]
struct ProductRows {
    next_id: i64,
    rows: Vec<product::Model>,
}

impl InMemoryProducts {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

fn apply(row: &mut product::Model, fields: &ProductFields) {
    row.sku = fields.sku.clone();
    row.category = fields.category.clone();
    row.brand = fields.brand.clone();
    row.model = fields.model.clone();
    row.price = fields.price;
    row.description = fields.description.clone();
    row.image_path = fields.image_path.clone();
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn insert(
        &self,
        fields: &ProductFields,
        now: DateTimeWithTimeZone,
    ) -> Result<product::Model, ServiceError> {
        let mut t = self.inner.lock().unwrap();
        t.next_id += 1;
        let mut m = product::Model {
            id: t.next_id,
            sku: String::new(),
            category: String::new(),
            brand: String::new(),
            model: String::new(),
            price: 0.0,
            description: None,
            image_path: String::new(),
            created_at: now,
            updated_at: now,
        };
        apply(&mut m, fields);
        t.rows.push(m.clone());
        Ok(m)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<product::Model>, ServiceError> {
        Ok(self.inner.lock().unwrap().rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<product::Model>, ServiceError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<product::Model>, ServiceError> {
        Ok(self.inner.lock().unwrap().rows.iter().find(|p| p.sku == sku).cloned())
    }

    async fn find_by_category_brand_model(
        &self,
        category: &str,
        brand: &str,
        model: &str,
    ) -> Result<Option<product::Model>, ServiceError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|p| p.category == category && p.brand == brand && p.model == model)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(self.inner.lock().unwrap().rows.clone())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<product::Model>, ServiceError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn find_by_category_and_brand(
        &self,
        category: &str,
        brand: &str,
    ) -> Result<Vec<product::Model>, ServiceError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|p| p.category == category && p.brand == brand)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        fields: &ProductFields,
        now: DateTimeWithTimeZone,
    ) -> Result<Option<product::Model>, ServiceError> {
        let mut t = self.inner.lock().unwrap();
        let Some(row) = t.rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        apply(row, fields);
        row.updated_at = now;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let mut t = self.inner.lock().unwrap();
        let before = t.rows.len();
        t.rows.retain(|p| p.id != id);
        Ok(t.rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryOrders {
    inner: Mutex<OrderRows>,
}

#[derive(Default)]
struct OrderRows {
    next_order_id: i64,
    next_item_id: i64,
    orders: Vec<order::Model>,
    items: Vec<order_item::Model>,
}

impl InMemoryOrders {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl OrderRows {
    fn push_items(&mut self, order_id: i64, product_ids: &[i64]) {
        for (pos, pid) in product_ids.iter().enumerate() {
            self.next_item_id += 1;
            self.items.push(order_item::Model {
                id: self.next_item_id,
                order_id,
                product_id: *pid,
                position: pos as i32,
            });
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn insert(
        &self,
        customer_id: i64,
        product_ids: &[i64],
        now: DateTimeWithTimeZone,
    ) -> Result<order::Model, ServiceError> {
        let mut t = self.inner.lock().unwrap();
        t.next_order_id += 1;
        let m = order::Model {
            id: t.next_order_id,
            customer_id,
            created_at: now,
            updated_at: now,
        };
        t.orders.push(m.clone());
        let order_id = m.id;
        t.push_items(order_id, product_ids);
        Ok(m)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<order::Model>, ServiceError> {
        Ok(self.inner.lock().unwrap().orders.iter().find(|o| o.id == id).cloned())
    }

    async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<order::Model>, ServiceError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .orders
            .iter()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_item_product_ids(&self, order_id: i64) -> Result<Vec<i64>, ServiceError> {
        let t = self.inner.lock().unwrap();
        let mut items: Vec<_> = t.items.iter().filter(|i| i.order_id == order_id).collect();
        items.sort_by_key(|i| i.position);
        Ok(items.into_iter().map(|i| i.product_id).collect())
    }

    async fn replace_items(
        &self,
        order_id: i64,
        product_ids: &[i64],
        now: DateTimeWithTimeZone,
    ) -> Result<Option<order::Model>, ServiceError> {
        let mut t = self.inner.lock().unwrap();
        let Some(row) = t.orders.iter_mut().find(|o| o.id == order_id) else {
            return Ok(None);
        };
        row.updated_at = now;
        let updated = row.clone();
        t.items.retain(|i| i.order_id != order_id);
        t.push_items(order_id, product_ids);
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let mut t = self.inner.lock().unwrap();
        let before = t.orders.len();
        t.orders.retain(|o| o.id != id);
        // item rows cascade with the order
        t.items.retain(|i| i.order_id != id);
        Ok(t.orders.len() < before)
    }
}
