use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::errors::ServiceError;
use models::{order, order_item};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist an order and its item rows as one all-or-nothing write.
    async fn insert(
        &self,
        customer_id: i64,
        product_ids: &[i64],
        now: DateTimeWithTimeZone,
    ) -> Result<order::Model, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<order::Model>, ServiceError>;
    async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<order::Model>, ServiceError>;
    /// Product ids of the order's items, in stored list order.
    async fn find_item_product_ids(&self, order_id: i64) -> Result<Vec<i64>, ServiceError>;
    /// Swap the entire item list and refresh `updated_at`; the owning
    /// customer is untouched. `None` when the order does not exist.
    async fn replace_items(
        &self,
        order_id: i64,
        product_ids: &[i64],
        now: DateTimeWithTimeZone,
    ) -> Result<Option<order::Model>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

async fn insert_items<C: ConnectionTrait>(
    conn: &C,
    order_id: i64,
    product_ids: &[i64],
) -> Result<(), ServiceError> {
    if product_ids.is_empty() {
        return Ok(());
    }
    let rows = product_ids.iter().enumerate().map(|(pos, pid)| order_item::ActiveModel {
        order_id: Set(order_id),
        product_id: Set(*pid),
        position: Set(pos as i32),
        ..Default::default()
    });
    order_item::Entity::insert_many(rows)
        .exec(conn)
        .await
        .map_err(ServiceError::db)?;
    Ok(())
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn insert(
        &self,
        customer_id: i64,
        product_ids: &[i64],
        now: DateTimeWithTimeZone,
    ) -> Result<order::Model, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        let am = order::ActiveModel {
            customer_id: Set(customer_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let created = am.insert(&txn).await.map_err(ServiceError::db)?;
        insert_items(&txn, created.id, product_ids).await?;
        txn.commit().await.map_err(ServiceError::db)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<order::Model>, ServiceError> {
        order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<order::Model>, ServiceError> {
        order::Entity::find()
            .filter(order::Column::CustomerId.eq(customer_id))
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_item_product_ids(&self, order_id: i64) -> Result<Vec<i64>, ServiceError> {
        let items = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .order_by_asc(order_item::Column::Position)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(items.into_iter().map(|i| i.product_id).collect())
    }

    async fn replace_items(
        &self,
        order_id: i64,
        product_ids: &[i64],
        now: DateTimeWithTimeZone,
    ) -> Result<Option<order::Model>, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        let Some(found) = order::Entity::find_by_id(order_id)
            .one(&txn)
            .await
            .map_err(ServiceError::db)?
        else {
            // dropping the transaction rolls it back
            return Ok(None);
        };
        order_item::Entity::delete_many()
            .filter(order_item::Column::OrderId.eq(order_id))
            .exec(&txn)
            .await
            .map_err(ServiceError::db)?;
        insert_items(&txn, order_id, product_ids).await?;
        let mut am: order::ActiveModel = found.into();
        am.updated_at = Set(now);
        let updated = am.update(&txn).await.map_err(ServiceError::db)?;
        txn.commit().await.map_err(ServiceError::db)?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = order::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}
