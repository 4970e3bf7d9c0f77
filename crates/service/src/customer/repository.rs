use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::ServiceError;
use models::customer;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn insert(
        &self,
        name: &str,
        email: &str,
        now: DateTimeWithTimeZone,
    ) -> Result<customer::Model, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<customer::Model>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<customer::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<customer::Model>, ServiceError>;
    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        now: DateTimeWithTimeZone,
    ) -> Result<Option<customer::Model>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn insert(
        &self,
        name: &str,
        email: &str,
        now: DateTimeWithTimeZone,
    ) -> Result<customer::Model, ServiceError> {
        let am = customer::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(ServiceError::db)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<customer::Model>, ServiceError> {
        customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<customer::Model>, ServiceError> {
        customer::Entity::find()
            .filter(customer::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_all(&self) -> Result<Vec<customer::Model>, ServiceError> {
        customer::Entity::find()
            .order_by_asc(customer::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        now: DateTimeWithTimeZone,
    ) -> Result<Option<customer::Model>, ServiceError> {
        let Some(found) = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
        else {
            return Ok(None);
        };
        let mut am: customer::ActiveModel = found.into();
        am.name = Set(name.to_string());
        am.email = Set(email.to_string());
        am.updated_at = Set(now);
        let updated = am.update(&self.db).await.map_err(ServiceError::db)?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = customer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}
