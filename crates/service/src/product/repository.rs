use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::ServiceError;
use models::product;

/// Column values for a product write. `image_path` is derived by the
/// service before the draft reaches the repository.
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub sku: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_path: String,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(
        &self,
        fields: &ProductFields,
        now: DateTimeWithTimeZone,
    ) -> Result<product::Model, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<product::Model>, ServiceError>;
    /// Fetch the distinct products for `ids`; callers re-expand duplicates.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<product::Model>, ServiceError>;
    async fn find_by_sku(&self, sku: &str) -> Result<Option<product::Model>, ServiceError>;
    async fn find_by_category_brand_model(
        &self,
        category: &str,
        brand: &str,
        model: &str,
    ) -> Result<Option<product::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError>;
    async fn find_by_category(&self, category: &str) -> Result<Vec<product::Model>, ServiceError>;
    async fn find_by_category_and_brand(
        &self,
        category: &str,
        brand: &str,
    ) -> Result<Vec<product::Model>, ServiceError>;
    async fn update(
        &self,
        id: i64,
        fields: &ProductFields,
        now: DateTimeWithTimeZone,
    ) -> Result<Option<product::Model>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

fn apply(am: &mut product::ActiveModel, fields: &ProductFields) {
    am.sku = Set(fields.sku.clone());
    am.category = Set(fields.category.clone());
    am.brand = Set(fields.brand.clone());
    am.model = Set(fields.model.clone());
    am.price = Set(fields.price);
    am.description = Set(fields.description.clone());
    am.image_path = Set(fields.image_path.clone());
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn insert(
        &self,
        fields: &ProductFields,
        now: DateTimeWithTimeZone,
    ) -> Result<product::Model, ServiceError> {
        let mut am = product::ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        apply(&mut am, fields);
        am.insert(&self.db).await.map_err(ServiceError::db)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<product::Model>, ServiceError> {
        product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::Sku.eq(sku))
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_by_category_brand_model(
        &self,
        category: &str,
        brand: &str,
        model: &str,
    ) -> Result<Option<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::Category.eq(category))
            .filter(product::Column::Brand.eq(brand))
            .filter(product::Column::Model.eq(model))
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::Category.eq(category))
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_by_category_and_brand(
        &self,
        category: &str,
        brand: &str,
    ) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::Category.eq(category))
            .filter(product::Column::Brand.eq(brand))
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn update(
        &self,
        id: i64,
        fields: &ProductFields,
        now: DateTimeWithTimeZone,
    ) -> Result<Option<product::Model>, ServiceError> {
        let Some(found) = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
        else {
            return Ok(None);
        };
        let mut am: product::ActiveModel = found.into();
        apply(&mut am, fields);
        am.updated_at = Set(now);
        let updated = am.update(&self.db).await.map_err(ServiceError::db)?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(res.rows_affected > 0)
    }
}
