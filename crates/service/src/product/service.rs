use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::errors::ServiceError;
use crate::product::dto::{ProductRequest, ProductResponse};
use crate::product::repository::{ProductFields, ProductRepository};
use crate::product::image_path;

/// Application service enforcing product invariants on top of the repository.
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// The (category, brand, model) triple is checked before insert so
    /// callers get a domain-level conflict, not a unique-index failure.
    pub async fn create(&self, req: &ProductRequest) -> Result<ProductResponse, ServiceError> {
        let fields = to_fields(req)?;
        if self
            .repo
            .find_by_category_brand_model(&fields.category, &fields.brand, &fields.model)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict("product already exists".into()));
        }
        let now = Utc::now().into();
        let created = self.repo.insert(&fields, now).await?;
        info!(id = created.id, sku = %created.sku, "created product");
        Ok(created.into())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        let found = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))?;
        Ok(found.into())
    }

    pub async fn find_by_sku(&self, sku: &str) -> Result<ProductResponse, ServiceError> {
        let found = self
            .repo
            .find_by_sku(sku)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))?;
        Ok(found.into())
    }

    pub async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        Ok(self.repo.find_all().await?.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_category(&self, category: &str) -> Result<Vec<ProductResponse>, ServiceError> {
        Ok(self
            .repo
            .find_by_category(category)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn find_by_category_and_brand(
        &self,
        category: &str,
        brand: &str,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        Ok(self
            .repo
            .find_by_category_and_brand(category, brand)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Full overwrite of every column, image path recomputed from the new
    /// catalog coordinates.
    pub async fn update(&self, id: i64, req: &ProductRequest) -> Result<ProductResponse, ServiceError> {
        let fields = to_fields(req)?;
        if let Some(existing) = self
            .repo
            .find_by_category_brand_model(&fields.category, &fields.brand, &fields.model)
            .await?
        {
            if existing.id != id {
                return Err(ServiceError::Conflict("product already exists".into()));
            }
        }
        let now = Utc::now().into();
        let updated = self
            .repo
            .update(id, &fields, now)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))?;
        info!(id = updated.id, sku = %updated.sku, "updated product");
        Ok(updated.into())
    }

    /// Join rows referencing the product are removed by FK cascade; orders
    /// themselves survive with a shorter item list.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("product"));
        }
        info!(id, "deleted product");
        Ok(())
    }
}

fn to_fields(req: &ProductRequest) -> Result<ProductFields, ServiceError> {
    let price = req
        .price
        .ok_or_else(|| ServiceError::Validation("price is required".into()))?;
    Ok(ProductFields {
        sku: req.sku.clone(),
        category: req.category.clone(),
        brand: req.brand.clone(),
        model: req.model.clone(),
        price,
        description: req.description.clone(),
        image_path: image_path(&req.category, &req.brand, &req.model),
    })
}
