use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use service::product::{ProductRequest, ProductResponse};
use service::validation::FieldError;

use crate::errors::ApiError;
use crate::startup::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub brand: Option<String>,
}

/// Unfiltered list, by category, or by category and brand. A brand filter
/// without a category has no defined meaning and is rejected.
pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let list = match (q.category, q.brand) {
        (Some(category), Some(brand)) => {
            state.products.find_by_category_and_brand(&category, &brand).await?
        }
        (Some(category), None) => state.products.find_by_category(&category).await?,
        (None, None) => state.products.find_all().await?,
        (None, Some(_)) => {
            return Err(ApiError::Validation(vec![FieldError::new(
                "brand",
                "brand filter requires a category",
            )]));
        }
    };
    Ok(Json(list))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, ApiError> {
    Ok(Json(state.products.find_by_id(id).await?))
}

pub async fn get_by_sku(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    Ok(Json(state.products.find_by_sku(&sku).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    req.validate()?;
    let created = state.products.create(&req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    req.validate()?;
    Ok(Json(state.products.update(id, &req).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
