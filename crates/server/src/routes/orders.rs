use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use service::order::{OrderItemsRequest, OrderRequest, OrderResponse};
use service::validation::FieldError;

use crate::errors::ApiError;
use crate::startup::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub customer_id: Option<i64>,
}

/// Orders are only listed per customer; the bare collection is unbounded
/// and has no caller.
pub async fn list_by_customer(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let customer_id = q.customer_id.ok_or_else(|| {
        ApiError::Validation(vec![FieldError::new(
            "customer_id",
            "customer_id query parameter is required",
        )])
    })?;
    Ok(Json(state.orders.find_by_customer(customer_id).await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OrderResponse>, ApiError> {
    Ok(Json(state.orders.find_by_id(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<OrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    req.validate()?;
    let created = state.orders.create(&req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<OrderItemsRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    req.validate()?;
    Ok(Json(state.orders.update(id, &req).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.orders.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
