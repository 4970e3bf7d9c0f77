use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use service::customer::{CustomerRequest, CustomerResponse};

use crate::errors::ApiError;
use crate::startup::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    Ok(Json(state.customers.find_all().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerResponse>, ApiError> {
    Ok(Json(state.customers.find_by_id(id).await?))
}

pub async fn get_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<CustomerResponse>, ApiError> {
    Ok(Json(state.customers.find_by_email(&email).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    req.validate()?;
    let created = state.customers.create(&req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    req.validate()?;
    Ok(Json(state.customers.update(id, &req).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.customers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
