use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::startup::AppState;

pub mod customers;
pub mod orders;
pub mod products;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Compose the liveness route and the versioned resource routes.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/customers", get(customers::list).post(customers::create))
        .route("/customers/by-email/:email", get(customers::get_by_email))
        .route(
            "/customers/:id",
            get(customers::get).put(customers::update).delete(customers::delete),
        )
        .route("/products", get(products::list).post(products::create))
        .route("/products/by-sku/:sku", get(products::get_by_sku))
        .route(
            "/products/:id",
            get(products::get).put(products::update).delete(products::delete),
        )
        .route("/orders", get(orders::list_by_customer).post(orders::create))
        .route(
            "/orders/:id",
            get(orders::get).put(orders::update).delete(orders::delete),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
