//! Proxy route handlers.
//!
//! Each handler makes at most one backend call. Validation happens first, so
//! a rejected request never reaches the backend.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::backend::BackendError;
use crate::http::payload::{CreatePayload, ItemQuery, ListParams, ListQueryParams, UpdateBody};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

pub const PRODUCT_ID_REQUIRED: &str = "Product ID is required";
pub const PRODUCT_ID_REQUIRED_FOR_UPDATE: &str = "Product ID is required for update";

const CREATE_FAILED: &str = "Failed to create product";
const UPDATE_FAILED: &str = "Failed to update product";

/// `GET /api/products`
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQueryParams>,
) -> Response {
    let start = Instant::now();
    let params = ListParams::from(query);

    tracing::debug!(
        page = %params.page,
        limit = %params.limit,
        search = %params.search,
        "Forwarding product list request"
    );

    let result = state
        .backend
        .list_products(&params)
        .await
        .map_err(upstream("Failed to fetch data from external API"));

    respond("products.list", start, result)
}

/// `GET /api/product?product_id=<id>`
pub async fn get_product(
    State(state): State<AppState>,
    Query(query): Query<ItemQuery>,
) -> Response {
    let start = Instant::now();

    let result = match query.product_id() {
        None => Err(ApiError::Validation(PRODUCT_ID_REQUIRED)),
        Some(product_id) => state
            .backend
            .get_product(&product_id)
            .await
            .map_err(upstream("Failed to fetch product")),
    };

    respond("product.get", start, result)
}

/// `POST /api/product`
pub async fn create_product(State(state): State<AppState>, body: Bytes) -> Response {
    let start = Instant::now();

    let result = match serde_json::from_slice::<CreatePayload>(&body) {
        Err(source) => Err(ApiError::Body {
            message: CREATE_FAILED,
            source,
        }),
        Ok(payload) => state
            .backend
            .create_product(&payload)
            .await
            .map_err(upstream(CREATE_FAILED)),
    };

    respond("product.create", start, result)
}

/// `PUT /api/product`
pub async fn update_product(State(state): State<AppState>, body: Bytes) -> Response {
    let start = Instant::now();

    let result = match serde_json::from_slice::<UpdateBody>(&body) {
        Err(source) => Err(ApiError::Body {
            message: UPDATE_FAILED,
            source,
        }),
        Ok(body) => match body.into_payload() {
            None => Err(ApiError::Validation(PRODUCT_ID_REQUIRED_FOR_UPDATE)),
            Some(payload) => state
                .backend
                .update_product(&payload)
                .await
                .map_err(upstream(UPDATE_FAILED)),
        },
    };

    respond("product.update", start, result)
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn upstream(message: &'static str) -> impl FnOnce(BackendError) -> ApiError {
    move |source| ApiError::Upstream { message, source }
}

fn respond(operation: &'static str, start: Instant, result: Result<Value, ApiError>) -> Response {
    let response = match result {
        Ok(body) => Json(body).into_response(),
        Err(err) => {
            match &err {
                ApiError::Upstream { source, .. } => {
                    tracing::error!(operation, kind = source.kind(), error = %source, "Backend call failed");
                    metrics::record_backend_error(operation, source.kind());
                }
                ApiError::Body { source, .. } => {
                    tracing::error!(operation, error = %source, "Request body is not a product object");
                }
                ApiError::Validation(reason) => {
                    tracing::warn!(operation, reason, "Rejected request before contacting backend");
                }
            }
            err.into_response()
        }
    };

    metrics::record_request(operation, response.status().as_u16(), start);
    response
}
