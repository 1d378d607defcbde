//! The proxy surface the dashboard depends on.

use std::future::Future;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::catalog::{ListQuery, Product, ProductInput, ProductPage, ProductUpdate};

/// Errors returned by a [`ProductApi`] call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid proxy URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Proxy returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

/// Product operations as exposed by the proxy layer.
pub trait ProductApi: Send + Sync {
    /// `GET /api/products`
    fn list_products(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = Result<ProductPage, ClientError>> + Send;

    /// `GET /api/product?product_id=<id>`
    fn get_product(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<Product, ClientError>> + Send;

    /// `POST /api/product`; resolves with the backend's body.
    fn create_product(
        &self,
        input: &ProductInput,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send;

    /// `PUT /api/product`; resolves with the backend's body.
    fn update_product(
        &self,
        update: &ProductUpdate,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send;
}
