//! HTTP client for the external product backend.
//!
//! Every call is a single attempt with the configured timeout. Bodies are
//! relayed as raw JSON values; the proxy never reinterprets them.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

use crate::backend::BackendError;
use crate::config::BackendConfig;
use crate::http::payload::{CreatePayload, ListParams, UpdatePayload};

/// Client for the backend's `/products` and `/product` endpoints.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    products_url: Url,
    product_url: Url,
}

impl BackendClient {
    /// Create a client for the backend at `config.base_url`.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let base = config.base_url.trim_end_matches('/');
        let products_url = Url::parse(&format!("{base}/products"))?;
        let product_url = Url::parse(&format!("{base}/product"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .no_proxy()
            .build()
            .map_err(BackendError::Transport)?;

        Ok(Self {
            client,
            products_url,
            product_url,
        })
    }

    /// `GET {base}/products?page&limit&search`
    pub async fn list_products(&self, params: &ListParams) -> Result<Value, BackendError> {
        let request = self.client.get(self.products_url.clone()).query(&[
            ("page", params.page.as_str()),
            ("limit", params.limit.as_str()),
            ("search", params.search.as_str()),
        ]);
        send(request).await
    }

    /// `GET {base}/product?product_id=<id>`
    pub async fn get_product(&self, product_id: &str) -> Result<Value, BackendError> {
        let request = self
            .client
            .get(self.product_url.clone())
            .query(&[("product_id", product_id)]);
        send(request).await
    }

    /// `POST {base}/product`
    pub async fn create_product(&self, payload: &CreatePayload) -> Result<Value, BackendError> {
        send(self.client.post(self.product_url.clone()).json(payload)).await
    }

    /// `PUT {base}/product`
    pub async fn update_product(&self, payload: &UpdatePayload) -> Result<Value, BackendError> {
        send(self.client.put(self.product_url.clone()).json(payload)).await
    }

    pub fn products_url(&self) -> &Url {
        &self.products_url
    }

    pub fn product_url(&self) -> &Url {
        &self.product_url
    }
}

async fn send(request: RequestBuilder) -> Result<Value, BackendError> {
    let response = request.send().await.map_err(BackendError::from_send)?;

    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status));
    }

    response.json::<Value>().await.map_err(BackendError::Decode)
}
