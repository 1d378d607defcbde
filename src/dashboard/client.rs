//! HTTP client for the proxy's `/api` routes.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::catalog::{ListQuery, Product, ProductInput, ProductPage, ProductUpdate};
use crate::dashboard::api::{ClientError, ProductApi};

/// Talks to a running proxy, e.g. `http://127.0.0.1:3000`.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: Client,
    products_url: Url,
    product_url: Url,
}

impl ProxyClient {
    pub fn new(proxy_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), proxy_url)
    }

    pub fn with_client(client: Client, proxy_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(proxy_url)?;
        Ok(Self {
            client,
            products_url: base.join("/api/products")?,
            product_url: base.join("/api/product")?,
        })
    }
}

impl ProductApi for ProxyClient {
    async fn list_products(&self, query: &ListQuery) -> Result<ProductPage, ClientError> {
        send(self.client.get(self.products_url.clone()).query(query)).await
    }

    async fn get_product(&self, product_id: &str) -> Result<Product, ClientError> {
        send(
            self.client
                .get(self.product_url.clone())
                .query(&[("product_id", product_id)]),
        )
        .await
    }

    async fn create_product(&self, input: &ProductInput) -> Result<Value, ClientError> {
        send(self.client.post(self.product_url.clone()).json(input)).await
    }

    async fn update_product(&self, update: &ProductUpdate) -> Result<Value, ClientError> {
        send(self.client.put(self.product_url.clone()).json(update)).await
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ClientError::Status { status, message });
    }

    Ok(response.json::<T>().await?)
}
