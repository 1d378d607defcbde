//! Request shapes accepted by the proxy and forwarded to the backend.
//!
//! Field values are kept as raw JSON so whatever the dashboard sent reaches
//! the backend unchanged. Only the known product keys are forwarded.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw list query as received; empty values count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

/// List parameters forwarded to the backend, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: String,
    pub limit: String,
    pub search: String,
}

impl From<ListQueryParams> for ListParams {
    fn from(query: ListQueryParams) -> Self {
        Self {
            page: non_empty(query.page).unwrap_or_else(|| "1".to_string()),
            limit: non_empty(query.limit).unwrap_or_else(|| "10".to_string()),
            search: query.search.unwrap_or_default(),
        }
    }
}

/// Query for the single-product fetch.
#[derive(Debug, Default, Deserialize)]
pub struct ItemQuery {
    pub product_id: Option<String>,
}

impl ItemQuery {
    pub fn product_id(self) -> Option<String> {
        non_empty(self.product_id)
    }
}

/// The mutable product fields, as sent on create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<Value>,
}

/// Update body as received; `product_id` may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBody {
    #[serde(default)]
    pub product_id: Option<Value>,
    #[serde(flatten)]
    pub fields: CreatePayload,
}

impl UpdateBody {
    /// Returns the forwardable payload, or `None` if the id is missing or
    /// falsy (`null`, `false`, `0`, `""`).
    pub fn into_payload(self) -> Option<UpdatePayload> {
        let product_id = self.product_id.filter(|id| match id {
            Value::Null | Value::Bool(false) => false,
            Value::Number(n) => n.as_f64() != Some(0.0),
            Value::String(s) => !s.is_empty(),
            _ => true,
        })?;

        Some(UpdatePayload {
            product_id,
            fields: self.fields,
        })
    }
}

/// Update payload forwarded to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePayload {
    pub product_id: Value,
    #[serde(flatten)]
    pub fields: CreatePayload,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
