//! Product records and the payloads used to create or update them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog item as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_title: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub product_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    #[serde(default)]
    pub created_timestamp: String,
    #[serde(default)]
    pub updated_timestamp: String,
}

/// Mutable product fields, sent on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub product_title: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub product_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
}

/// Update payload: the record's id plus every mutable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub product_id: String,
    #[serde(flatten)]
    pub fields: ProductInput,
}

impl ProductUpdate {
    pub fn new(product_id: impl Into<String>, fields: ProductInput) -> Self {
        Self {
            product_id: product_id.into(),
            fields,
        }
    }
}
