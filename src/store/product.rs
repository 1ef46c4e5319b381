//! Product record and the request payloads that mutate it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Constructed only through [`ProductStore::create`]; `id` is assigned by
/// the store and never changes afterwards. Serialized camelCase to match
/// the wire format consumed by the storefront.
///
/// [`ProductStore::create`]: super::ProductStore::create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    /// Absent until the first successful update.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a product.
///
/// The required fields are `Option` here so that a missing `name`, `price`
/// or `stock` reaches the store and is rejected as a validation failure
/// (HTTP 400) instead of dying in deserialization. `price` and `stock` are
/// both accepted as JSON numbers for the same reason: a negative value must
/// fail validation, not parsing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<f64>,
    pub category: Option<String>,
}

/// Partial update payload.
///
/// An absent field keeps the previous value; a present field overwrites it.
/// The distinction matters for `description`: `"description": ""` clears it,
/// while omitting the key leaves the old text in place. `name` and
/// `category` keep the previous value when the supplied string trims to
/// empty, so a product can never end up with a blank name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<f64>,
    pub category: Option<String>,
}
