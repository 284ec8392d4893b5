//! Asset domain: tradable collectibles and their listing query.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::AssetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "http")]
pub use client::AssetsOperation;

// ─── Asset ───────────────────────────────────────────────────────────────────

/// A collectible as listed by the backend. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub pic_url: Option<String>,
    /// Listing price; `None` when the asset is not for sale.
    pub price: Option<Decimal>,
    /// Backend status code, passed through untouched.
    pub status: i32,
    pub category_id: Option<i64>,
    pub collection_id: Option<i64>,
}

// ─── Query variables ─────────────────────────────────────────────────────────

/// Variables of the asset listing. Defaults: `page = 1`, `page_size = 10`,
/// no filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetQueryVars {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl Default for AssetQueryVars {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            collection_id: None,
            category_id: None,
            status: None,
        }
    }
}

impl AssetQueryVars {
    pub fn in_collection(mut self, collection_id: i64) -> Self {
        self.collection_id = Some(collection_id);
        self
    }

    pub fn in_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_status(mut self, status: i32) -> Self {
        self.status = Some(status);
        self
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingId,
    MissingName,
    NegativePrice(Decimal),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Asset validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingName => write!(f, "Missing name"),
            ValidationError::NegativePrice(p) => write!(f, "Negative price {}", p),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_vars() {
        let vars = AssetQueryVars::default();
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({"page": 1, "pageSize": 10})
        );
    }

    #[test]
    fn test_filters_serialize_camel_case() {
        let vars = AssetQueryVars::default().in_collection(7).in_category(2).with_status(1);
        let v = serde_json::to_value(&vars).unwrap();
        assert_eq!(v["collectionId"], 7);
        assert_eq!(v["categoryId"], 2);
        assert_eq!(v["status"], 1);
        assert_eq!(v["page"], 1);
    }
}
