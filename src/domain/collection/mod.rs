//! Collection domain: named groupings of assets.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "http")]
pub use client::CollectionsOperation;

/// A collection from the public listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    pub category_id: Option<i64>,
}

/// A collection from the connected user's listing, which only carries the
/// category reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedCollection {
    pub category_id: i64,
}

/// Variables of the public listing. Defaults: `offset = 0`, `limit = 20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionQueryVars {
    pub offset: u32,
    pub limit: u32,
}

impl Default for CollectionQueryVars {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
        }
    }
}

#[derive(Debug)]
pub enum ValidationError {
    MissingId,
    InvalidId(String),
    MissingName(i64),
    MissingCategory,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingId => write!(f, "Collection without id"),
            ValidationError::InvalidId(raw) => write!(f, "Collection id {:?} is not numeric", raw),
            ValidationError::MissingName(id) => write!(f, "Collection {} without name", id),
            ValidationError::MissingCategory => write!(f, "Owned collection without category"),
        }
    }
}

impl std::error::Error for ValidationError {}
