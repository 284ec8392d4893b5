//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (validated, UI-ready)
//! - `wire.rs`: Raw serde structs matching the GraphQL selections
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `client.rs`: Sub-client with query methods

pub mod asset;
pub mod collection;
pub mod order;
pub mod wallet;
