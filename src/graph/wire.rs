//! GraphQL request and response envelopes.
//!
//! Operations implement [`GraphQLQuery`] by hand next to their wire types; no
//! schema file is involved. The transport posts a [`QueryBody`] and keeps
//! `data` undecoded so the cache can store it as is.

pub use graphql_client::{GraphQLQuery, QueryBody, Response};

/// Response envelope with `data` still as JSON.
pub type GraphResponse = Response<serde_json::Value>;
