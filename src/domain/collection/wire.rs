//! Wire types for the `collections` queries.

use crate::domain::collection::CollectionQueryVars;
use crate::graph::wire::{GraphQLQuery, QueryBody};
use crate::graph::{GET_COLLECTIONS, GET_MY_COLLECTIONS};
use crate::shared::{serde_util, Address};
use serde::{Deserialize, Serialize};

/// The `GetCollections` operation.
pub struct GetCollections;

impl GraphQLQuery for GetCollections {
    type Variables = CollectionQueryVars;
    type ResponseData = CollectionsData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GET_COLLECTIONS,
            operation_name: "GetCollections",
        }
    }
}

/// The `GetMyCollections` operation.
pub struct GetMyCollections;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MyCollectionsVars {
    pub user: Address,
}

impl GraphQLQuery for GetMyCollections {
    type Variables = MyCollectionsVars;
    type ResponseData = CollectionsData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GET_MY_COLLECTIONS,
            operation_name: "GetMyCollections",
        }
    }
}

/// `data` object of `GetCollections` and `GetMyCollections`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionsData {
    pub collections: CollectionsPage,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionsPage {
    #[serde(default)]
    pub collections: Vec<CollectionResponse>,
    #[serde(default)]
    pub has_more: bool,
}

/// Raw collection row; which fields are present depends on the selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    #[serde(default, deserialize_with = "serde_util::opt_string_or_number::deserialize")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
}
