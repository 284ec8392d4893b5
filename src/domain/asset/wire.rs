//! Wire types for the `assets` query.

use crate::domain::asset::AssetQueryVars;
use crate::graph::wire::{GraphQLQuery, QueryBody};
use crate::graph::GET_ITEMS;
use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The `GetItems` operation.
pub struct GetItems;

impl GraphQLQuery for GetItems {
    type Variables = AssetQueryVars;
    type ResponseData = AssetsData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GET_ITEMS,
            operation_name: "GetItems",
        }
    }
}

/// `data` object of `GetItems`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetsData {
    pub assets: AssetsPage,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetsPage {
    #[serde(default)]
    pub assets: Vec<AssetResponse>,
    #[serde(default)]
    pub has_more: bool,
}

/// Raw asset row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponse {
    #[serde(default, deserialize_with = "serde_util::opt_string_or_number::deserialize")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub pic_url: Option<String>,
    #[serde(default, deserialize_with = "serde_util::decimal_lenient::deserialize")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub status: i32,
    pub category_id: Option<i64>,
    pub collection_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_data_deserialize() {
        let json = r#"{
            "assets": {
                "assets": [
                    {"id": 3, "name": "Mask #3", "picUrl": "https://img/3.png", "price": "12.5",
                     "status": 1, "categoryId": 2, "collectionId": 9}
                ],
                "hasMore": true
            }
        }"#;
        let data: AssetsData = serde_json::from_str(json).unwrap();
        assert!(data.assets.has_more);
        let row = &data.assets.assets[0];
        assert_eq!(row.id.as_deref(), Some("3"));
        assert_eq!(row.price, Some(Decimal::new(125, 1)));
        assert_eq!(row.collection_id, Some(9));
    }

    #[test]
    fn test_build_query_carries_document_and_variables() {
        let body = GetItems::build_query(AssetQueryVars::default().in_collection(9));
        assert_eq!(body.operation_name, "GetItems");
        assert!(body.query.contains("query GetItems"));
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["variables"]["collectionId"], 9);
        assert_eq!(v["variables"]["pageSize"], 10);
    }

    #[test]
    fn test_nullable_fields() {
        let json = r#"{"id": null, "name": null, "picUrl": null, "price": null,
                       "status": 0, "categoryId": null, "collectionId": null}"#;
        let row: AssetResponse = serde_json::from_str(json).unwrap();
        assert!(row.id.is_none());
        assert!(row.price.is_none());
    }
}
