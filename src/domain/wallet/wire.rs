//! Wire types for the `user` query.

use crate::graph::wire::{GraphQLQuery, QueryBody};
use crate::graph::GET_MY_WALLET;
use crate::shared::serde_util;
use serde::{Deserialize, Serialize};

/// The `GetMyWallet` operation; takes no variables.
pub struct GetMyWallet;

impl GraphQLQuery for GetMyWallet {
    type Variables = ();
    type ResponseData = UserData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GET_MY_WALLET,
            operation_name: "GetMyWallet",
        }
    }
}

/// `data` object of `GetMyWallet`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserData {
    pub user: Option<UserResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(default)]
    pub wallet: Option<OneOrMany<WalletResponse>>,
    #[serde(default)]
    pub has_more: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletResponse {
    #[serde(deserialize_with = "serde_util::string_or_number::deserialize")]
    pub id: String,
}

/// A field the backend returns either as an object or as a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}
