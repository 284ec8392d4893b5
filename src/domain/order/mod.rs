//! Order domain: sale listing requests and the order-creation seam.
//!
//! Order creation itself (signing, submitting the extrinsic) belongs to the
//! wallet side. This module only fixes the call contract: one request in, one
//! discriminated outcome out.

use crate::error::OrderError;
use crate::shared::{Address, ClassId, TokenId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A request to list an asset for sale. Built by the sales form, consumed by
/// one [`OrderCreator::create_order`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParams {
    pub address: Address,
    /// Index into the category list the form offered.
    pub category_id: u32,
    /// Pledge deposit.
    pub deposit: Decimal,
    pub price: Decimal,
    pub class_id: ClassId,
    pub token_id: TokenId,
}

/// Successful order creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// Hash of the submitted transaction, when the creator reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

/// The external order-creation call.
pub trait OrderCreator {
    fn create_order(
        &self,
        params: OrderParams,
    ) -> impl Future<Output = Result<OrderReceipt, OrderError>>;
}
