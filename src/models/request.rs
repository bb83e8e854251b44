use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::order::{OrdersId, ProductId, ProductOrderId};

/// Field-level validation failure on a request body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

/// Request bodies check their own fields before any handler logic runs.
///
/// A successful validation yields the value the handler forwards to the
/// order service.
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationError>;
}

/// Body of `PATCH /delivery/{deliveryId}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCodeRequest {
    pub delivery_code: Option<String>,
}

impl Validate for DeliveryCodeRequest {
    type Output = String;

    fn validate(self) -> Result<String, ValidationError> {
        match self.delivery_code {
            Some(code) if !code.trim().is_empty() => Ok(code),
            Some(_) => Err(ValidationError::new("deliveryCode", "must not be blank")),
            None => Err(ValidationError::new("deliveryCode", "must not be null")),
        }
    }
}

/// Body of `POST /order-cancel`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancelRequest {
    pub orders_id: Option<OrdersId>,
}

impl Validate for OrderCancelRequest {
    type Output = OrdersId;

    fn validate(self) -> Result<OrdersId, ValidationError> {
        self.orders_id
            .ok_or_else(|| ValidationError::new("ordersId", "must not be null"))
    }
}

/// Body of `POST /product-order-cancel`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOrderCancelRequest {
    pub product_order_id: Option<ProductOrderId>,
}

impl Validate for ProductOrderCancelRequest {
    type Output = ProductOrderId;

    fn validate(self) -> Result<ProductOrderId, ValidationError> {
        self.product_order_id
            .ok_or_else(|| ValidationError::new("productOrderId", "must not be null"))
    }
}

// Query strings

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerOrderQuery {
    pub is_auction: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerOrderQuery {
    pub order_date: String,
    pub product_id: ProductId,
    pub is_delivery_code_null: bool,
}

/// Admin variant of the seller listing; the delivery-code filter is not accepted here
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSellerOrderQuery {
    pub order_date: String,
    pub product_id: ProductId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettlementYearQuery {
    pub year: i32,
}

/// Raw paging parameters; resolved against the paging config by the extractor
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}
