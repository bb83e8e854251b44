use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::page::Page;

// Define core types
pub type MemberId = i64;
pub type OrdersId = i64;
pub type ProductOrderId = i64;
pub type DeliveryId = i64;
pub type ProductId = String;
pub type Point = i64;

/// Delivery attached to a product order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    pub delivery_id: DeliveryId,
    pub delivery_code: Option<String>,
    pub is_confirmed: bool,
}

/// A line item as shown to the consumer who bought it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerProductOrder {
    pub product_order_id: ProductOrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_count: u32,
    pub product_price: i64,
    pub seller_id: MemberId,
    pub is_confirmed: bool,
    pub is_cancelled: bool,
    pub delivery: DeliveryInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerOrder {
    pub orders_id: OrdersId,
    pub order_date: NaiveDateTime,
    pub total_price: i64,
    pub is_auction: bool,
    pub is_cancelled: bool,
    pub product_orders: Vec<ConsumerProductOrder>,
}

/// Orders listed for the consumer who placed them
pub type ConsumerOrderList = Page<ConsumerOrder>;

/// Orders of one consumer as audited by an admin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerOrderListForAdmin {
    pub consumer_id: MemberId,
    pub orders: Page<ConsumerOrder>,
}

/// A line item as shown to the seller who has to ship it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerOrder {
    pub orders_id: OrdersId,
    pub product_order_id: ProductOrderId,
    pub order_date: NaiveDateTime,
    pub consumer_id: MemberId,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_count: u32,
    pub product_price: i64,
    pub is_confirmed: bool,
    pub is_cancelled: bool,
    pub delivery: DeliveryInfo,
}

pub type SellerOrderList = Page<SellerOrder>;

/// Filters for a seller order listing.
///
/// `order_date` and `product_id` are passed through verbatim; their matching
/// rules belong to the order service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerOrderFilter {
    pub order_date: String,
    pub product_id: ProductId,
    pub is_delivery_code_null: bool,
}

/// Reward handed out when a consumer confirms a product order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOrderConfirm {
    pub point: Point,
}
