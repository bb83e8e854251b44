pub mod fixture;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    ConsumerOrderList, ConsumerOrderListForAdmin, DeliveryId, MemberId, OrdersId, PageRequest,
    Point, ProductOrderId, SellerOrderFilter, SellerOrderList, SellerRankMonth,
    SettlementForAdmin, SettlementForSeller,
};

pub use fixture::{FixtureError, FixtureOrderService};

/// Error types raised by the order service.
///
/// The gateway never recovers from these; it maps each kind to a status
/// code and forwards the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    IllegalState(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Order, delivery and settlement business logic behind the gateway.
///
/// One method per gateway operation. Callers have already checked the
/// member's role; implementations only see ids and filters.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn get_consumer_order_list(
        &self,
        consumer_id: MemberId,
        is_auction: Option<bool>,
        page: &PageRequest,
    ) -> ServiceResult<ConsumerOrderList>;

    async fn get_consumer_order_list_for_admin(
        &self,
        consumer_id: MemberId,
        page: &PageRequest,
    ) -> ServiceResult<ConsumerOrderListForAdmin>;

    async fn get_seller_order_list(
        &self,
        seller_id: MemberId,
        filter: &SellerOrderFilter,
        page: &PageRequest,
    ) -> ServiceResult<SellerOrderList>;

    async fn get_settlement_for_admin(
        &self,
        seller_id: MemberId,
        year: i32,
    ) -> ServiceResult<Vec<SettlementForAdmin>>;

    async fn get_settlement_for_seller(
        &self,
        seller_id: MemberId,
        year: i32,
        month: u32,
    ) -> ServiceResult<SettlementForSeller>;

    async fn get_seller_rank_month(&self, year: i32, month: u32) -> ServiceResult<Vec<SellerRankMonth>>;

    async fn add_delivery_code(&self, delivery_id: DeliveryId, delivery_code: &str) -> ServiceResult<()>;

    async fn confirm_delivery(&self, delivery_id: DeliveryId) -> ServiceResult<()>;

    /// Returns the reward points granted for the confirmation
    async fn confirm_product_order(&self, product_order_id: ProductOrderId) -> ServiceResult<Point>;

    async fn cancel_order(&self, orders_id: OrdersId) -> ServiceResult<()>;

    async fn cancel_product_order(&self, product_order_id: ProductOrderId) -> ServiceResult<()>;
}
