// Recording order service for handler tests
use async_trait::async_trait;
use parking_lot::Mutex;

use super::{OrderService, ServiceError, ServiceResult};
use crate::models::{
    ConsumerOrderList, ConsumerOrderListForAdmin, DeliveryId, MemberId, OrdersId, Page,
    PageRequest, Point, ProductOrderId, SellerOrderFilter, SellerOrderList, SellerRankMonth,
    SettlementForAdmin, SettlementForSeller,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ConsumerOrderList {
        consumer_id: MemberId,
        is_auction: Option<bool>,
        page: PageRequest,
    },
    ConsumerOrderListForAdmin {
        consumer_id: MemberId,
        page: PageRequest,
    },
    SellerOrderList {
        seller_id: MemberId,
        filter: SellerOrderFilter,
        page: PageRequest,
    },
    SettlementForAdmin {
        seller_id: MemberId,
        year: i32,
    },
    SettlementForSeller {
        seller_id: MemberId,
        year: i32,
        month: u32,
    },
    SellerRankMonth {
        year: i32,
        month: u32,
    },
    AddDeliveryCode {
        delivery_id: DeliveryId,
        delivery_code: String,
    },
    ConfirmDelivery {
        delivery_id: DeliveryId,
    },
    ConfirmProductOrder {
        product_order_id: ProductOrderId,
    },
    CancelOrder {
        orders_id: OrdersId,
    },
    CancelProductOrder {
        product_order_id: ProductOrderId,
    },
}

/// Records every call and answers with canned data, or with `failure` when set
pub struct RecordingOrderService {
    calls: Mutex<Vec<Call>>,
    failure: Option<ServiceError>,
    point: Point,
}

impl RecordingOrderService {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
            point: 0,
        }
    }

    pub fn failing_with(error: ServiceError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    pub fn with_point(point: Point) -> Self {
        Self {
            point,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) -> ServiceResult<()> {
        self.calls.lock().push(call);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OrderService for RecordingOrderService {
    async fn get_consumer_order_list(
        &self,
        consumer_id: MemberId,
        is_auction: Option<bool>,
        page: &PageRequest,
    ) -> ServiceResult<ConsumerOrderList> {
        self.record(Call::ConsumerOrderList {
            consumer_id,
            is_auction,
            page: page.clone(),
        })?;
        Ok(Page::new(Vec::new(), page, 0))
    }

    async fn get_consumer_order_list_for_admin(
        &self,
        consumer_id: MemberId,
        page: &PageRequest,
    ) -> ServiceResult<ConsumerOrderListForAdmin> {
        self.record(Call::ConsumerOrderListForAdmin {
            consumer_id,
            page: page.clone(),
        })?;
        Ok(ConsumerOrderListForAdmin {
            consumer_id,
            orders: Page::new(Vec::new(), page, 0),
        })
    }

    async fn get_seller_order_list(
        &self,
        seller_id: MemberId,
        filter: &SellerOrderFilter,
        page: &PageRequest,
    ) -> ServiceResult<SellerOrderList> {
        self.record(Call::SellerOrderList {
            seller_id,
            filter: filter.clone(),
            page: page.clone(),
        })?;
        Ok(Page::new(Vec::new(), page, 0))
    }

    async fn get_settlement_for_admin(
        &self,
        seller_id: MemberId,
        year: i32,
    ) -> ServiceResult<Vec<SettlementForAdmin>> {
        self.record(Call::SettlementForAdmin { seller_id, year })?;
        Ok(vec![SettlementForAdmin {
            settlement_year: year,
            settlement_month: 1,
            total_amount: 100_000,
            commission: 10_000,
            settlement_amount: 90_000,
        }])
    }

    async fn get_settlement_for_seller(
        &self,
        seller_id: MemberId,
        year: i32,
        month: u32,
    ) -> ServiceResult<SettlementForSeller> {
        self.record(Call::SettlementForSeller {
            seller_id,
            year,
            month,
        })?;
        Ok(SettlementForSeller {
            settlement_year: year,
            settlement_month: month,
            total_amount: 50_000,
            commission: 5_000,
            settlement_amount: 45_000,
        })
    }

    async fn get_seller_rank_month(&self, year: i32, month: u32) -> ServiceResult<Vec<SellerRankMonth>> {
        self.record(Call::SellerRankMonth { year, month })?;
        Ok(Vec::new())
    }

    async fn add_delivery_code(&self, delivery_id: DeliveryId, delivery_code: &str) -> ServiceResult<()> {
        self.record(Call::AddDeliveryCode {
            delivery_id,
            delivery_code: delivery_code.to_string(),
        })
    }

    async fn confirm_delivery(&self, delivery_id: DeliveryId) -> ServiceResult<()> {
        self.record(Call::ConfirmDelivery { delivery_id })
    }

    async fn confirm_product_order(&self, product_order_id: ProductOrderId) -> ServiceResult<Point> {
        self.record(Call::ConfirmProductOrder { product_order_id })?;
        Ok(self.point)
    }

    async fn cancel_order(&self, orders_id: OrdersId) -> ServiceResult<()> {
        self.record(Call::CancelOrder { orders_id })
    }

    async fn cancel_product_order(&self, product_order_id: ProductOrderId) -> ServiceResult<()> {
        self.record(Call::CancelProductOrder { product_order_id })
    }
}
