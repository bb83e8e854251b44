// src/service/fixture.rs - In-memory order service loaded from a JSON fixture
//
// Serves precomputed orders, settlements and rankings so the gateway can run
// without the real order backend. Nothing here computes a settlement.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::{debug, info};
use parking_lot::RwLock;
use serde::Deserialize;
use thiserror::Error;

use super::{OrderService, ServiceError, ServiceResult};
use crate::models::{
    ConsumerOrder, ConsumerOrderList, ConsumerOrderListForAdmin, ConsumerProductOrder,
    DeliveryId, Direction, MemberId, OrdersId, Page, PageRequest, Point, ProductOrderId,
    SellerOrder, SellerOrderFilter, SellerOrderList, SellerRankMonth, SettlementForAdmin,
    SettlementForSeller, DEFAULT_SORT_PROPERTY,
};

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("failed to read fixture file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid fixture data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureData {
    #[serde(default)]
    orders: Vec<FixtureOrder>,
    #[serde(default)]
    settlements: Vec<FixtureSettlement>,
    #[serde(default)]
    seller_ranks: Vec<FixtureRank>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureOrder {
    orders_id: OrdersId,
    consumer_id: MemberId,
    order_date: NaiveDateTime,
    total_price: i64,
    #[serde(default)]
    is_auction: bool,
    #[serde(default)]
    is_cancelled: bool,
    product_orders: Vec<FixtureProductOrder>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureProductOrder {
    #[serde(flatten)]
    line: ConsumerProductOrder,
    #[serde(default)]
    point: Point,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureSettlement {
    seller_id: MemberId,
    #[serde(flatten)]
    settlement: SettlementForAdmin,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureRank {
    settlement_year: i32,
    settlement_month: u32,
    #[serde(flatten)]
    rank: SellerRankMonth,
}

impl FixtureOrder {
    fn to_consumer_order(&self) -> ConsumerOrder {
        ConsumerOrder {
            orders_id: self.orders_id,
            order_date: self.order_date,
            total_price: self.total_price,
            is_auction: self.is_auction,
            is_cancelled: self.is_cancelled,
            product_orders: self.product_orders.iter().map(|p| p.line.clone()).collect(),
        }
    }

    fn to_seller_order(&self, product_order: &FixtureProductOrder) -> SellerOrder {
        let line = &product_order.line;
        SellerOrder {
            orders_id: self.orders_id,
            product_order_id: line.product_order_id,
            order_date: self.order_date,
            consumer_id: self.consumer_id,
            product_id: line.product_id.clone(),
            product_name: line.product_name.clone(),
            product_count: line.product_count,
            product_price: line.product_price,
            is_confirmed: line.is_confirmed,
            is_cancelled: line.is_cancelled,
            delivery: line.delivery.clone(),
        }
    }
}

/// Order service backed by an in-memory copy of a fixture file
pub struct FixtureOrderService {
    data: RwLock<FixtureData>,
}

impl FixtureOrderService {
    /// Service with no orders, settlements or rankings
    pub fn empty() -> Self {
        Self {
            data: RwLock::new(FixtureData::default()),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        let data: FixtureData = serde_json::from_str(json)?;
        info!(
            "Loaded fixture: {} orders, {} settlements, {} seller ranks",
            data.orders.len(),
            data.settlements.len(),
            data.seller_ranks.len()
        );

        Ok(Self {
            data: RwLock::new(data),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let json = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// Only the order date is sortable; anything else is the caller's mistake
fn check_sort(page: &PageRequest) -> ServiceResult<Direction> {
    if page.sort.property != DEFAULT_SORT_PROPERTY {
        return Err(ServiceError::InvalidArgument(format!(
            "unsupported sort property: {}",
            page.sort.property
        )));
    }
    Ok(page.sort.direction)
}

fn sort_by_date<T, F>(items: &mut [T], direction: Direction, key: F)
where
    F: Fn(&T) -> (NaiveDateTime, i64),
{
    items.sort_by(|a, b| match direction {
        Direction::Asc => key(a).cmp(&key(b)),
        Direction::Desc => key(b).cmp(&key(a)),
    });
}

/// Empty strings and the literal `null` mean "no filter"
fn is_wildcard(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("null")
}

fn matches_order_date(order_date: &NaiveDateTime, filter: &str) -> bool {
    if is_wildcard(filter) {
        return true;
    }
    let wanted: String = filter.chars().filter(|c| c.is_ascii_digit()).collect();
    if wanted.is_empty() {
        return false;
    }
    order_date.format("%Y%m%d").to_string().starts_with(&wanted)
}

fn product_order_mut(
    data: &mut FixtureData,
    product_order_id: ProductOrderId,
) -> ServiceResult<&mut FixtureProductOrder> {
    data.orders
        .iter_mut()
        .flat_map(|order| order.product_orders.iter_mut())
        .find(|p| p.line.product_order_id == product_order_id)
        .ok_or_else(|| {
            ServiceError::NotFound(format!("product order {} not found", product_order_id))
        })
}

fn delivery_owner_mut(
    data: &mut FixtureData,
    delivery_id: DeliveryId,
) -> ServiceResult<&mut FixtureProductOrder> {
    data.orders
        .iter_mut()
        .flat_map(|order| order.product_orders.iter_mut())
        .find(|p| p.line.delivery.delivery_id == delivery_id)
        .ok_or_else(|| ServiceError::NotFound(format!("delivery {} not found", delivery_id)))
}

#[async_trait]
impl OrderService for FixtureOrderService {
    async fn get_consumer_order_list(
        &self,
        consumer_id: MemberId,
        is_auction: Option<bool>,
        page: &PageRequest,
    ) -> ServiceResult<ConsumerOrderList> {
        let direction = check_sort(page)?;
        let data = self.data.read();

        let mut orders: Vec<ConsumerOrder> = data
            .orders
            .iter()
            .filter(|o| o.consumer_id == consumer_id)
            .filter(|o| is_auction.map_or(true, |wanted| o.is_auction == wanted))
            .map(FixtureOrder::to_consumer_order)
            .collect();
        sort_by_date(&mut orders, direction, |o| (o.order_date, o.orders_id));

        Ok(Page::slice(orders, page))
    }

    async fn get_consumer_order_list_for_admin(
        &self,
        consumer_id: MemberId,
        page: &PageRequest,
    ) -> ServiceResult<ConsumerOrderListForAdmin> {
        let orders = self.get_consumer_order_list(consumer_id, None, page).await?;
        Ok(ConsumerOrderListForAdmin { consumer_id, orders })
    }

    async fn get_seller_order_list(
        &self,
        seller_id: MemberId,
        filter: &SellerOrderFilter,
        page: &PageRequest,
    ) -> ServiceResult<SellerOrderList> {
        let direction = check_sort(page)?;
        let data = self.data.read();

        let mut lines: Vec<SellerOrder> = data
            .orders
            .iter()
            .filter(|o| matches_order_date(&o.order_date, &filter.order_date))
            .flat_map(move |o| {
                o.product_orders
                    .iter()
                    .filter(move |p| p.line.seller_id == seller_id)
                    .filter(move |p| is_wildcard(&filter.product_id) || p.line.product_id == filter.product_id)
                    .filter(move |p| !filter.is_delivery_code_null || p.line.delivery.delivery_code.is_none())
                    .map(move |p| o.to_seller_order(p))
            })
            .collect();
        sort_by_date(&mut lines, direction, |l| (l.order_date, l.product_order_id));

        Ok(Page::slice(lines, page))
    }

    async fn get_settlement_for_admin(
        &self,
        seller_id: MemberId,
        year: i32,
    ) -> ServiceResult<Vec<SettlementForAdmin>> {
        let data = self.data.read();
        let mut rows: Vec<SettlementForAdmin> = data
            .settlements
            .iter()
            .filter(|s| s.seller_id == seller_id && s.settlement.settlement_year == year)
            .map(|s| s.settlement.clone())
            .collect();
        rows.sort_by_key(|s| s.settlement_month);

        Ok(rows)
    }

    async fn get_settlement_for_seller(
        &self,
        seller_id: MemberId,
        year: i32,
        month: u32,
    ) -> ServiceResult<SettlementForSeller> {
        let data = self.data.read();
        data.settlements
            .iter()
            .find(|s| {
                s.seller_id == seller_id
                    && s.settlement.settlement_year == year
                    && s.settlement.settlement_month == month
            })
            .map(|s| SettlementForSeller {
                settlement_year: s.settlement.settlement_year,
                settlement_month: s.settlement.settlement_month,
                total_amount: s.settlement.total_amount,
                commission: s.settlement.commission,
                settlement_amount: s.settlement.settlement_amount,
            })
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "no settlement for seller {} in {}-{:02}",
                    seller_id, year, month
                ))
            })
    }

    async fn get_seller_rank_month(&self, year: i32, month: u32) -> ServiceResult<Vec<SellerRankMonth>> {
        let data = self.data.read();
        let mut ranks: Vec<SellerRankMonth> = data
            .seller_ranks
            .iter()
            .filter(|r| r.settlement_year == year && r.settlement_month == month)
            .map(|r| r.rank.clone())
            .collect();
        ranks.sort_by(|a, b| b.total_price.cmp(&a.total_price));

        Ok(ranks)
    }

    async fn add_delivery_code(&self, delivery_id: DeliveryId, delivery_code: &str) -> ServiceResult<()> {
        let mut data = self.data.write();
        let product_order = delivery_owner_mut(&mut data, delivery_id)?;
        if product_order.line.is_cancelled {
            return Err(ServiceError::IllegalState(format!(
                "product order {} is cancelled",
                product_order.line.product_order_id
            )));
        }

        product_order.line.delivery.delivery_code = Some(delivery_code.to_string());
        debug!("Registered delivery code for delivery {}", delivery_id);
        Ok(())
    }

    async fn confirm_delivery(&self, delivery_id: DeliveryId) -> ServiceResult<()> {
        let mut data = self.data.write();
        let product_order = delivery_owner_mut(&mut data, delivery_id)?;

        product_order.line.delivery.is_confirmed = true;
        debug!("Confirmed delivery {}", delivery_id);
        Ok(())
    }

    async fn confirm_product_order(&self, product_order_id: ProductOrderId) -> ServiceResult<Point> {
        let mut data = self.data.write();
        let product_order = product_order_mut(&mut data, product_order_id)?;
        if product_order.line.is_cancelled {
            return Err(ServiceError::IllegalState(format!(
                "product order {} is cancelled",
                product_order_id
            )));
        }
        if product_order.line.is_confirmed {
            return Err(ServiceError::IllegalState(format!(
                "product order {} is already confirmed",
                product_order_id
            )));
        }

        product_order.line.is_confirmed = true;
        debug!("Confirmed product order {}", product_order_id);
        Ok(product_order.point)
    }

    async fn cancel_order(&self, orders_id: OrdersId) -> ServiceResult<()> {
        let mut data = self.data.write();
        let order = data
            .orders
            .iter_mut()
            .find(|o| o.orders_id == orders_id)
            .ok_or_else(|| ServiceError::NotFound(format!("order {} not found", orders_id)))?;

        if order.is_cancelled {
            return Err(ServiceError::IllegalState(format!(
                "order {} is already cancelled",
                orders_id
            )));
        }
        if order.product_orders.iter().any(|p| p.line.is_confirmed) {
            return Err(ServiceError::IllegalState(format!(
                "order {} has confirmed product orders",
                orders_id
            )));
        }

        order.is_cancelled = true;
        for product_order in order.product_orders.iter_mut() {
            product_order.line.is_cancelled = true;
        }
        debug!("Cancelled order {}", orders_id);
        Ok(())
    }

    async fn cancel_product_order(&self, product_order_id: ProductOrderId) -> ServiceResult<()> {
        let mut data = self.data.write();
        let order = data
            .orders
            .iter_mut()
            .find(|o| {
                o.product_orders
                    .iter()
                    .any(|p| p.line.product_order_id == product_order_id)
            })
            .ok_or_else(|| {
                ServiceError::NotFound(format!("product order {} not found", product_order_id))
            })?;

        for product_order in order.product_orders.iter_mut() {
            if product_order.line.product_order_id != product_order_id {
                continue;
            }
            if product_order.line.is_cancelled || product_order.line.is_confirmed {
                return Err(ServiceError::IllegalState(format!(
                    "product order {} can no longer be cancelled",
                    product_order_id
                )));
            }
            product_order.line.is_cancelled = true;
        }

        // An order whose every line is cancelled is cancelled as a whole
        if order.product_orders.iter().all(|p| p.line.is_cancelled) {
            order.is_cancelled = true;
        }
        debug!("Cancelled product order {}", product_order_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sort;

    const FIXTURE: &str = r#"{
        "orders": [
            {
                "ordersId": 1, "consumerId": 10, "orderDate": "2023-09-01T10:00:00",
                "totalPrice": 30000, "isAuction": false,
                "productOrders": [
                    {
                        "productOrderId": 100, "productId": "makgeolli-1", "productName": "Makgeolli",
                        "productCount": 2, "productPrice": 15000, "sellerId": 20,
                        "isConfirmed": false, "isCancelled": false, "point": 300,
                        "delivery": { "deliveryId": 1000, "deliveryCode": null, "isConfirmed": false }
                    }
                ]
            },
            {
                "ordersId": 2, "consumerId": 10, "orderDate": "2023-10-05T09:30:00",
                "totalPrice": 12000, "isAuction": true,
                "productOrders": [
                    {
                        "productOrderId": 200, "productId": "soju-1", "productName": "Soju",
                        "productCount": 1, "productPrice": 12000, "sellerId": 20,
                        "isConfirmed": false, "isCancelled": false, "point": 120,
                        "delivery": { "deliveryId": 2000, "deliveryCode": "CJ-1", "isConfirmed": false }
                    },
                    {
                        "productOrderId": 201, "productId": "wine-1", "productName": "Wine",
                        "productCount": 1, "productPrice": 0, "sellerId": 21,
                        "isConfirmed": false, "isCancelled": false,
                        "delivery": { "deliveryId": 2001, "deliveryCode": null, "isConfirmed": false }
                    }
                ]
            }
        ],
        "settlements": [
            { "sellerId": 20, "settlementYear": 2023, "settlementMonth": 10,
              "totalAmount": 12000, "commission": 1200, "settlementAmount": 10800 },
            { "sellerId": 20, "settlementYear": 2023, "settlementMonth": 9,
              "totalAmount": 30000, "commission": 3000, "settlementAmount": 27000 }
        ],
        "sellerRanks": [
            { "settlementYear": 2023, "settlementMonth": 10, "sellerId": 21, "sellerName": "B", "totalPrice": 500 },
            { "settlementYear": 2023, "settlementMonth": 10, "sellerId": 20, "sellerName": "A", "totalPrice": 12000 }
        ]
    }"#;

    fn service() -> FixtureOrderService {
        FixtureOrderService::from_json_str(FIXTURE).unwrap()
    }

    fn first_page() -> PageRequest {
        PageRequest::new(0, 20, Sort::default())
    }

    fn all_sellers_filter() -> SellerOrderFilter {
        SellerOrderFilter {
            order_date: "null".to_string(),
            product_id: "null".to_string(),
            is_delivery_code_null: false,
        }
    }

    #[tokio::test]
    async fn test_consumer_orders_newest_first() {
        let page = service()
            .get_consumer_order_list(10, None, &first_page())
            .await
            .unwrap();

        let ids: Vec<_> = page.content.iter().map(|o| o.orders_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(page.total_elements, 2);
    }

    #[tokio::test]
    async fn test_consumer_orders_auction_filter() {
        let page = service()
            .get_consumer_order_list(10, Some(false), &first_page())
            .await
            .unwrap();

        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].orders_id, 1);
    }

    #[tokio::test]
    async fn test_unsupported_sort_property() {
        let page = PageRequest::new(0, 20, Sort::new("totalPrice", Direction::Asc));
        let err = service()
            .get_consumer_order_list(10, None, &page)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_seller_orders_only_include_own_lines() {
        let page = service()
            .get_seller_order_list(20, &all_sellers_filter(), &first_page())
            .await
            .unwrap();

        let ids: Vec<_> = page.content.iter().map(|l| l.product_order_id).collect();
        assert_eq!(ids, vec![200, 100]);
    }

    #[tokio::test]
    async fn test_seller_orders_filters() {
        let svc = service();

        let mut filter = all_sellers_filter();
        filter.is_delivery_code_null = true;
        let page = svc.get_seller_order_list(20, &filter, &first_page()).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].product_order_id, 100);

        let mut filter = all_sellers_filter();
        filter.order_date = "202310".to_string();
        let page = svc.get_seller_order_list(20, &filter, &first_page()).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].product_order_id, 200);

        let mut filter = all_sellers_filter();
        filter.product_id = "makgeolli-1".to_string();
        let page = svc.get_seller_order_list(20, &filter, &first_page()).await.unwrap();
        assert_eq!(page.content.len(), 1);
    }

    #[tokio::test]
    async fn test_order_date_filter_without_digits_matches_nothing() {
        let mut filter = all_sellers_filter();
        filter.order_date = "abc".to_string();
        let page = service()
            .get_seller_order_list(20, &filter, &first_page())
            .await
            .unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
    }

    #[tokio::test]
    async fn test_settlements() {
        let svc = service();

        let yearly = svc.get_settlement_for_admin(20, 2023).await.unwrap();
        let months: Vec<_> = yearly.iter().map(|s| s.settlement_month).collect();
        assert_eq!(months, vec![9, 10]);

        let monthly = svc.get_settlement_for_seller(20, 2023, 9).await.unwrap();
        assert_eq!(monthly.settlement_amount, 27000);

        let missing = svc.get_settlement_for_seller(20, 2022, 1).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_seller_rank_sorted_by_total() {
        let ranks = service().get_seller_rank_month(2023, 10).await.unwrap();
        let sellers: Vec<_> = ranks.iter().map(|r| r.seller_id).collect();
        assert_eq!(sellers, vec![20, 21]);
    }

    #[tokio::test]
    async fn test_delivery_code_and_confirmation() {
        let svc = service();

        svc.add_delivery_code(1000, "CJ-42").await.unwrap();
        svc.confirm_delivery(1000).await.unwrap();

        let page = svc
            .get_consumer_order_list(10, Some(false), &first_page())
            .await
            .unwrap();
        let delivery = &page.content[0].product_orders[0].delivery;
        assert_eq!(delivery.delivery_code.as_deref(), Some("CJ-42"));
        assert!(delivery.is_confirmed);

        let missing = svc.confirm_delivery(9999).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_confirm_product_order_returns_point_once() {
        let svc = service();

        assert_eq!(svc.confirm_product_order(100).await.unwrap(), 300);
        let again = svc.confirm_product_order(100).await;
        assert!(matches!(again, Err(ServiceError::IllegalState(_))));
    }

    #[tokio::test]
    async fn test_cancel_order_cancels_every_line() {
        let svc = service();
        svc.cancel_order(2).await.unwrap();

        let page = svc
            .get_consumer_order_list(10, Some(true), &first_page())
            .await
            .unwrap();
        let order = &page.content[0];
        assert!(order.is_cancelled);
        assert!(order.product_orders.iter().all(|p| p.is_cancelled));

        let again = svc.cancel_order(2).await;
        assert!(matches!(again, Err(ServiceError::IllegalState(_))));
    }

    #[tokio::test]
    async fn test_cancel_last_product_order_cancels_order() {
        let svc = service();
        svc.cancel_product_order(200).await.unwrap();

        let page = svc
            .get_consumer_order_list(10, Some(true), &first_page())
            .await
            .unwrap();
        assert!(!page.content[0].is_cancelled);

        svc.cancel_product_order(201).await.unwrap();
        let page = svc
            .get_consumer_order_list(10, Some(true), &first_page())
            .await
            .unwrap();
        assert!(page.content[0].is_cancelled);
    }

    #[tokio::test]
    async fn test_confirmed_order_cannot_be_cancelled() {
        let svc = service();
        svc.confirm_product_order(100).await.unwrap();

        assert!(matches!(svc.cancel_order(1).await, Err(ServiceError::IllegalState(_))));
        assert!(matches!(
            svc.cancel_product_order(100).await,
            Err(ServiceError::IllegalState(_))
        ));
    }

    #[test]
    fn test_from_file_reports_missing_path() {
        let err = FixtureOrderService::from_file(Path::new("/nonexistent/fixture.json"))
            .err()
            .unwrap();
        assert!(matches!(err, FixtureError::Io { .. }));
    }
}
