use actix_web::{web, HttpResponse};
use log::debug;

use crate::api::error::ApiError;
use crate::api::extractors::{Member, MemberRoleHeader, Paging};
use crate::api::response::ResponseFormat;
use crate::models::{
    AdminSellerOrderQuery, ConsumerOrderQuery, MemberId, OrderCancelRequest,
    ProductOrderCancelRequest, ProductOrderConfirm, ProductOrderId, SellerOrderFilter,
    SellerOrderQuery, Validate,
};
use crate::security::{check_member_role, MemberRole};
use crate::service::OrderService;

// Get the caller's own orders (consumer)
pub async fn get_consumer_order_list(
    service: web::Data<dyn OrderService>,
    member: Member,
    query: web::Query<ConsumerOrderQuery>,
    paging: Paging,
) -> Result<HttpResponse, ApiError> {
    const REQUIRED: MemberRole = MemberRole::Consumer;
    check_member_role(member.role, REQUIRED)?;

    let orders = service
        .get_consumer_order_list(member.id, query.is_auction, &paging.into_inner())
        .await?;

    Ok(ResponseFormat::ok("order history retrieved", orders).into_response())
}

// Get one consumer's orders (admin)
pub async fn get_consumer_order_list_for_admin(
    service: web::Data<dyn OrderService>,
    role: MemberRoleHeader,
    path: web::Path<MemberId>,
    paging: Paging,
) -> Result<HttpResponse, ApiError> {
    const REQUIRED: MemberRole = MemberRole::Admin;
    check_member_role(role.0, REQUIRED)?;

    let orders = service
        .get_consumer_order_list_for_admin(path.into_inner(), &paging.into_inner())
        .await?;

    Ok(ResponseFormat::ok("order history retrieved", orders).into_response())
}

// Get the caller's own order lines (seller)
pub async fn get_seller_order_list(
    service: web::Data<dyn OrderService>,
    member: Member,
    query: web::Query<SellerOrderQuery>,
    paging: Paging,
) -> Result<HttpResponse, ApiError> {
    const REQUIRED: MemberRole = MemberRole::Seller;
    check_member_role(member.role, REQUIRED)?;

    let query = query.into_inner();
    let filter = SellerOrderFilter {
        order_date: query.order_date,
        product_id: query.product_id,
        is_delivery_code_null: query.is_delivery_code_null,
    };
    let orders = service
        .get_seller_order_list(member.id, &filter, &paging.into_inner())
        .await?;

    Ok(ResponseFormat::ok("order history retrieved", orders).into_response())
}

// Get one seller's order lines (admin); the delivery-code filter is pinned to false
pub async fn get_seller_order_list_for_admin(
    service: web::Data<dyn OrderService>,
    role: MemberRoleHeader,
    path: web::Path<MemberId>,
    query: web::Query<AdminSellerOrderQuery>,
    paging: Paging,
) -> Result<HttpResponse, ApiError> {
    const REQUIRED: MemberRole = MemberRole::Admin;
    check_member_role(role.0, REQUIRED)?;

    let query = query.into_inner();
    let filter = SellerOrderFilter {
        order_date: query.order_date,
        product_id: query.product_id,
        is_delivery_code_null: false,
    };
    let orders = service
        .get_seller_order_list(path.into_inner(), &filter, &paging.into_inner())
        .await?;

    Ok(ResponseFormat::ok("order history retrieved", orders).into_response())
}

// Confirm receipt of a product order and collect its reward points
pub async fn confirm_product_order(
    service: web::Data<dyn OrderService>,
    path: web::Path<ProductOrderId>,
    role: MemberRoleHeader,
) -> Result<HttpResponse, ApiError> {
    const REQUIRED: MemberRole = MemberRole::Consumer;
    check_member_role(role.0, REQUIRED)?;

    let point = service.confirm_product_order(path.into_inner()).await?;

    Ok(ResponseFormat::ok("product order confirmed", ProductOrderConfirm { point }).into_response())
}

// Cancel a whole order
pub async fn cancel_order(
    service: web::Data<dyn OrderService>,
    body: web::Json<OrderCancelRequest>,
    role: MemberRoleHeader,
) -> Result<HttpResponse, ApiError> {
    const REQUIRED: MemberRole = MemberRole::Consumer;
    let orders_id = body.into_inner().validate()?;
    check_member_role(role.0, REQUIRED)?;

    service.cancel_order(orders_id).await?;
    debug!("Order {} cancelled", orders_id);

    Ok(ResponseFormat::ok_empty("order cancelled").into_response())
}

// Cancel a single product order
pub async fn cancel_product_order(
    service: web::Data<dyn OrderService>,
    body: web::Json<ProductOrderCancelRequest>,
    role: MemberRoleHeader,
) -> Result<HttpResponse, ApiError> {
    const REQUIRED: MemberRole = MemberRole::Consumer;
    let product_order_id = body.into_inner().validate()?;
    check_member_role(role.0, REQUIRED)?;

    service.cancel_product_order(product_order_id).await?;
    debug!("Product order {} cancelled", product_order_id);

    Ok(ResponseFormat::ok_empty("product order cancelled").into_response())
}
