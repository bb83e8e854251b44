use actix_web::{web, HttpResponse};

use crate::api::error::ApiError;
use crate::api::extractors::{Member, MemberRoleHeader};
use crate::api::response::ResponseFormat;
use crate::models::{MemberId, SettlementYearQuery};
use crate::security::{check_member_role, MemberRole};
use crate::service::OrderService;

// Get a seller's monthly settlements for a year (admin)
pub async fn get_settlement_for_admin(
    service: web::Data<dyn OrderService>,
    path: web::Path<MemberId>,
    query: web::Query<SettlementYearQuery>,
    role: MemberRoleHeader,
) -> Result<HttpResponse, ApiError> {
    const REQUIRED: MemberRole = MemberRole::Admin;
    check_member_role(role.0, REQUIRED)?;

    let settlements = service
        .get_settlement_for_admin(path.into_inner(), query.year)
        .await?;

    Ok(ResponseFormat::ok("seller settlement retrieved", settlements).into_response())
}

// Get the caller's own settlement for a month (seller)
pub async fn get_settlement_for_seller(
    service: web::Data<dyn OrderService>,
    path: web::Path<(i32, u32)>,
    member: Member,
) -> Result<HttpResponse, ApiError> {
    const REQUIRED: MemberRole = MemberRole::Seller;
    check_member_role(member.role, REQUIRED)?;

    let (year, month) = path.into_inner();
    let settlement = service
        .get_settlement_for_seller(member.id, year, month)
        .await?;

    Ok(ResponseFormat::ok("settlement retrieved", settlement).into_response())
}

// Get the monthly seller sales ranking (admin)
pub async fn get_seller_rank_month(
    service: web::Data<dyn OrderService>,
    path: web::Path<(i32, u32)>,
    role: MemberRoleHeader,
) -> Result<HttpResponse, ApiError> {
    const REQUIRED: MemberRole = MemberRole::Admin;
    check_member_role(role.0, REQUIRED)?;

    let (year, month) = path.into_inner();
    let ranks = service.get_seller_rank_month(year, month).await?;

    Ok(ResponseFormat::ok("seller ranking retrieved", ranks).into_response())
}
