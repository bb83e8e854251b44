use actix_web::{web, HttpResponse};
use log::debug;

use crate::api::error::ApiError;
use crate::api::extractors::MemberRoleHeader;
use crate::api::response::ResponseFormat;
use crate::models::{DeliveryCodeRequest, DeliveryId, Validate};
use crate::security::{check_member_role, MemberRole};
use crate::service::OrderService;

/// Register the tracking code of a shipment.
///
/// The body is validated before the role check, so a blank code is a
/// validation error whoever sends it.
pub async fn add_delivery_code(
    service: web::Data<dyn OrderService>,
    path: web::Path<DeliveryId>,
    body: web::Json<DeliveryCodeRequest>,
    role: MemberRoleHeader,
) -> Result<HttpResponse, ApiError> {
    const REQUIRED: MemberRole = MemberRole::Seller;
    let delivery_code = body.into_inner().validate()?;
    check_member_role(role.0, REQUIRED)?;

    let delivery_id = path.into_inner();
    service.add_delivery_code(delivery_id, &delivery_code).await?;
    debug!("Delivery code registered for delivery {}", delivery_id);

    Ok(ResponseFormat::ok_empty("delivery code registered").into_response())
}

// Mark a shipment as delivered
pub async fn confirm_delivery(
    service: web::Data<dyn OrderService>,
    path: web::Path<DeliveryId>,
    role: MemberRoleHeader,
) -> Result<HttpResponse, ApiError> {
    const REQUIRED: MemberRole = MemberRole::Seller;
    check_member_role(role.0, REQUIRED)?;

    service.confirm_delivery(path.into_inner()).await?;

    Ok(ResponseFormat::ok_empty("delivery confirmed").into_response())
}
