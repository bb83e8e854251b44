use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use crate::api::response::ResponseFormat;

// Liveness probe; needs no member headers
pub async fn health() -> HttpResponse {
    ResponseFormat::ok_empty("order gateway is up").into_response()
}

// Fallback for unknown paths under the API prefix
pub async fn not_found() -> HttpResponse {
    ResponseFormat::error(StatusCode::NOT_FOUND, "no such endpoint").into_response()
}
