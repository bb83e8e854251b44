use actix_web::web;

use super::error::{json_error_handler, path_error_handler, query_error_handler};
use super::handlers::{delivery, health, order, settlement};

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    // Extractor failures use the response envelope too
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));

    cfg.route("/health", web::get().to(health::health));

    // All gateway routes live under /api
    cfg.service(
        web::scope("/api")
            // Order listings
            .route("/order/consumer", web::get().to(order::get_consumer_order_list))
            .route(
                "/order/consumer/{consumerId}",
                web::get().to(order::get_consumer_order_list_for_admin),
            )
            .route("/order/seller", web::get().to(order::get_seller_order_list))
            .route(
                "/order/seller/{sellerId}",
                web::get().to(order::get_seller_order_list_for_admin),
            )
            // Settlements
            .route(
                "/settlement/seller/{sellerId}",
                web::get().to(settlement::get_settlement_for_admin),
            )
            .route(
                "/settlement/seller/year/{year}/month/{month}",
                web::get().to(settlement::get_settlement_for_seller),
            )
            .route(
                "/settlement/seller-rank/year/{year}/month/{month}",
                web::get().to(settlement::get_seller_rank_month),
            )
            // Deliveries
            .route("/delivery/{deliveryId}", web::patch().to(delivery::add_delivery_code))
            .route(
                "/delivery-confirm/{deliveryId}",
                web::patch().to(delivery::confirm_delivery),
            )
            // Confirmation and cancellation
            .route(
                "/product-order-confirm/{productOrderId}",
                web::patch().to(order::confirm_product_order),
            )
            .route("/order-cancel", web::post().to(order::cancel_order))
            .route("/product-order-cancel", web::post().to(order::cancel_product_order))
            .default_service(web::to(health::not_found)),
    );
}
