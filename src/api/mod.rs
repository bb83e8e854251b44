pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;

use crate::config::{Config, PagingConfig};
use crate::service::OrderService;
use middleware::logging::RequestLogger;

/// Everything an `App` needs to serve the gateway: shared state plus routes
pub fn configure_app(
    service: Arc<dyn OrderService>,
    paging: PagingConfig,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::from(service))
            .app_data(web::Data::new(paging));
        routes::register_routes(cfg);
    }
}

pub async fn start_api_server(config: Config, service: Arc<dyn OrderService>) -> std::io::Result<()> {
    let server_address = format!("{}:{}", config.api.host, config.api.port);

    info!(
        "Starting order gateway on {} with {} workers",
        server_address, config.api.workers
    );

    let api = config.api.clone();
    let paging = config.paging.clone();

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allowed_origin(&api.cors_origin)
            .allowed_methods(vec!["GET", "POST", "PATCH"])
            .allowed_headers(vec!["Content-Type", "memberId", "memberRole"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(RequestLogger::new())
            .configure(configure_app(service.clone(), paging.clone()))
    })
    .bind(server_address)?
    .workers(config.api.workers)
    .run()
    .await
}
