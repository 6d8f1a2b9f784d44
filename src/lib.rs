pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::order_service::OrderService;
use errors::AppError;
use infrastructure::order_repo::DieselOrderRepository;

pub use config::Config;
pub use db::{create_pool, run_migrations, DbPool};

/// The order service as wired for HTTP: backed by the SQLite repository.
pub type AppOrderService = OrderService<DieselOrderRepository>;

/// Shared handler state. One instance per process; each request checks a
/// connection out of the pool it wraps.
pub fn app_state(pool: DbPool) -> web::Data<AppOrderService> {
    web::Data::new(OrderService::new(DieselOrderRepository::new(pool)))
}

/// Register routes, extractor error handling and API docs.
///
/// Expects `web::Data<AppOrderService>` to be registered on the `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .route("/health", web::get().to(handlers::health::health_check))
    .service(
        web::scope("/orders")
            .route("", web::post().to(handlers::orders::create_order))
            .route("/", web::post().to(handlers::orders::create_order))
            .route("", web::get().to(handlers::orders::list_orders))
            .route("/", web::get().to(handlers::orders::list_orders))
            .route("/{order_id}", web::get().to(handlers::orders::get_order)),
    )
    .service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
    );
}

/// Build and return an actix-web `Server` bound to the configured address.
///
/// The caller is responsible for `.await`-ing (or spawning) the returned
/// server. The pool is dropped once the server has shut down.
pub fn build_server(pool: DbPool, config: &Config) -> std::io::Result<actix_web::dev::Server> {
    let state = app_state(pool);
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run())
}
