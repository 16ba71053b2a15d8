// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
            .route("/health", web::get().to(handlers::health_check))
            .route("/solve", web::post().to(handlers::solve_challenge))
            .route("/models", web::get().to(handlers::get_models))
            .route("/modes", web::get().to(handlers::get_modes))
    );
}
