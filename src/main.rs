use actix_web::{middleware, App, HttpServer};
use challenge_solver::api::{self, configure_routes, AppState};
use challenge_solver::banner;
use challenge_solver::config::{ConfigSource, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // A missing .env is fine: provider keys may come from the real environment
    if let Err(e) = dotenvy::dotenv() {
        log::warn!("⚠️  Could not load .env file: {}", e);
    }

    let server_config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    // Provider credentials are re-read on every request
    let state = AppState::new(ConfigSource::Environment);

    log::info!(
        "🚀 Starting server on http://{}:{}",
        server_config.host,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(actix_web::web::Data::new(state.clone()))
            .wrap(api::cors())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run()
    .await
}
