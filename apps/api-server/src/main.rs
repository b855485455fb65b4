//! # Postboard API Server
//!
//! Serves the post GraphQL API over Actix-web.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod graphql;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        "Starting Postboard API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await;
    let schema = graphql::build_schema(state.posts.clone());
    let token_service = state.token_service.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::Data::new(token_service.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
