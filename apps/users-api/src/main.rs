use axum_helpers::server::{create_router, serve};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, Environment};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration: defaults, then config.yml, then APP__* env vars
    let config = Config::load()?;
    let environment = Environment::from_env();

    // Initialize tracing
    init_tracing(&environment, config.is_debug);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Connection failures are fatal; there is no retry
    let mongo_client = database::mongodb::connect(&config.mongodb).await?;

    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // Build router with API routes and OpenAPI docs
    let api_routes = api::routes(&state);
    let app = create_router::<openapi::ApiDoc>(api_routes, &state.config.listen);

    let listen = state.config.listen.clone();

    info!("Starting Users API with graceful shutdown (30s timeout)");

    serve(app, &listen, Duration::from_secs(30), async move {
        info!("Shutting down: closing MongoDB connections");
        state.mongo_client.shutdown().await;
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
