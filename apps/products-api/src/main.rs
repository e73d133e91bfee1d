//! Products API - REST service over PostgreSQL

use axum_helpers::server::{create_production_app, create_router};
use core_config::load_dotenv;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres;
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    load_dotenv();
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        "Starting {} v{} ({:?})",
        config.app.name, config.app.version, config.environment
    );

    let db = postgres::connect_from_config_with_retry(config.postgres.clone(), None).await?;

    if config.run_migrations {
        postgres::run_migrations::<Migrator>(&db, config.app.name).await?;
    }

    let state = AppState { db };

    let routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(routes, &config.server)?;

    info!("Listening on {}", config.server.address());

    let db = state.db.clone();
    create_production_app(
        router,
        &config.server,
        config.server.shutdown_timeout,
        async move {
            info!("Shutting down: closing PostgreSQL connections");
            postgres::close(db).await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
