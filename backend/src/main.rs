//! Pet names server entry-point: loads settings, prepares the store and
//! starts the HTTP server.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use pet_names_backend::inbound::http::health::HealthState;
use pet_names_backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};

use server::{ServerConfig, ServerSettings, create_server, database_url};

async fn connect_store(database_url: String) -> std::io::Result<DbPool> {
    let migration_url = database_url.clone();
    let applied = tokio::task::spawn_blocking(move || run_migrations(&migration_url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(std::io::Error::other)?;
    info!(applied, "database migrations up to date");

    DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(std::io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::from_env()?;
    let mut config = ServerConfig::new(settings.bind_addr()?);

    if let Some(url) = database_url(&DefaultEnv::new()) {
        config = config.with_db_pool(connect_store(url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %config.bind_addr, "starting pet names server");
    create_server(health_state, config)?.await
}
