//! Filehub entry-point: configuration, migrations, pool, HTTP server.

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use filehub::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use filehub::server::{ServerConfig, create_server};

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

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;

    run_pending_migrations(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(config.database_url.clone()))
        .await
        .map_err(std::io::Error::other)?;

    info!(bind_addr = %config.bind_addr, "starting server");
    create_server(pool, config)?.await
}
