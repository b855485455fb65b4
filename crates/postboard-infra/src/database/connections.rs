use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use super::DatabaseConfig;

/// Database connection pool.
///
/// Cheap to clone; every repository holds an `Arc` to the same pool.
#[derive(Clone)]
pub struct DatabaseConnections {
    pub main: Arc<DbConn>,
}

impl DatabaseConnections {
    /// Open the pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!(
            "Database connected (pool: {}-{})",
            config.min_connections,
            config.max_connections
        );

        Ok(Self {
            main: Arc::new(main),
        })
    }

    /// Round-trip to the server, used by the health check.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.main.ping().await
    }
}
