//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::PostService;
use postboard_core::ports::{PostRepository, TokenService};
use postboard_infra::InMemoryPostRepository;
use postboard_infra::auth::JwtTokenService;

#[cfg(feature = "postgres")]
use postboard_infra::{DatabaseConnections, PostgresPostRepository};

use crate::config::AppConfig;

/// Where posts live for this process.
#[derive(Clone)]
pub enum Storage {
    Memory,
    #[cfg(feature = "postgres")]
    Postgres(DatabaseConnections),
}

impl Storage {
    pub fn name(&self) -> &'static str {
        match self {
            Storage::Memory => "memory",
            #[cfg(feature = "postgres")]
            Storage::Postgres(_) => "postgres",
        }
    }

    /// Check that the backend answers.
    pub async fn ping(&self) -> Result<(), String> {
        match self {
            Storage::Memory => Ok(()),
            #[cfg(feature = "postgres")]
            Storage::Postgres(db) => db.ping().await.map_err(|e| e.to_string()),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub token_service: Arc<dyn TokenService>,
    pub storage: Storage,
    pub graphiql_enabled: bool,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (storage, repo) = Self::init_storage(config).await;

        let token_service: Arc<dyn TokenService> =
            Arc::new(JwtTokenService::new(config.jwt.clone()));

        tracing::info!(storage = storage.name(), "Application state initialized");

        Self {
            posts: PostService::new(repo, config.service.clone()),
            token_service,
            storage,
            graphiql_enabled: config.graphiql_enabled,
        }
    }

    #[cfg(feature = "postgres")]
    async fn init_storage(config: &AppConfig) -> (Storage, Arc<dyn PostRepository>) {
        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return (Storage::Memory, in_memory());
        };

        match DatabaseConnections::init(db_config).await {
            Ok(connections) => {
                let repo: Arc<dyn PostRepository> =
                    Arc::new(PostgresPostRepository::new(Arc::clone(&connections.main)));
                (Storage::Postgres(connections), repo)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                (Storage::Memory, in_memory())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn init_storage(config: &AppConfig) -> (Storage, Arc<dyn PostRepository>) {
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        (Storage::Memory, in_memory())
    }
}

fn in_memory() -> Arc<dyn PostRepository> {
    Arc::new(InMemoryPostRepository::new())
}
