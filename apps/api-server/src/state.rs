//! Application state - shared across all handlers.

use std::sync::Arc;

use socialnet_core::ports::{GroupBlockRepository, LikeRepository, PostRepository, UserRepository};
use socialnet_core::service::{GroupBlockService, LikeService, PostService};
use socialnet_infra::database::{
    DatabaseConfig, InMemoryGroupBlockRepository, InMemoryLikeRepository, InMemoryPostRepository,
    InMemoryUserRepository,
};
use socialnet_infra::database::{
    PostgresGroupBlockRepository, PostgresLikeRepository, PostgresPostRepository,
    PostgresUserRepository, connect,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService>,
    pub like_service: Arc<LikeService>,
    pub group_block_service: Arc<GroupBlockService>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Uses PostgreSQL when a database is configured and reachable, and
    /// falls back to the in-memory repositories otherwise.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let (posts, likes, blocks, users): (
            Arc<dyn PostRepository>,
            Arc<dyn LikeRepository>,
            Arc<dyn GroupBlockRepository>,
            Arc<dyn UserRepository>,
        ) = match db_config {
            Some(config) => match connect(config).await {
                Ok(conn) => (
                    Arc::new(PostgresPostRepository::new(conn.clone())),
                    Arc::new(PostgresLikeRepository::new(conn.clone())),
                    Arc::new(PostgresGroupBlockRepository::new(conn.clone())),
                    Arc::new(PostgresUserRepository::new(conn)),
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        tracing::info!("Application state initialized");

        Self {
            post_service: Arc::new(PostService::new(posts)),
            like_service: Arc::new(LikeService::new(likes)),
            group_block_service: Arc::new(GroupBlockService::new(blocks)),
            users,
        }
    }

    fn in_memory() -> (
        Arc<dyn PostRepository>,
        Arc<dyn LikeRepository>,
        Arc<dyn GroupBlockRepository>,
        Arc<dyn UserRepository>,
    ) {
        (
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryLikeRepository::new()),
            Arc::new(InMemoryGroupBlockRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        )
    }
}
