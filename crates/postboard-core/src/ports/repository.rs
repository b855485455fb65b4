use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Every stored entity, in store order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Overwrite an existing entity.
    ///
    /// Returns `RepoError::NotFound` if no row with the entity's ID exists,
    /// so a concurrent delete is never silently undone.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    ///
    /// Returns `RepoError::NotFound` if nothing was deleted.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Insert a new post; the store assigns `id` and timestamps.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;
}
