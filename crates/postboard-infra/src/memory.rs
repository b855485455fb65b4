//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use postboard_core::domain::{NewPost, Post};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository};

#[derive(Default)]
struct Store {
    posts: BTreeMap<i32, Post>,
    last_id: i32,
}

/// Post repository backed by a `BTreeMap` behind an async `RwLock`.
///
/// Ids are handed out sequentially from 1 and never reused, matching a
/// `SERIAL` column. Note: data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.posts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.values().cloned().collect())
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let slot = store.posts.get_mut(&entity.id).ok_or(RepoError::NotFound)?;

        // created_at is owned by the store
        *slot = Post {
            created_at: slot.created_at,
            ..entity
        };
        Ok(slot.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Query("post id sequence exhausted".to_string()))?;
        store.last_id = id;

        let now = Utc::now();
        let created = Post {
            id,
            title: post.title,
            text: post.text,
            created_at: now,
            updated_at: now,
        };
        store.posts.insert(created.id, created.clone());

        tracing::debug!(post_id = created.id, "Stored post in memory");
        Ok(created)
    }
}
