//! The post gateway: one repository call per operation, wrapped in the
//! mutation envelope.

use std::sync::Arc;

use crate::domain::{MutationResponse, NewPost, Post};
use crate::error::RepoError;
use crate::ports::PostRepository;

pub const POST_CREATED: &str = "Post created successfully";
pub const POST_UPDATED: &str = "Post updated successfully";
pub const POST_DELETED: &str = "Post deleted successfully";

/// Gateway behaviour switches.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Append the persistence error text to 500 messages.
    pub expose_error_details: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            expose_error_details: true,
        }
    }
}

/// Post gateway.
///
/// Stateless apart from the injected repository handle; safe to clone and
/// share across requests.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    config: ServiceConfig,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Persist a new post.
    pub async fn create_post(&self, input: NewPost) -> MutationResponse {
        tracing::debug!("Creating post");

        match self.repo.create(input).await {
            Ok(post) => {
                tracing::info!(post_id = post.id, "Post created");
                MutationResponse::ok_with_post(POST_CREATED, post)
            }
            Err(e) => self.failure("create_post", &e),
        }
    }

    /// All posts, in store order. Errors are returned to the caller.
    pub async fn posts(&self) -> Result<Vec<Post>, RepoError> {
        self.repo.find_all().await
    }

    /// A single post, or `None` if the id is unknown.
    pub async fn post(&self, id: i32) -> Result<Option<Post>, RepoError> {
        self.repo.find_by_id(id).await
    }

    /// Overwrite title and text of an existing post.
    pub async fn update_post(&self, id: i32, title: String, text: String) -> MutationResponse {
        tracing::debug!(post_id = id, "Updating post");

        let result: Result<MutationResponse, RepoError> = async {
            let Some(mut post) = self.repo.find_by_id(id).await? else {
                return Ok(MutationResponse::not_found());
            };

            post.revise(title, text);
            let updated = self.repo.update(post).await?;

            tracing::info!(post_id = id, "Post updated");
            Ok(MutationResponse::ok_with_post(POST_UPDATED, updated))
        }
        .await;

        result.unwrap_or_else(|e| self.failure("update_post", &e))
    }

    /// Permanently remove a post.
    ///
    /// The delete is conditional on the row existing, so there is no
    /// separate lookup to race against.
    pub async fn delete_post(&self, id: i32) -> MutationResponse {
        tracing::debug!(post_id = id, "Deleting post");

        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = id, "Post deleted");
                MutationResponse::ok(POST_DELETED)
            }
            Err(e) => self.failure("delete_post", &e),
        }
    }

    fn failure(&self, operation: &'static str, err: &RepoError) -> MutationResponse {
        match err {
            RepoError::NotFound => tracing::debug!(operation, "Post not found"),
            _ => tracing::error!(operation, error = %err, "Post persistence failed"),
        }
        MutationResponse::from_repo_error(err, self.config.expose_error_details)
    }
}
