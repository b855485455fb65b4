//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::ActiveModelTrait;

use postboard_core::domain::{NewPost, Post};
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

use super::entity::post::{ActiveModel as PostActiveModel, Entity as PostEntity};
use super::error::map_db_err;
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let active_model: PostActiveModel = post.into();
        let model = active_model.insert(&*self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Inserted post");
        Ok(model.into())
    }
}
