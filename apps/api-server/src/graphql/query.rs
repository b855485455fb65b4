use async_graphql::{Context, ID, Object, Result};

use postboard_core::PostService;

use super::error::query_error;
use super::types::{PostObject, post_id};

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    /// Every post, in storage order.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Option<Vec<PostObject>>> {
        let service = ctx.data::<PostService>()?;

        let posts = service
            .posts()
            .await
            .map_err(|e| query_error(e, service.config().expose_error_details))?;

        Ok(Some(posts.into_iter().map(Into::into).collect()))
    }

    /// A single post, or null if no post has this id.
    async fn post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<PostObject>> {
        let service = ctx.data::<PostService>()?;
        let Some(id) = post_id(&id) else {
            return Ok(None);
        };

        let post = service
            .post(id)
            .await
            .map_err(|e| query_error(e, service.config().expose_error_details))?;

        Ok(post.map(Into::into))
    }
}
