use async_graphql::{Context, ID, Object, Result};

use postboard_core::PostService;
use postboard_core::domain::MutationResponse;

use super::guard::authorized;
use super::types::{CreatePostInput, PostMutationResponse, UpdatePostInput, post_id};

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        create_post_input: CreatePostInput,
    ) -> Result<PostMutationResponse> {
        let service = ctx.data::<PostService>()?;

        authorized(ctx, |identity| async move {
            tracing::info!(user_id = %identity.user_id, "createPost");
            service.create_post(create_post_input.into()).await.into()
        })
        .await
    }

    async fn update_post(
        &self,
        ctx: &Context<'_>,
        update_post_input: UpdatePostInput,
    ) -> Result<PostMutationResponse> {
        let service = ctx.data::<PostService>()?;

        authorized(ctx, |identity| async move {
            tracing::info!(user_id = %identity.user_id, "updatePost");
            let UpdatePostInput { id, title, text } = update_post_input;
            match post_id(&id) {
                Some(id) => service.update_post(id, title, text).await.into(),
                None => MutationResponse::not_found().into(),
            }
        })
        .await
    }

    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> Result<PostMutationResponse> {
        let service = ctx.data::<PostService>()?;

        authorized(ctx, |identity| async move {
            tracing::info!(user_id = %identity.user_id, "deletePost");
            match post_id(&id) {
                Some(id) => service.delete_post(id).await.into(),
                None => MutationResponse::not_found().into(),
            }
        })
        .await
    }
}
