//! GraphQL object and input types.

use async_graphql::{ID, InputObject, SimpleObject};
use chrono::{DateTime, Utc};

use postboard_core::domain::{MutationResponse, NewPost, Post};

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Post")]
pub struct PostObject {
    pub id: ID,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostObject {
    fn from(post: Post) -> Self {
        Self {
            id: ID::from(post.id.to_string()),
            title: post.title,
            text: post.text,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Envelope returned by every post mutation.
#[derive(Debug, Clone, SimpleObject)]
pub struct PostMutationResponse {
    /// 200 on success, 400 for a missing post, 500 for storage failures.
    pub code: i32,
    pub success: bool,
    pub message: String,
    /// Set on successful create and update only.
    pub post: Option<PostObject>,
}

impl From<MutationResponse> for PostMutationResponse {
    fn from(response: MutationResponse) -> Self {
        Self {
            code: i32::from(response.code()),
            success: response.success(),
            message: response.message().to_string(),
            post: response.into_post().map(Into::into),
        }
    }
}

#[derive(Debug, InputObject)]
pub struct CreatePostInput {
    #[graphql(validator(min_length = 1))]
    pub title: String,
    #[graphql(validator(min_length = 1))]
    pub text: String,
}

impl From<CreatePostInput> for NewPost {
    fn from(input: CreatePostInput) -> Self {
        NewPost::new(input.title, input.text)
    }
}

#[derive(Debug, InputObject)]
pub struct UpdatePostInput {
    pub id: ID,
    #[graphql(validator(min_length = 1))]
    pub title: String,
    #[graphql(validator(min_length = 1))]
    pub text: String,
}

/// Numeric post id behind a GraphQL `ID`.
///
/// An id that is not a number cannot name any post, so callers treat `None`
/// exactly like an unknown id.
pub fn post_id(id: &ID) -> Option<i32> {
    id.parse().ok()
}
