//! Domain entities - the core business objects.

mod post;
mod response;

pub use post::{NewPost, Post};
pub use response::{INTERNAL_SERVER_ERROR, MutationResponse, POST_NOT_FOUND};
