//! GraphQL surface of the post gateway.
//!
//! Queries are public; every mutation runs through [`guard::authorized`].

mod error;
mod guard;
mod mutation;
mod query;
mod types;


use async_graphql::{EmptySubscription, MergedObject, Schema};

use postboard_core::PostService;

use mutation::PostMutation;
use query::PostQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(PostQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(PostMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the gateway available to every resolver.
pub fn build_schema(posts: PostService) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(posts)
    .finish()
}
