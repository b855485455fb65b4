//! Authorization gate for mutations.

use std::future::Future;

use async_graphql::{Context, Error, ErrorExtensions};

use crate::middleware::auth::Identity;

pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Run `body` only when the request carries a valid identity.
///
/// Otherwise the body is never polled and the caller gets an
/// `UNAUTHENTICATED` GraphQL error.
pub async fn authorized<F, Fut, T>(ctx: &Context<'_>, body: F) -> async_graphql::Result<T>
where
    F: FnOnce(Identity) -> Fut,
    Fut: Future<Output = T>,
{
    let identity = ctx.data_opt::<Option<Identity>>().cloned().flatten();

    match identity {
        Some(identity) => {
            tracing::debug!(
                user_id = %identity.user_id,
                email = %identity.email,
                roles = ?identity.roles,
                "Mutation authorized"
            );
            Ok(body(identity).await)
        }
        None => {
            tracing::warn!("Rejected unauthenticated mutation");
            Err(Error::new(NOT_AUTHENTICATED)
                .extend_with(|_, e| e.set("code", "UNAUTHENTICATED")))
        }
    }
}
