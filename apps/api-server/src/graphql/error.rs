use async_graphql::{Error, ErrorExtensions};

use postboard_core::RepoError;
use postboard_core::domain::INTERNAL_SERVER_ERROR;

/// Convert a failed query into a GraphQL error.
///
/// Uses the same message policy as the mutation envelope.
pub fn query_error(err: RepoError, expose_details: bool) -> Error {
    tracing::error!(error = %err, "Post query failed");

    let message = if expose_details {
        format!("{INTERNAL_SERVER_ERROR} {err}")
    } else {
        INTERNAL_SERVER_ERROR.to_string()
    };

    Error::new(message).extend_with(|_, e| e.set("code", "INTERNAL_SERVER_ERROR"))
}
