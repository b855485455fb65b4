//! The envelope every post mutation returns.

use serde::Serialize;

use super::Post;
use crate::error::RepoError;

pub const POST_NOT_FOUND: &str = "Post not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Outcome of a post mutation.
///
/// Fields are read-only so that `success` always agrees with `code`, and
/// `post` is only ever attached to a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationResponse {
    code: u16,
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    post: Option<Post>,
}

impl MutationResponse {
    /// Successful response without a payload (used by delete).
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: 200,
            success: true,
            message: message.into(),
            post: None,
        }
    }

    /// Successful response carrying the affected post (create/update).
    pub fn ok_with_post(message: impl Into<String>, post: Post) -> Self {
        Self {
            code: 200,
            success: true,
            message: message.into(),
            post: Some(post),
        }
    }

    pub fn not_found() -> Self {
        Self::failure(400, POST_NOT_FOUND)
    }

    /// Map a persistence failure onto the envelope.
    ///
    /// With `expose_details` off the message carries no driver text.
    pub fn from_repo_error(err: &RepoError, expose_details: bool) -> Self {
        match err {
            RepoError::NotFound => Self::not_found(),
            _ if expose_details => {
                Self::failure(err.status_code(), format!("{INTERNAL_SERVER_ERROR} {err}"))
            }
            _ => Self::failure(err.status_code(), INTERNAL_SERVER_ERROR),
        }
    }

    fn failure(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            success: false,
            message: message.into(),
            post: None,
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    pub fn into_post(self) -> Option<Post> {
        self.post
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn sample_post() -> Post {
        let now = Utc::now();
        Post {
            id: 1,
            title: "Hello".to_string(),
            text: "World".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_ok_with_post() {
        let response = MutationResponse::ok_with_post("Post created successfully", sample_post());

        assert_eq!(response.code(), 200);
        assert!(response.success());
        assert_eq!(response.post().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_not_found() {
        let response = MutationResponse::not_found();

        assert_eq!(response.code(), 400);
        assert!(!response.success());
        assert_eq!(response.message(), "Post not found");
        assert!(response.post().is_none());
    }

    #[test]
    fn test_repo_error_with_details() {
        let err = RepoError::Query("relation \"posts\" does not exist".to_string());
        let response = MutationResponse::from_repo_error(&err, true);

        assert_eq!(response.code(), 500);
        assert!(!response.success());
        assert!(response.message().starts_with("Internal server error "));
        assert!(response.message().contains("relation \"posts\" does not exist"));
    }

    #[test]
    fn test_repo_error_without_details() {
        let err = RepoError::Connection("password authentication failed".to_string());
        let response = MutationResponse::from_repo_error(&err, false);

        assert_eq!(response.code(), 500);
        assert_eq!(response.message(), "Internal server error");
    }

    #[test]
    fn test_repo_not_found_maps_to_400() {
        let response = MutationResponse::from_repo_error(&RepoError::NotFound, true);

        assert_eq!(response.code(), 400);
        assert_eq!(response.message(), "Post not found");
    }

    #[test]
    fn test_serialization_omits_missing_post() {
        let json = serde_json::to_value(MutationResponse::ok("Post deleted successfully")).unwrap();

        assert_eq!(json["code"], 200);
        assert_eq!(json["success"], true);
        assert!(json.get("post").is_none());
    }
}
