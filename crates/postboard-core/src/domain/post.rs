use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a titled piece of text.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Replace the editable fields and bump `updated_at`.
    pub fn revise(&mut self, title: String, text: String) {
        self.title = title;
        self.text = text;
        self.updated_at = Utc::now();
    }
}

/// Fields supplied by the caller when creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub text: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}
