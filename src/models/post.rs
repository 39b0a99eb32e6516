//! Post model as returned by the Lemmy post listing

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Community;

/// One element of a post listing.
///
/// Only the fields the archiver reads are typed; everything else the server
/// sends (creator, counts, flags, ...) is kept in `extra` so the archived JSON
/// matches what the instance returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    /// The post itself
    pub post: Post,
    /// The community the post belongs to
    pub community: Community,
    /// Remaining fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A Lemmy post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Instance-assigned post ID
    pub id: i64,
    /// Post title
    pub name: String,
    /// Markdown body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Link or uploaded media URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Remaining fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostView {
    /// Post ID shortcut
    pub const fn id(&self) -> i64 {
        self.post.id
    }

    /// Post title shortcut
    pub fn title(&self) -> &str {
        &self.post.name
    }
}
