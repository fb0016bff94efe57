use crate::comments::Comment;
use crate::EntityId;

use serde::{Deserialize, Serialize};

/// Long-form titled content.
///
/// Structurally close to a text post but stored and searched separately.
#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Debug)]
pub struct Blog {
    pub id: EntityId,

    /// The title of this blog post.
    pub title: String,

    pub author: String,

    /// Timestamp at the time of publication in Unix time.
    pub timestamp: i64,

    pub category: String,

    pub body: String,

    pub like_count: u64,

    /// Insertion ordered, append only.
    pub comments: Vec<Comment>,
}
