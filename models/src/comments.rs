use crate::EntityId;

use serde::{Deserialize, Serialize};

/// A comment under a post or blog.
#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Debug)]
pub struct Comment {
    pub id: EntityId,

    pub author: String,

    pub body: String,

    pub like_count: u64,

    /// Insertion ordered, append only. Exactly one nesting level.
    pub replies: Vec<Reply>,
}

/// A reply to a comment. Leaf entity, replies cannot be replied to.
#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Debug)]
pub struct Reply {
    pub id: EntityId,

    pub author: String,

    pub body: String,

    pub like_count: u64,
}
