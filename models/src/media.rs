use crate::comments::Comment;
use crate::EntityId;

use serde::{Deserialize, Serialize};

use strum::Display;

/// A top-level shared content item.
#[derive(Deserialize, Serialize, PartialEq, Clone, Debug)]
pub struct Post {
    pub id: EntityId,

    pub author: String,

    /// Timestamp at the time of publication in Unix time.
    pub timestamp: i64,

    /// Free-form community label, e.g. "Arrival" or "Bureaucracy".
    pub category: String,

    pub like_count: u64,

    /// Insertion ordered, append only.
    pub comments: Vec<Comment>,

    pub payload: PostPayload,
}

impl Post {
    pub fn kind(&self) -> PostKind {
        self.payload.kind()
    }

    /// The text a free-text search should match against.
    pub fn primary_text(&self) -> &str {
        match &self.payload {
            PostPayload::Text { body } => body,
            PostPayload::Video { caption, .. } => caption,
            PostPayload::Poll { question, .. } => question,
        }
    }
}

/// Kind specific content, fixed at creation.
#[derive(Deserialize, Serialize, PartialEq, Clone, Debug)]
#[serde(tag = "kind")]
pub enum PostPayload {
    Text {
        body: String,
    },

    Video {
        /// Opaque reference to the media, resolved by the presentation layer.
        media: String,
        caption: String,
    },

    Poll {
        question: String,
        options: Vec<PollOption>,
    },
}

impl PostPayload {
    pub fn kind(&self) -> PostKind {
        match self {
            PostPayload::Text { .. } => PostKind::Text,
            PostPayload::Video { .. } => PostKind::Video,
            PostPayload::Poll { .. } => PostKind::Poll,
        }
    }
}

#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Debug, Display)]
pub enum PostKind {
    Text,
    Video,
    Poll,
}

/// One choice of a poll, vote count never decreases.
#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct PollOption {
    pub text: String,

    pub vote_count: u64,
}

impl PollOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            vote_count: 0,
        }
    }
}
