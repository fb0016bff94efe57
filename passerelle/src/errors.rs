use thiserror::Error;

/// Broad failure class, for callers that branch on the class rather than
/// the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    GateDenied,
    Capability,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Passerelle: Cannot publish, text is empty")]
    EmptyBody,

    #[error("Passerelle: Cannot publish blog, title is empty")]
    EmptyTitle,

    #[error("Passerelle: Cannot publish video, media reference is empty")]
    EmptyMediaReference,

    #[error("Passerelle: Cannot publish poll, question is empty")]
    EmptyPollQuestion,

    #[error("Passerelle: Cannot publish poll, at least two non-empty options required")]
    PollOptions,

    #[error("Passerelle: Cannot vote, post is not a poll")]
    NotAPoll,

    #[error("Passerelle: Cannot vote, option index {0} is out of bounds")]
    OptionOutOfBounds(usize),

    #[error("Passerelle: Unknown module id {0}")]
    UnknownModule(String),

    #[error("Passerelle: Cannot find post, id does not resolve")]
    PostNotFound,

    #[error("Passerelle: Cannot find blog, id does not resolve")]
    BlogNotFound,

    #[error("Passerelle: Cannot find comment, id does not resolve")]
    CommentNotFound,

    #[error("Passerelle: Cannot find reply, id does not resolve")]
    ReplyNotFound,

    #[error("Passerelle: Feature {feature} requires {required} keys, {held} held")]
    GateDenied {
        feature: String,
        required: u32,
        held: u32,
    },

    #[error("Passerelle: Capability failure, {0}")]
    Capability(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyBody
            | Error::EmptyTitle
            | Error::EmptyMediaReference
            | Error::EmptyPollQuestion
            | Error::PollOptions
            | Error::NotAPoll
            | Error::OptionOutOfBounds(_)
            | Error::UnknownModule(_) => ErrorKind::Validation,

            Error::PostNotFound
            | Error::BlogNotFound
            | Error::CommentNotFound
            | Error::ReplyNotFound => ErrorKind::NotFound,

            Error::GateDenied { .. } => ErrorKind::GateDenied,

            Error::Capability(_) => ErrorKind::Capability,
        }
    }
}
