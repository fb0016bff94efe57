pub mod blog;
pub mod comments;
pub mod media;
pub mod modules;

/// Store-assigned entity identifier.
///
/// Monotonically increasing within a session, never reused.
pub type EntityId = u64;
