//! Error types for the reordering engine
//!
//! Drag gestures never fail: the reducer degrades to a no-op instead. Errors
//! only come from the boundaries where a board enters the engine.

use thiserror::Error;

/// Result type for board construction and parsing
pub type Result<T> = std::result::Result<T, DndError>;

/// Errors raised while building or decoding a board
#[derive(Debug, Error)]
pub enum DndError {
    /// Two items share the same id
    #[error("duplicate item id: {id}")]
    DuplicateItem { id: String },

    /// Two containers share the same id
    #[error("duplicate container id: {id}")]
    DuplicateContainer { id: String },

    /// The same id names both an item and a container
    #[error("id '{id}' is used by both an item and a container")]
    AmbiguousId { id: String },

    /// An id does not carry the role tag the substring protocol needs
    #[error("{role} id '{id}' does not contain the text \"{role}\"")]
    UntaggedId { role: String, id: String },

    /// Board document could not be decoded
    #[error("parse error: {message}")]
    Parse { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl DndError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an untagged id error
    pub fn untagged(role: impl Into<String>, id: impl Into<String>) -> Self {
        Self::UntaggedId {
            role: role.into(),
            id: id.into(),
        }
    }

    /// Check if this error means the board itself breaks an invariant,
    /// as opposed to the document failing to decode.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateItem { .. }
                | Self::DuplicateContainer { .. }
                | Self::AmbiguousId { .. }
                | Self::UntaggedId { .. }
        )
    }
}
