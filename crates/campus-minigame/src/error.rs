//! Error types for the minigame layer.

use campus_world::RoomId;

/// Errors that can occur while looking up or driving a minigame.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MinigameError {
    /// No minigame is registered for this room.
    #[error("no minigame registered for room {0}")]
    UnknownRoom(RoomId),

    /// The minigame is in a state that doesn't allow this operation,
    /// e.g. starting a minigame that already finished.
    #[error("invalid minigame state for this operation: {0}")]
    InvalidState(String),
}
