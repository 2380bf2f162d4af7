//! Unified error type for Campus.

use campus_input::InputError;
use campus_minigame::MinigameError;
use campus_world::WorldError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant lets `?` convert sub-crate
/// errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum CampusError {
    /// A key name could not be decoded.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A world-level error (invalid room, bad layout).
    #[error(transparent)]
    World(#[from] WorldError),

    /// A minigame-level error (unknown room, invalid state).
    #[error(transparent)]
    Minigame(#[from] MinigameError),

    /// A scripted input line that is not an event.
    #[error("malformed input event: {0:?}")]
    MalformedEvent(String),
}
