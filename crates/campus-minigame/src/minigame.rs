//! The lifecycle contract every minigame honours.

use std::time::Duration;

use campus_input::KeyHandler;

use crate::{MinigameCallback, MinigameError, MinigameState, Stage};

/// A minigame as seen by whoever launches it.
///
/// The trait is object safe; the registry hands out `Box<dyn Minigame>`.
pub trait Minigame {
    /// Display name.
    fn name(&self) -> &'static str;

    /// One-line rules summary.
    fn description(&self) -> &'static str;

    /// Current lifecycle state.
    fn state(&self) -> MinigameState;

    /// Builds the model, opens the window and starts the clock.
    ///
    /// `callback` is invoked exactly once, when the game is won or lost.
    /// Fails unless the minigame is [`MinigameState::Idle`].
    fn start(
        &mut self,
        stage: &mut dyn Stage,
        callback: Box<dyn MinigameCallback>,
    ) -> Result<(), MinigameError>;

    /// Runs one tick: advance the model with the sampled input, request a
    /// redraw, then check for a win and for a loss.
    ///
    /// Returns the state after the tick. A no-op unless running.
    fn tick(
        &mut self,
        dt: Duration,
        keys: &mut KeyHandler,
        stage: &mut dyn Stage,
    ) -> MinigameState;

    /// Abandons the game: closes the window if it is still open and drops
    /// the callback without invoking it. Safe in any state.
    fn stop(&mut self, stage: &mut dyn Stage);
}
