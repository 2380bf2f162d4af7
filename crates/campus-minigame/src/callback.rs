//! The one-shot completion contract between a minigame and its launcher.

use campus_world::RoomScoreData;
use serde::{Deserialize, Serialize};

/// How a minigame run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinigameOutcome {
    /// `true` if the player won.
    pub success: bool,
    /// Whole seconds between `start` and the end of the run (floored).
    pub elapsed_secs: u32,
    /// Points awarded. Always 0 for a lost run.
    pub score: u32,
}

impl From<MinigameOutcome> for RoomScoreData {
    fn from(outcome: MinigameOutcome) -> Self {
        RoomScoreData::new(outcome.elapsed_secs, outcome.score, outcome.success)
    }
}

/// Receives the outcome of a minigame run.
///
/// `on_complete` takes the boxed callback by value: once invoked, the
/// callback no longer exists, so a second completion cannot be expressed.
pub trait MinigameCallback {
    fn on_complete(self: Box<Self>, outcome: MinigameOutcome);
}

impl<F> MinigameCallback for F
where
    F: FnOnce(MinigameOutcome),
{
    fn on_complete(self: Box<Self>, outcome: MinigameOutcome) {
        (*self)(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_closure_callback_receives_outcome() {
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let callback: Box<dyn MinigameCallback> = Box::new(move |o: MinigameOutcome| sink.set(Some(o)));

        let outcome = MinigameOutcome {
            success: true,
            elapsed_secs: 4,
            score: 60,
        };
        callback.on_complete(outcome);
        assert_eq!(seen.get(), Some(outcome));
    }

    #[test]
    fn test_outcome_into_score_data() {
        let data: RoomScoreData = MinigameOutcome {
            success: false,
            elapsed_secs: 9,
            score: 0,
        }
        .into();
        assert_eq!(data, RoomScoreData::new(9, 0, false));
    }
}
