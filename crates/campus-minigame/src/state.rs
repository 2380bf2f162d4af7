//! The minigame lifecycle state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The lifecycle state of a minigame instance.
///
/// Transitions are strictly ordered:
///
/// ```text
/// Idle → Running → Terminal
/// ```
///
/// - **Idle**: created, not started. No model, window or clock yet.
/// - **Running**: started. Owns a model and a window and accepts ticks.
/// - **Terminal**: finished on its own terms or stopped from outside.
///   A terminal instance is never restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinigameState {
    Idle,
    Running,
    Terminal,
}

impl MinigameState {
    /// Returns `true` while ticks are accepted.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }

    /// The state that follows this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Running),
            Self::Running => Some(Self::Terminal),
            Self::Terminal => None,
        }
    }

    /// Returns `true` if transitioning to `target` is valid.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for MinigameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Terminal => write!(f, "Terminal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_follows_strict_order() {
        assert_eq!(MinigameState::Idle.next(), Some(MinigameState::Running));
        assert_eq!(MinigameState::Running.next(), Some(MinigameState::Terminal));
        assert_eq!(MinigameState::Terminal.next(), None);
    }

    #[test]
    fn test_can_transition_to() {
        assert!(MinigameState::Idle.can_transition_to(MinigameState::Running));
        assert!(!MinigameState::Idle.can_transition_to(MinigameState::Terminal));
        assert!(!MinigameState::Terminal.can_transition_to(MinigameState::Running));
        assert!(!MinigameState::Running.can_transition_to(MinigameState::Running));
    }

    #[test]
    fn test_is_running() {
        assert!(!MinigameState::Idle.is_running());
        assert!(MinigameState::Running.is_running());
        assert!(!MinigameState::Terminal.is_running());
        assert!(MinigameState::Terminal.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(MinigameState::Running.to_string(), "Running");
    }
}
