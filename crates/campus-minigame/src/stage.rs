//! The window toolkit as a minigame sees it.
//!
//! Painting is not a concern of the core. A minigame only asks its
//! [`Stage`] to open and close its window, to repaint it, and to show the
//! end-of-game notice. [`HeadlessStage`] implements the trait without a
//! display: it records every call and logs it.

use std::collections::HashSet;

use campus_world::Extent;
use tracing::{debug, info, warn};

use crate::MinigameOutcome;

/// Handle to a window opened on a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// What a minigame asks for when it opens its window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: String,
    pub size: Extent,
    pub resizable: bool,
}

impl WindowSpec {
    /// A fixed-size window.
    pub fn fixed(title: impl Into<String>, size: Extent) -> Self {
        Self {
            title: title.into(),
            size,
            resizable: false,
        }
    }
}

/// Whether a notice reports a win or a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Victory,
    Defeat,
}

/// A user-visible end-of-game message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    /// The notice shown for a run.
    pub fn for_outcome(outcome: &MinigameOutcome) -> Self {
        if outcome.success {
            Self {
                kind: NoticeKind::Victory,
                title: "Victory".into(),
                message: format!(
                    "You win!\nTime: {} seconds\nScore: {}",
                    outcome.elapsed_secs, outcome.score
                ),
            }
        } else {
            Self {
                kind: NoticeKind::Defeat,
                title: "Defeat".into(),
                message: "Game Over! You lost!".into(),
            }
        }
    }
}

/// Windowing and notification services.
pub trait Stage {
    /// Opens a window and returns its handle.
    fn open_window(&mut self, spec: &WindowSpec) -> WindowId;

    /// Asks for `window` to be repainted from the model's current state.
    fn request_redraw(&mut self, window: WindowId);

    /// Closes `window`. Closing a window that is already gone is a no-op.
    fn close_window(&mut self, window: WindowId);

    /// Shows an end-of-game notice.
    fn notify(&mut self, notice: &Notice);
}

/// A lifecycle call observed by a [`HeadlessStage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent {
    Opened(WindowId, String),
    Closed(WindowId),
    Notified(Notice),
}

/// A stage without a display.
#[derive(Debug, Default)]
pub struct HeadlessStage {
    next_id: u64,
    open: HashSet<WindowId>,
    events: Vec<StageEvent>,
    redraws: u64,
}

impl HeadlessStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every open, close and notice, in order.
    pub fn events(&self) -> &[StageEvent] {
        &self.events
    }

    /// Notices shown so far.
    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.events.iter().filter_map(|e| match e {
            StageEvent::Notified(n) => Some(n),
            _ => None,
        })
    }

    pub fn is_open(&self, window: WindowId) -> bool {
        self.open.contains(&window)
    }

    pub fn open_windows(&self) -> usize {
        self.open.len()
    }

    /// Redraw requests received so far.
    pub fn redraws(&self) -> u64 {
        self.redraws
    }
}

impl Stage for HeadlessStage {
    fn open_window(&mut self, spec: &WindowSpec) -> WindowId {
        self.next_id += 1;
        let id = WindowId(self.next_id);
        self.open.insert(id);
        self.events.push(StageEvent::Opened(id, spec.title.clone()));
        debug!(window = id.0, title = %spec.title, "window opened");
        id
    }

    fn request_redraw(&mut self, window: WindowId) {
        if self.open.contains(&window) {
            self.redraws += 1;
        } else {
            warn!(window = window.0, "redraw requested for a closed window");
        }
    }

    fn close_window(&mut self, window: WindowId) {
        if self.open.remove(&window) {
            self.events.push(StageEvent::Closed(window));
            debug!(window = window.0, "window closed");
        }
    }

    fn notify(&mut self, notice: &Notice) {
        info!(title = %notice.title, message = %notice.message, "notice");
        self.events.push(StageEvent::Notified(notice.clone()));
    }
}
