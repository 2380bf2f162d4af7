//! Keyboard signals for Campus.
//!
//! The window toolkit delivers raw press/release transitions as [`Key`]
//! values. A [`KeyHandler`] folds them into the signals gameplay reads:
//!
//! - sticky flags for the four movement directions, interact and space
//!   (true while held);
//! - one-shot flags for interact and space that are raised once per
//!   physical press and cleared by the read that observes them.
//!
//! Each consumer owns its own handler. The overworld keeps one for the
//! whole session, and a running minigame gets a fresh one scoped to its
//! window, so a press aimed at one never leaks into the other.

mod error;
mod handler;
mod key;

pub use error::InputError;
pub use handler::KeyHandler;
pub use key::{Direction, Key, KeyEvent};
