//! Minigames for Campus.
//!
//! A minigame is a self-contained challenge launched from a room. Every
//! minigame follows the same lifecycle, enforced by [`Hosted`]:
//!
//! ```text
//! Idle ──start──→ Running ──won / lost──→ Terminal
//!                    │
//!                    └──────stop───────→ Terminal (no callback)
//! ```
//!
//! The caller drives a running minigame with [`Minigame::tick`] at a fixed
//! cadence. When the model reports a win or a loss the minigame tears down
//! its window, scores the run and hands a [`MinigameOutcome`] to its
//! [`MinigameCallback`] exactly once.
//!
//! # Key types
//!
//! - [`Minigame`]: the object-safe lifecycle contract
//! - [`Simulation`]: the trait a concrete game model implements
//! - [`Stage`]: the window toolkit, as seen by a minigame
//! - [`ScoringStrategy`]: terminal lives → score
//! - [`create_minigame`] / [`has_minigame`]: the room registry

mod callback;
mod error;
mod factory;
pub mod games;
mod hosted;
mod minigame;
pub mod scoring;
mod stage;
mod state;

pub use callback::{MinigameCallback, MinigameOutcome};
pub use error::MinigameError;
pub use factory::{
    MINIGAME_ROOMS, MinigameKind, MinigameOptions, create_minigame, create_minigame_with,
    has_minigame, minigame_description, minigame_name,
};
pub use hosted::{Hosted, Simulation};
pub use minigame::Minigame;
pub use scoring::ScoringStrategy;
pub use stage::{HeadlessStage, Notice, NoticeKind, Stage, StageEvent, WindowId, WindowSpec};
pub use state::MinigameState;
