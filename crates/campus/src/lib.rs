//! # Campus
//!
//! A small adventure game: the player walks between rooms of a campus and
//! talks to the people in them. Some rooms host a minigame. Finishing one
//! records time, points and completion for that room.
//!
//! The [`Campus`] orchestrator ties the layers together:
//! `campus-input` → `campus-world` → `campus-minigame`, all driven by
//! `campus-tick` schedulers inside a single `tokio::select!` loop.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use campus::prelude::*;
//!
//! # async fn demo() -> Result<(), CampusError> {
//! let (tx, rx) = tokio::sync::mpsc::channel(64);
//! let mut game = Campus::new(CampusConfig::default(), HeadlessStage::new())?;
//! tx.send(InputEvent::Quit).await.ok();
//! game.run(rx).await;
//! println!("{} points", game.ledger().total_points());
//! # Ok(())
//! # }
//! ```

mod campus;
mod config;
mod error;
mod event;

pub use campus::{Campus, Mode};
pub use config::CampusConfig;
pub use error::CampusError;
pub use event::InputEvent;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
}

pub mod prelude {
    pub use campus_input::{Direction, Key, KeyEvent, KeyHandler};
    pub use campus_minigame::{
        HeadlessStage, Minigame, MinigameCallback, MinigameOutcome, MinigameState, Stage,
    };
    pub use campus_tick::{TickConfig, TickPolicy};
    pub use campus_world::{Extent, GameState, RoomId, RoomScoreData, ScoreLedger};

    pub use crate::{Campus, CampusConfig, CampusError, InputEvent, Mode};
}
