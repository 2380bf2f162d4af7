//! Room → minigame registry.

use std::ops::RangeInclusive;

use campus_world::RoomId;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::games::{CatchBall, SortServe};
use crate::scoring::LifeScoring;
use crate::{Hosted, Minigame, MinigameError, ScoringStrategy, Simulation};

/// Rooms that may host a minigame.
pub const MINIGAME_ROOMS: RangeInclusive<u32> = 1..=4;

/// Every minigame the game knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinigameKind {
    SortServe,
    CatchBall,
}

impl MinigameKind {
    /// The minigame registered for `room`, if any.
    ///
    /// Rooms 1 to 3 are minigame rooms without a game yet. Catch the Balls
    /// is built but not wired to a room.
    pub fn for_room(room: RoomId) -> Option<Self> {
        match room.0 {
            4 => Some(Self::SortServe),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SortServe => SortServe::NAME,
            Self::CatchBall => CatchBall::NAME,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::SortServe => SortServe::DESCRIPTION,
            Self::CatchBall => CatchBall::DESCRIPTION,
        }
    }

    /// Builds a fresh, idle minigame of this kind.
    pub fn create(self, options: MinigameOptions) -> Box<dyn Minigame> {
        let scoring = options
            .scoring
            .unwrap_or_else(|| Box::new(LifeScoring::default()));
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        match self {
            Self::SortServe => Box::new(Hosted::<SortServe>::with_parts(scoring, rng)),
            Self::CatchBall => Box::new(Hosted::<CatchBall>::with_parts(scoring, rng)),
        }
    }
}

/// Knobs for building a minigame.
#[derive(Default)]
pub struct MinigameOptions {
    /// Fixed RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Scoring strategy. `None` awards points per life left.
    pub scoring: Option<Box<dyn ScoringStrategy>>,
}

impl MinigameOptions {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}

/// Whether `room` is a minigame room. A pure range check: a room can
/// qualify without a game being registered for it.
pub fn has_minigame(room: RoomId) -> bool {
    MINIGAME_ROOMS.contains(&room.0)
}

fn lookup(room: RoomId) -> Result<MinigameKind, MinigameError> {
    MinigameKind::for_room(room).ok_or(MinigameError::UnknownRoom(room))
}

/// A fresh minigame for `room` with default options.
pub fn create_minigame(room: RoomId) -> Result<Box<dyn Minigame>, MinigameError> {
    create_minigame_with(room, MinigameOptions::default())
}

/// A fresh minigame for `room`.
pub fn create_minigame_with(
    room: RoomId,
    options: MinigameOptions,
) -> Result<Box<dyn Minigame>, MinigameError> {
    let kind = lookup(room)?;
    debug!(room_id = %room, minigame = kind.name(), "creating minigame");
    Ok(kind.create(options))
}

pub fn minigame_name(room: RoomId) -> Result<&'static str, MinigameError> {
    lookup(room).map(MinigameKind::name)
}

pub fn minigame_description(room: RoomId) -> Result<&'static str, MinigameError> {
    lookup(room).map(MinigameKind::description)
}
