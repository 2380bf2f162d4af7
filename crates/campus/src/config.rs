//! Top-level game configuration.

use campus_tick::TickConfig;
use campus_world::{Extent, GameState};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Configuration for a [`Campus`](crate::Campus).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusConfig {
    /// Initial size of the overworld environment.
    pub environment: Extent,
    /// Rooms in the generated layout, hub included.
    pub room_count: u32,
    /// Tick settings shared by the overworld and every minigame.
    pub tick: TickConfig,
    /// Base seed for minigame randomness. `None` seeds from the OS.
    pub minigame_seed: Option<u64>,
    /// How close (centre to centre, in pixels) the player must be to an
    /// NPC to talk to it.
    pub interact_radius: f32,
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            environment: Extent::default(),
            room_count: GameState::DEFAULT_ROOM_COUNT,
            tick: TickConfig::default(),
            minigame_seed: None,
            interact_radius: Self::DEFAULT_INTERACT_RADIUS,
        }
    }
}

impl CampusConfig {
    pub const DEFAULT_INTERACT_RADIUS: f32 = 64.0;

    /// A default config with a fixed minigame seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            minigame_seed: Some(seed),
            ..Default::default()
        }
    }

    /// Clamp out-of-range values so the config is safe to use.
    ///
    /// Called by [`Campus::new`](crate::Campus::new).
    pub fn validated(mut self) -> Self {
        if self.room_count == 0 {
            warn!("room_count is 0, using a hub-only layout");
            self.room_count = 1;
        }
        if self.environment.is_empty() {
            warn!(environment = ?self.environment, "empty environment, using default size");
            self.environment = Extent::default();
        }
        if !self.interact_radius.is_finite() || self.interact_radius < 0.0 {
            warn!(
                radius = self.interact_radius,
                "interact_radius out of range, using default"
            );
            self.interact_radius = Self::DEFAULT_INTERACT_RADIUS;
        }
        self.tick = self.tick.validated();
        self
    }
}
