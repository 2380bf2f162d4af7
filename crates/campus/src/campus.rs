//! The game: overworld exploration and minigame runs on one task.

use std::fmt;
use std::ops::ControlFlow;
use std::time::Duration;

use campus_input::{KeyEvent, KeyHandler};
use campus_minigame::{
    Minigame, MinigameError, MinigameOptions, MinigameOutcome, MinigameState, Stage,
    create_minigame_with, has_minigame,
};
use campus_tick::{TickInfo, TickScheduler};
use campus_world::{Entity, Extent, GameState, RoomId, RoomScoreData, ScoreLedger};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, trace, warn};

use crate::{CampusConfig, CampusError, InputEvent};

/// What the player is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Walking around the overworld.
    Exploring,
    /// Playing the minigame launched from `room`.
    Playing { room: RoomId },
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exploring => write!(f, "Exploring"),
            Self::Playing { room } => write!(f, "Playing({room})"),
        }
    }
}

/// A minigame run in progress, with its own clock and input.
struct ActiveMinigame {
    room: RoomId,
    minigame: Box<dyn Minigame>,
    scheduler: TickScheduler,
    keys: KeyHandler,
    outcome: oneshot::Receiver<MinigameOutcome>,
}

/// The whole game.
///
/// Owns the overworld, the score ledger, the stage and at most one running
/// minigame. While a minigame runs, the overworld clock is paused and every
/// key goes to the minigame's own [`KeyHandler`].
pub struct Campus<S: Stage> {
    config: CampusConfig,
    world: GameState,
    ledger: ScoreLedger,
    stage: S,
    keys: KeyHandler,
    clock: TickScheduler,
    active: Option<ActiveMinigame>,
    launches: u64,
}

impl<S: Stage> Campus<S> {
    /// Builds the world described by `config` on `stage`.
    pub fn new(config: CampusConfig, stage: S) -> Result<Self, CampusError> {
        let config = config.validated();
        let world = GameState::with_room_count(config.environment, config.room_count)?;
        let clock = TickScheduler::new(config.tick.clone());
        info!(
            rooms = world.room_count(),
            rate_hz = clock.tick_rate_hz(),
            "campus created"
        );
        Ok(Self {
            config,
            world,
            ledger: ScoreLedger::new(),
            stage,
            keys: KeyHandler::new(),
            clock,
            active: None,
            launches: 0,
        })
    }

    pub fn config(&self) -> &CampusConfig {
        &self.config
    }

    pub fn world(&self) -> &GameState {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GameState {
        &mut self.world
    }

    /// Outcomes recorded so far, per room.
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn mode(&self) -> Mode {
        match &self.active {
            Some(active) => Mode::Playing { room: active.room },
            None => Mode::Exploring,
        }
    }

    /// The running minigame, if any.
    pub fn minigame(&self) -> Option<&dyn Minigame> {
        self.active.as_ref().map(|a| a.minigame.as_ref())
    }

    /// The overworld key state.
    pub fn overworld_keys(&self) -> &KeyHandler {
        &self.keys
    }

    /// Consumes the game, returning the final ledger.
    pub fn into_ledger(self) -> ScoreLedger {
        self.ledger
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Routes a key to the running minigame, or to the overworld.
    pub fn handle_key(&mut self, event: KeyEvent) {
        match self.active.as_mut() {
            Some(active) => active.keys.apply(event),
            None => self.keys.apply(event),
        }
    }

    /// Applies one input event. Breaks on [`InputEvent::Quit`].
    pub fn handle_event(&mut self, event: InputEvent) -> ControlFlow<()> {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Resize(size) => self.world.resize(size),
            InputEvent::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    // -----------------------------------------------------------------------
    // Overworld
    // -----------------------------------------------------------------------

    /// One overworld tick: move the player, then act on an interact press.
    ///
    /// Ignored while a minigame runs.
    pub fn explore_tick(&mut self, dt: Duration) -> Result<(), CampusError> {
        if self.active.is_some() {
            trace!("explore tick ignored while playing");
            return Ok(());
        }
        self.world.player_mut().advance(&self.keys, dt);
        if self.keys.interact_just_pressed() {
            self.interact()?;
        }
        Ok(())
    }

    /// Uses whatever the player is standing at: a door first, then the
    /// room's NPC.
    pub fn interact(&mut self) -> Result<(), CampusError> {
        let room = self.world.current_room();
        let player = *self.world.player().body();

        if let Some(target) = room
            .doors()
            .iter()
            .find(|door| door.body().overlaps(&player))
            .map(|door| door.target())
        {
            return self.walk_through(target);
        }

        let Some(npc) = room.npc() else {
            debug!(room_id = %room.id(), "nothing to interact with");
            return Ok(());
        };
        if npc.body().center().distance_to(player.center()) > self.config.interact_radius {
            debug!(room_id = %room.id(), "too far from anyone");
            return Ok(());
        }
        info!(
            room_id = %room.id(),
            npc = npc.name(),
            about = npc.description(),
            "{}",
            npc.dialogue()
        );
        if has_minigame(room.id()) {
            self.launch_minigame()?;
        }
        Ok(())
    }

    fn walk_through(&mut self, target: RoomId) -> Result<(), CampusError> {
        let from = self.world.current_room_id();
        self.world.change_room(target)?;
        // Arrive at the door leading back, if the new room has one.
        if let Some(center) = self
            .world
            .current_room()
            .door_to(from)
            .map(|door| door.body().center())
        {
            self.world.player_mut().place_centered(center);
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Minigames
    // -----------------------------------------------------------------------

    /// Starts the minigame of the current room.
    ///
    /// Pauses the overworld clock and gives the minigame a fresh clock and
    /// a key handler that carries over only what is still held. The outcome comes back over a one-shot channel.
    pub fn launch_minigame(&mut self) -> Result<(), CampusError> {
        if let Some(active) = &self.active {
            return Err(MinigameError::InvalidState(format!(
                "{} is already running",
                active.minigame.name()
            ))
            .into());
        }

        let room = self.world.current_room_id();
        let options = MinigameOptions {
            seed: self
                .config
                .minigame_seed
                .map(|seed| seed.wrapping_add(self.launches)),
            scoring: None,
        };
        let mut minigame = create_minigame_with(room, options)?;

        let (tx, rx) = oneshot::channel();
        let callback = move |outcome: MinigameOutcome| {
            let _ = tx.send(outcome);
        };
        minigame.start(&mut self.stage, Box::new(callback))?;

        self.launches += 1;
        self.clock.pause();
        // Keys held at launch stay held in the run and are dropped from
        // the overworld, so neither side sees a phantom one-shot.
        let keys = self.keys.held_only();
        self.keys = KeyHandler::new();
        info!(room_id = %room, minigame = minigame.name(), "minigame launched");

        self.active = Some(ActiveMinigame {
            room,
            minigame,
            scheduler: TickScheduler::new(self.config.tick.clone()),
            keys,
            outcome: rx,
        });
        Ok(())
    }

    /// One tick of the running minigame.
    ///
    /// Returns the outcome once the run ends. The outcome is recorded in
    /// the ledger for the room that launched the minigame and the player
    /// goes back to exploring.
    pub fn minigame_tick(&mut self, dt: Duration) -> Option<MinigameOutcome> {
        let active = self.active.as_mut()?;
        let state = active
            .minigame
            .tick(dt, &mut active.keys, &mut self.stage);
        active.scheduler.record_tick_end();

        match active.outcome.try_recv() {
            Ok(outcome) => {
                self.complete(outcome);
                Some(outcome)
            }
            Err(oneshot::error::TryRecvError::Empty) => {
                if state == MinigameState::Terminal {
                    warn!(room_id = %active.room, "minigame ended without an outcome");
                    self.end_run();
                }
                None
            }
            Err(oneshot::error::TryRecvError::Closed) => {
                warn!(room_id = %active.room, "minigame dropped its callback");
                self.end_run();
                None
            }
        }
    }

    /// Stops the running minigame without recording anything.
    pub fn abandon_minigame(&mut self) {
        let Some(mut active) = self.active.take() else {
            return;
        };
        active.minigame.stop(&mut self.stage);
        active.scheduler.stop();
        info!(room_id = %active.room, "minigame abandoned");
        self.clock.resume();
    }

    fn complete(&mut self, outcome: MinigameOutcome) {
        let Some(room) = self.end_run() else {
            return;
        };
        let data = RoomScoreData::from(outcome);
        self.ledger.record(room, data);
        info!(
            room_id = %room,
            success = outcome.success,
            total_points = self.ledger.total_points(),
            "back to exploring"
        );
    }

    fn end_run(&mut self) -> Option<RoomId> {
        let mut active = self.active.take()?;
        active.scheduler.stop();
        self.clock.resume();
        Some(active.room)
    }

    /// Resizes the overworld.
    pub fn resize(&mut self, size: Extent) {
        self.world.resize(size);
    }

    // -----------------------------------------------------------------------
    // Loop
    // -----------------------------------------------------------------------

    /// Runs the game until [`InputEvent::Quit`] arrives or `events` closes.
    ///
    /// Events, overworld ticks and minigame ticks are served by one
    /// `select!` loop, so a tick always sees a consistent key state. A
    /// minigame still running on exit is abandoned.
    pub async fn run(&mut self, mut events: mpsc::Receiver<InputEvent>) {
        info!(mode = %self.mode(), "game loop started");

        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else {
                        debug!("input channel closed");
                        break;
                    };
                    if self.handle_event(event).is_break() {
                        break;
                    }
                }
                info = self.clock.wait_for_tick() => {
                    if let Err(e) = self.explore_tick(info.dt) {
                        warn!(error = %e, "interaction failed");
                    }
                    self.clock.record_tick_end();
                }
                info = next_minigame_tick(&mut self.active) => {
                    self.minigame_tick(info.dt);
                }
            }
        }

        self.abandon_minigame();
        info!(
            rooms_completed = self.ledger.completed_rooms().len(),
            total_points = self.ledger.total_points(),
            "game loop stopped"
        );
    }
}

/// The next tick of the running minigame. Pends forever when none runs.
async fn next_minigame_tick(active: &mut Option<ActiveMinigame>) -> TickInfo {
    match active {
        Some(active) => active.scheduler.wait_for_tick().await,
        None => std::future::pending().await,
    }
}
