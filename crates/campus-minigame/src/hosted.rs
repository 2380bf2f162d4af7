//! Generic lifecycle host wrapping a concrete game model.

use std::time::Duration;

use campus_input::KeyHandler;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::Instant;
use tracing::{info, trace};

use crate::scoring::LifeScoring;
use crate::{
    Minigame, MinigameCallback, MinigameError, MinigameOutcome, MinigameState, Notice,
    ScoringStrategy, Stage, WindowId, WindowSpec,
};

/// The model of one concrete minigame.
///
/// Implementors only write game rules. [`Hosted`] owns the window, the
/// clock, the scoring and the callback.
pub trait Simulation: Sized {
    /// Display name.
    const NAME: &'static str;

    /// One-line rules summary.
    const DESCRIPTION: &'static str;

    /// The window the game is played in.
    fn window() -> WindowSpec;

    /// A fresh model for a new run.
    fn create(rng: &mut StdRng) -> Self;

    /// Advances the model by one tick.
    fn step(&mut self, dt: Duration, keys: &mut KeyHandler, rng: &mut StdRng);

    fn has_won(&self) -> bool;

    fn has_lost(&self) -> bool;

    /// The metric handed to the scoring strategy at the end of a run.
    fn remaining_lives(&self) -> u32;
}

/// A [`Simulation`] hosted behind the [`Minigame`] lifecycle.
pub struct Hosted<S: Simulation> {
    state: MinigameState,
    scoring: Box<dyn ScoringStrategy>,
    rng: StdRng,
    model: Option<S>,
    window: Option<WindowId>,
    callback: Option<Box<dyn MinigameCallback>>,
    started_at: Option<Instant>,
}

impl<S: Simulation> Hosted<S> {
    /// A minigame scored by lives left, seeded from the OS.
    pub fn new() -> Self {
        Self::with_parts(Box::new(LifeScoring::default()), StdRng::from_os_rng())
    }

    /// A minigame with a custom strategy and random source.
    pub fn with_parts(scoring: Box<dyn ScoringStrategy>, rng: StdRng) -> Self {
        Self {
            state: MinigameState::Idle,
            scoring,
            rng,
            model: None,
            window: None,
            callback: None,
            started_at: None,
        }
    }

    /// Read-only view of the model, for presentation.
    pub fn model(&self) -> Option<&S> {
        self.model.as_ref()
    }

    /// The window currently open, if any.
    pub fn window(&self) -> Option<WindowId> {
        self.window
    }

    fn finish(&mut self, success: bool, stage: &mut dyn Stage) {
        self.state = MinigameState::Terminal;

        if let Some(window) = self.window.take() {
            stage.close_window(window);
        }

        let elapsed = self
            .started_at
            .map(|t| t.elapsed().as_secs())
            .unwrap_or_default();
        let elapsed_secs = u32::try_from(elapsed).unwrap_or(u32::MAX);
        let lives = self.model.as_ref().map_or(0, S::remaining_lives);
        let score = if success {
            self.scoring.calculate(lives)
        } else {
            0
        };
        let outcome = MinigameOutcome {
            success,
            elapsed_secs,
            score,
        };

        stage.notify(&Notice::for_outcome(&outcome));

        info!(
            minigame = S::NAME,
            success, elapsed_secs, score, lives, "minigame finished"
        );

        if let Some(callback) = self.callback.take() {
            callback.on_complete(outcome);
        }
    }
}

impl<S: Simulation> Default for Hosted<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Simulation> Minigame for Hosted<S> {
    fn name(&self) -> &'static str {
        S::NAME
    }

    fn description(&self) -> &'static str {
        S::DESCRIPTION
    }

    fn state(&self) -> MinigameState {
        self.state
    }

    fn start(
        &mut self,
        stage: &mut dyn Stage,
        callback: Box<dyn MinigameCallback>,
    ) -> Result<(), MinigameError> {
        if !self.state.can_transition_to(MinigameState::Running) {
            return Err(MinigameError::InvalidState(format!(
                "cannot start {} in state {}",
                S::NAME,
                self.state
            )));
        }

        self.model = Some(S::create(&mut self.rng));
        self.window = Some(stage.open_window(&S::window()));
        self.callback = Some(callback);
        self.started_at = Some(Instant::now());
        self.state = MinigameState::Running;

        info!(minigame = S::NAME, "minigame started");
        Ok(())
    }

    fn tick(
        &mut self,
        dt: Duration,
        keys: &mut KeyHandler,
        stage: &mut dyn Stage,
    ) -> MinigameState {
        if !self.state.is_running() {
            trace!(minigame = S::NAME, state = %self.state, "tick ignored");
            return self.state;
        }
        let Some(model) = self.model.as_mut() else {
            return self.state;
        };

        model.step(dt, keys, &mut self.rng);
        let (won, lost) = (model.has_won(), model.has_lost());

        if let Some(window) = self.window {
            stage.request_redraw(window);
        }

        if won {
            self.finish(true, stage);
        } else if lost {
            self.finish(false, stage);
        }
        self.state
    }

    fn stop(&mut self, stage: &mut dyn Stage) {
        if let Some(window) = self.window.take() {
            stage.close_window(window);
        }
        // Dropped, never invoked.
        self.callback = None;

        if self.state.is_running() {
            self.state = MinigameState::Terminal;
            info!(minigame = S::NAME, "minigame stopped");
        }
    }
}
