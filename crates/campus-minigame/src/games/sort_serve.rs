//! Sort & Serve: the bar room's liquid-sorting puzzle.
//!
//! A row of glasses holds layers of three flavours, shuffled, plus two
//! empty glasses. The player moves a cursor along the row, picks a source
//! glass and then a target. A pour moves the whole run of same-flavour
//! layers on top of the source, as far as the target has room, and is
//! legal only onto an empty glass or onto the same flavour. Every illegal
//! pour costs a life.

use std::time::Duration;

use campus_input::KeyHandler;
use campus_world::Extent;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Simulation, WindowSpec};

/// A drink layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flavor {
    Cola,
    Lemon,
    Mint,
}

impl Flavor {
    pub const ALL: [Flavor; 3] = [Flavor::Cola, Flavor::Lemon, Flavor::Mint];
}

/// A glass, bottom layer first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Glass {
    layers: Vec<Flavor>,
}

impl Glass {
    pub const CAPACITY: usize = 4;

    /// A glass holding `layers`, bottom first. Extra layers are dropped.
    pub fn new(mut layers: Vec<Flavor>) -> Self {
        layers.truncate(Self::CAPACITY);
        Self { layers }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &[Flavor] {
        &self.layers
    }

    pub fn top(&self) -> Option<Flavor> {
        self.layers.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.layers.len() >= Self::CAPACITY
    }

    pub fn free_space(&self) -> usize {
        Self::CAPACITY.saturating_sub(self.layers.len())
    }

    /// Full, and every layer is the same flavour.
    pub fn is_served(&self) -> bool {
        self.is_full() && self.layers.windows(2).all(|w| w[0] == w[1])
    }

    /// Number of same-flavour layers on top.
    fn top_run(&self) -> usize {
        match self.top() {
            Some(top) => self.layers.iter().rev().take_while(|f| **f == top).count(),
            None => 0,
        }
    }
}

/// Why a pour was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PourError {
    #[error("no glass at index {0}")]
    NoSuchGlass(usize),
    #[error("cannot pour a glass into itself")]
    SameGlass,
    #[error("source glass is empty")]
    EmptySource,
    #[error("target glass is full")]
    FullTarget,
    #[error("flavours do not match")]
    Mismatch,
}

/// The Sort & Serve model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortServe {
    glasses: Vec<Glass>,
    cursor: usize,
    selected: Option<usize>,
    lives: u32,
    pours: u32,
    held_left: bool,
    held_right: bool,
}

impl SortServe {
    pub const LIVES: u32 = 3;
    pub const EMPTY_GLASSES: usize = 2;

    /// A puzzle over the given glasses, with full lives.
    pub fn from_glasses(glasses: Vec<Glass>) -> Self {
        Self {
            glasses,
            cursor: 0,
            selected: None,
            lives: Self::LIVES,
            pours: 0,
            held_left: false,
            held_right: false,
        }
    }

    /// A shuffled puzzle that is not already solved.
    pub fn shuffled(rng: &mut StdRng) -> Self {
        let mut layers: Vec<Flavor> = Flavor::ALL
            .iter()
            .flat_map(|f| std::iter::repeat_n(*f, Glass::CAPACITY))
            .collect();
        loop {
            layers.shuffle(rng);
            let mut glasses: Vec<Glass> = layers
                .chunks(Glass::CAPACITY)
                .map(|chunk| Glass::new(chunk.to_vec()))
                .collect();
            glasses.extend(std::iter::repeat_with(Glass::empty).take(Self::EMPTY_GLASSES));
            let puzzle = Self::from_glasses(glasses);
            if !puzzle.is_sorted() {
                return puzzle;
            }
        }
    }

    pub fn glasses(&self) -> &[Glass] {
        &self.glasses
    }

    /// Index of the glass under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the glass picked as pour source, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Successful pours so far.
    pub fn pours(&self) -> u32 {
        self.pours
    }

    /// Every glass is empty or served.
    pub fn is_sorted(&self) -> bool {
        self.glasses.iter().all(|g| g.is_empty() || g.is_served())
    }

    /// Pours from glass `from` into glass `to`, returning the number of
    /// layers moved. A refused pour costs a life.
    pub fn pour(&mut self, from: usize, to: usize) -> Result<usize, PourError> {
        let result = self.check_pour(from, to);
        match result {
            Ok(moved) => {
                for _ in 0..moved {
                    if let Some(layer) = self.glasses[from].layers.pop() {
                        self.glasses[to].layers.push(layer);
                    }
                }
                self.pours += 1;
                debug!(from, to, moved, "pour");
            }
            Err(reason) => {
                self.lives = self.lives.saturating_sub(1);
                debug!(from, to, %reason, lives = self.lives, "pour refused");
            }
        }
        result
    }

    fn check_pour(&self, from: usize, to: usize) -> Result<usize, PourError> {
        let src = self.glasses.get(from).ok_or(PourError::NoSuchGlass(from))?;
        let dst = self.glasses.get(to).ok_or(PourError::NoSuchGlass(to))?;
        if from == to {
            return Err(PourError::SameGlass);
        }
        let top = src.top().ok_or(PourError::EmptySource)?;
        if dst.is_full() {
            return Err(PourError::FullTarget);
        }
        if dst.top().is_some_and(|t| t != top) {
            return Err(PourError::Mismatch);
        }
        Ok(src.top_run().min(dst.free_space()))
    }

    fn move_cursor(&mut self, left: bool, right: bool) {
        let n = self.glasses.len();
        if n == 0 {
            return;
        }
        if left && !self.held_left {
            self.cursor = (self.cursor + n - 1) % n;
        }
        if right && !self.held_right {
            self.cursor = (self.cursor + 1) % n;
        }
        self.held_left = left;
        self.held_right = right;
    }

    fn select(&mut self) {
        match self.selected.take() {
            None => {
                if self.glasses.get(self.cursor).is_some_and(|g| !g.is_empty()) {
                    self.selected = Some(self.cursor);
                }
            }
            // Picking the source again puts it back.
            Some(src) if src == self.cursor => {}
            Some(src) => {
                if let Err(reason) = self.pour(src, self.cursor) {
                    trace!(%reason, "selection cleared");
                }
            }
        }
    }
}

impl Simulation for SortServe {
    const NAME: &'static str = "Sort & Serve";
    const DESCRIPTION: &'static str = "Pour colored layers until each glass is uniform.";

    fn window() -> WindowSpec {
        WindowSpec::fixed("Sort & Serve", Extent::new(600, 400))
    }

    fn create(rng: &mut StdRng) -> Self {
        Self::shuffled(rng)
    }

    fn step(&mut self, _dt: Duration, keys: &mut KeyHandler, _rng: &mut StdRng) {
        self.move_cursor(keys.is_left_pressed(), keys.is_right_pressed());
        if keys.action_just_pressed() {
            self.select();
        }
    }

    fn has_won(&self) -> bool {
        self.is_sorted()
    }

    fn has_lost(&self) -> bool {
        self.lives == 0
    }

    fn remaining_lives(&self) -> u32 {
        self.lives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_input::Key;
    use rand::SeedableRng;
    use super::Flavor::{Cola, Lemon, Mint};

    fn two_step_puzzle() -> SortServe {
        SortServe::from_glasses(vec![
            Glass::new(vec![Cola, Cola, Cola, Lemon]),
            Glass::new(vec![Lemon, Lemon, Lemon, Cola]),
            Glass::empty(),
        ])
    }

    fn tick(game: &mut SortServe, keys: &mut KeyHandler) {
        let mut rng = StdRng::seed_from_u64(0);
        game.step(Duration::from_millis(16), keys, &mut rng);
    }

    #[test]
    fn test_glass_top_run() {
        let g = Glass::new(vec![Cola, Lemon, Lemon]);
        assert_eq!(g.top(), Some(Lemon));
        assert_eq!(g.top_run(), 2);
        assert_eq!(g.free_space(), 1);
        assert!(!g.is_served());
        assert!(Glass::new(vec![Mint; 4]).is_served());
        assert_eq!(Glass::new(vec![Mint; 6]).layers().len(), Glass::CAPACITY);
    }

    #[test]
    fn test_shuffled_puzzle_is_unsolved_and_complete() {
        let mut rng = StdRng::seed_from_u64(42);
        let game = SortServe::shuffled(&mut rng);
        assert!(!game.is_sorted());
        assert_eq!(game.glasses().len(), 5);
        assert_eq!(game.lives(), SortServe::LIVES);
        for flavor in Flavor::ALL {
            let count: usize = game
                .glasses()
                .iter()
                .map(|g| g.layers().iter().filter(|f| **f == flavor).count())
                .sum();
            assert_eq!(count, Glass::CAPACITY);
        }
    }

    #[test]
    fn test_legal_pours_solve_the_puzzle() {
        let mut game = two_step_puzzle();
        assert_eq!(game.pour(0, 2), Ok(1));
        assert_eq!(game.pour(1, 2), Err(PourError::Mismatch));
        assert_eq!(game.lives(), 2);

        assert_eq!(game.pour(1, 0), Ok(1));
        assert_eq!(game.pour(2, 1), Ok(1));
        assert!(game.is_sorted());
        assert!(game.has_won());
        assert_eq!(game.pours(), 3);
    }

    #[test]
    fn test_pour_moves_run_limited_by_space() {
        let mut game = SortServe::from_glasses(vec![
            Glass::new(vec![Mint, Cola, Cola, Cola]),
            Glass::new(vec![Lemon, Lemon, Cola]),
        ]);
        assert_eq!(game.pour(0, 1), Ok(1));
        assert_eq!(game.glasses()[0].layers(), &[Mint, Cola, Cola]);
        assert_eq!(game.glasses()[1].layers(), &[Lemon, Lemon, Cola, Cola]);
    }

    #[test]
    fn test_refused_pours_cost_lives_until_lost() {
        let mut game = two_step_puzzle();
        assert_eq!(game.pour(2, 0), Err(PourError::EmptySource));
        assert_eq!(game.pour(1, 0), Err(PourError::FullTarget));
        assert_eq!(game.pour(0, 0), Err(PourError::SameGlass));
        assert_eq!(game.lives(), 0);
        assert!(game.has_lost());
        assert_eq!(game.pour(0, 9), Err(PourError::NoSuchGlass(9)));
        assert_eq!(game.lives(), 0);
    }

    #[test]
    fn test_cursor_moves_once_per_press_and_wraps() {
        let mut game = two_step_puzzle();
        let mut keys = KeyHandler::new();

        keys.key_pressed(Key::Left);
        tick(&mut game, &mut keys);
        assert_eq!(game.cursor(), 2);
        // Still held: no further movement.
        tick(&mut game, &mut keys);
        tick(&mut game, &mut keys);
        assert_eq!(game.cursor(), 2);

        keys.key_released(Key::Left);
        tick(&mut game, &mut keys);
        keys.key_pressed(Key::Right);
        tick(&mut game, &mut keys);
        assert_eq!(game.cursor(), 0);
    }

    #[test]
    fn test_select_then_pour_with_keys() {
        let mut game = two_step_puzzle();
        let mut keys = KeyHandler::new();

        // Pick glass 0.
        keys.key_pressed(Key::E);
        tick(&mut game, &mut keys);
        keys.key_released(Key::E);
        assert_eq!(game.selected(), Some(0));

        // Move to glass 2 and pour with space.
        for _ in 0..2 {
            keys.key_pressed(Key::D);
            tick(&mut game, &mut keys);
            keys.key_released(Key::D);
            tick(&mut game, &mut keys);
        }
        assert_eq!(game.cursor(), 2);
        keys.key_pressed(Key::Space);
        tick(&mut game, &mut keys);

        assert_eq!(game.selected(), None);
        assert_eq!(game.glasses()[2].layers(), &[Lemon]);
    }

    #[test]
    fn test_refused_pour_with_keys_clears_selection_and_costs_a_life() {
        let mut game = two_step_puzzle();
        let mut keys = KeyHandler::new();

        // Pick glass 0, move onto glass 1 and pour Lemon onto Cola.
        keys.key_pressed(Key::E);
        tick(&mut game, &mut keys);
        keys.key_released(Key::E);
        keys.key_pressed(Key::D);
        tick(&mut game, &mut keys);
        keys.key_released(Key::D);
        keys.key_pressed(Key::Space);
        tick(&mut game, &mut keys);

        assert_eq!(game.selected(), None);
        assert_eq!(game.lives(), SortServe::LIVES - 1);
        assert_eq!(game.pours(), 0);
        assert_eq!(game.glasses()[1].layers(), &[Lemon, Lemon, Lemon, Cola]);
    }

    #[test]
    fn test_selecting_empty_glass_does_nothing() {
        let mut game = two_step_puzzle();
        let mut keys = KeyHandler::new();
        keys.key_pressed(Key::A);
        tick(&mut game, &mut keys);
        keys.key_pressed(Key::E);
        tick(&mut game, &mut keys);
        assert_eq!(game.cursor(), 2);
        assert_eq!(game.selected(), None);
        assert_eq!(game.lives(), SortServe::LIVES);
    }
}
