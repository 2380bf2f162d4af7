//! Catch the Balls: the garden room's reflex game.
//!
//! Balls drop from the top of the field at a steady pace. The player slides
//! a bottle along the bottom edge to catch them. Five catches win, three
//! misses lose.

use std::time::Duration;

use campus_input::KeyHandler;
use campus_world::Extent;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::{Simulation, WindowSpec};

/// A falling ball, by centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
}

/// The Catch the Balls model. Coordinates are field pixels, origin top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchBall {
    bottle_x: f32,
    balls: Vec<Ball>,
    caught: u32,
    missed: u32,
    since_spawn: Duration,
}

impl CatchBall {
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
    pub const BOTTLE_WIDTH: f32 = 80.0;
    pub const BOTTLE_HEIGHT: f32 = 20.0;
    /// Bottle speed in pixels per second.
    pub const BOTTLE_SPEED: f32 = 360.0;
    pub const BALL_RADIUS: f32 = 10.0;
    /// Fall speed in pixels per second.
    pub const BALL_SPEED: f32 = 180.0;
    pub const SPAWN_INTERVAL: Duration = Duration::from_millis(900);
    pub const TARGET: u32 = 5;
    pub const LIVES: u32 = 3;

    /// An empty field with the bottle centred.
    pub fn new() -> Self {
        Self {
            bottle_x: (Self::FIELD_WIDTH - Self::BOTTLE_WIDTH) / 2.0,
            balls: Vec::new(),
            caught: 0,
            missed: 0,
            since_spawn: Duration::ZERO,
        }
    }

    /// Left edge of the bottle.
    pub fn bottle_x(&self) -> f32 {
        self.bottle_x
    }

    /// Top edge of the bottle.
    pub fn bottle_y(&self) -> f32 {
        Self::FIELD_HEIGHT - Self::BOTTLE_HEIGHT - 10.0
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn caught(&self) -> u32 {
        self.caught
    }

    pub fn missed(&self) -> u32 {
        self.missed
    }

    /// Drops a ball at horizontal position `x`, just inside the top edge.
    pub fn spawn_ball_at(&mut self, x: f32) {
        let r = Self::BALL_RADIUS;
        self.balls.push(Ball {
            x: x.clamp(r, Self::FIELD_WIDTH - r),
            y: r,
        });
    }

    fn move_bottle(&mut self, keys: &KeyHandler, dt: f32) {
        let mut dx = 0.0;
        if keys.is_left_pressed() {
            dx -= Self::BOTTLE_SPEED * dt;
        }
        if keys.is_right_pressed() {
            dx += Self::BOTTLE_SPEED * dt;
        }
        self.bottle_x = (self.bottle_x + dx).clamp(0.0, Self::FIELD_WIDTH - Self::BOTTLE_WIDTH);
    }

    fn is_catching(&self, ball: &Ball) -> bool {
        let r = Self::BALL_RADIUS;
        let top = self.bottle_y();
        ball.y + r >= top
            && ball.y - r <= top + Self::BOTTLE_HEIGHT
            && ball.x + r >= self.bottle_x
            && ball.x - r <= self.bottle_x + Self::BOTTLE_WIDTH
    }

    fn drop_balls(&mut self, dt: f32) {
        let mut balls = std::mem::take(&mut self.balls);
        for ball in &mut balls {
            ball.y += Self::BALL_SPEED * dt;
        }
        balls.retain(|ball| {
            if self.is_catching(ball) {
                self.caught += 1;
                debug!(caught = self.caught, "ball caught");
                false
            } else if ball.y - Self::BALL_RADIUS > Self::FIELD_HEIGHT {
                self.missed += 1;
                debug!(missed = self.missed, "ball missed");
                false
            } else {
                true
            }
        });
        self.balls = balls;
    }
}

impl Default for CatchBall {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for CatchBall {
    const NAME: &'static str = "Garden Minigame";
    const DESCRIPTION: &'static str = "Move the bottle to catch falling balls. Reach 5 to win!";

    fn window() -> WindowSpec {
        WindowSpec::fixed("Catch the Balls", Extent::new(600, 400))
    }

    fn create(_rng: &mut StdRng) -> Self {
        Self::new()
    }

    fn step(&mut self, dt: Duration, keys: &mut KeyHandler, rng: &mut StdRng) {
        let secs = dt.as_secs_f32();
        self.move_bottle(keys, secs);
        self.drop_balls(secs);

        self.since_spawn += dt;
        while self.since_spawn >= Self::SPAWN_INTERVAL {
            self.since_spawn -= Self::SPAWN_INTERVAL;
            let r = Self::BALL_RADIUS;
            let x = rng.random_range(r..=Self::FIELD_WIDTH - r);
            self.spawn_ball_at(x);
        }
    }

    fn has_won(&self) -> bool {
        self.caught >= Self::TARGET
    }

    fn has_lost(&self) -> bool {
        self.missed >= Self::LIVES
    }

    fn remaining_lives(&self) -> u32 {
        Self::LIVES.saturating_sub(self.missed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_input::Key;
    use rand::SeedableRng;

    const DT: Duration = Duration::from_millis(100);

    fn run(game: &mut CatchBall, keys: &mut KeyHandler, steps: usize) {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..steps {
            game.step(DT, keys, &mut rng);
        }
    }

    #[test]
    fn test_bottle_starts_centred() {
        let game = CatchBall::new();
        assert_eq!(game.bottle_x(), 260.0);
        assert_eq!(game.bottle_y(), 370.0);
        assert!(game.balls().is_empty());
    }

    #[test]
    fn test_bottle_moves_and_clamps() {
        let mut game = CatchBall::new();
        let mut keys = KeyHandler::new();
        keys.key_pressed(Key::Right);
        run(&mut game, &mut keys, 5);
        assert!((game.bottle_x() - 440.0).abs() < 0.01);

        run(&mut game, &mut keys, 20);
        assert_eq!(game.bottle_x(), CatchBall::FIELD_WIDTH - CatchBall::BOTTLE_WIDTH);

        keys.key_released(Key::Right);
        keys.key_pressed(Key::A);
        run(&mut game, &mut keys, 30);
        assert_eq!(game.bottle_x(), 0.0);
    }

    #[test]
    fn test_ball_over_bottle_is_caught() {
        let mut game = CatchBall::new();
        let mut keys = KeyHandler::new();
        game.spawn_ball_at(300.0);
        run(&mut game, &mut keys, 19);
        assert_eq!(game.caught(), 0);
        run(&mut game, &mut keys, 1);
        assert_eq!(game.caught(), 1);
        assert_eq!(game.missed(), 0);
    }

    #[test]
    fn test_ball_beside_bottle_is_missed() {
        let mut game = CatchBall::new();
        let mut keys = KeyHandler::new();
        game.spawn_ball_at(20.0);
        run(&mut game, &mut keys, 23);
        assert_eq!(game.missed(), 1);
        assert_eq!(game.caught(), 0);
        assert_eq!(game.remaining_lives(), 2);
    }

    #[test]
    fn test_balls_spawn_on_interval() {
        let mut game = CatchBall::new();
        let mut keys = KeyHandler::new();
        run(&mut game, &mut keys, 8);
        assert!(game.balls().is_empty());
        run(&mut game, &mut keys, 1);
        assert_eq!(game.balls().len(), 1);
        run(&mut game, &mut keys, 9);
        assert_eq!(game.balls().len(), 2);
    }

    #[test]
    fn test_five_catches_win() {
        let mut game = CatchBall::new();
        let mut keys = KeyHandler::new();
        for _ in 0..CatchBall::TARGET {
            game.spawn_ball_at(300.0);
        }
        run(&mut game, &mut keys, 20);
        assert!(game.has_won());
        assert!(!game.has_lost());
    }

    #[test]
    fn test_three_misses_lose() {
        let mut game = CatchBall::new();
        let mut keys = KeyHandler::new();
        for _ in 0..CatchBall::LIVES {
            game.spawn_ball_at(20.0);
        }
        run(&mut game, &mut keys, 23);
        assert!(game.has_lost());
        assert_eq!(game.remaining_lives(), 0);
    }
}
