//! Entities living in a room: the player, doors and NPCs.
//!
//! Every entity carries a [`Body`] that remembers the environment size it
//! was laid out for, so a window resize can rescale it in place.

use std::time::Duration;

use campus_input::{Direction, KeyHandler};
use serde::{Deserialize, Serialize};

use crate::{Extent, Point, RoomId};

/// An axis-aligned box positioned inside an environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    position: Point,
    width: f32,
    height: f32,
    env: Extent,
}

impl Body {
    pub fn new(position: Point, width: f32, height: f32, env: Extent) -> Self {
        let mut body = Self {
            position,
            width,
            height,
            env,
        };
        body.clamp_to_env();
        body
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// The environment size this body is laid out for.
    pub fn env(&self) -> Extent {
        self.env
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    /// Moves the top-left corner, clamped to the environment.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.clamp_to_env();
    }

    pub fn overlaps(&self, other: &Body) -> bool {
        self.position.x < other.position.x + other.width
            && other.position.x < self.position.x + self.width
            && self.position.y < other.position.y + other.height
            && other.position.y < self.position.y + self.height
    }

    /// Rescales position and size from the current environment to `env`.
    pub fn resize(&mut self, env: Extent) {
        let (sx, sy) = self.env.scale_to(env);
        self.position.x *= sx;
        self.position.y *= sy;
        self.width *= sx;
        self.height *= sy;
        self.env = env;
        self.clamp_to_env();
    }

    fn clamp_to_env(&mut self) {
        let max_x = (self.env.width as f32 - self.width).max(0.0);
        let max_y = (self.env.height as f32 - self.height).max(0.0);
        self.position.x = self.position.x.clamp(0.0, max_x);
        self.position.y = self.position.y.clamp(0.0, max_y);
    }
}

/// Anything with a body that follows environment resizes.
pub trait Entity {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    fn resize(&mut self, env: Extent) {
        self.body_mut().resize(env);
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// The single player, shared by every room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    body: Body,
    /// Movement speed as a fraction of the environment width per second.
    speed: f32,
}

impl Player {
    const SIZE: f32 = 32.0;
    const DEFAULT_SPEED: f32 = 0.4;

    /// A player standing at the bottom centre of the environment.
    pub fn new(env: Extent) -> Self {
        let position = Point::new(
            env.width as f32 / 2.0 - Self::SIZE / 2.0,
            env.height as f32 - Self::SIZE * 2.0,
        );
        Self {
            body: Body::new(position, Self::SIZE, Self::SIZE, env),
            speed: Self::DEFAULT_SPEED,
        }
    }

    /// Moves the player according to the held direction keys.
    pub fn advance(&mut self, keys: &KeyHandler, dt: Duration) {
        let step = self.speed * self.body.env().width as f32 * dt.as_secs_f32();
        let mut pos = self.body.position();
        if keys.is_pressed(Direction::Up) {
            pos.y -= step;
        }
        if keys.is_pressed(Direction::Down) {
            pos.y += step;
        }
        if keys.is_pressed(Direction::Left) {
            pos.x -= step;
        }
        if keys.is_pressed(Direction::Right) {
            pos.x += step;
        }
        self.body.set_position(pos);
    }

    /// Places the player so its centre sits on `center`.
    pub fn place_centered(&mut self, center: Point) {
        let half_w = self.body.width() / 2.0;
        let half_h = self.body.height() / 2.0;
        self.body
            .set_position(Point::new(center.x - half_w, center.y - half_h));
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

// ---------------------------------------------------------------------------
// Door
// ---------------------------------------------------------------------------

/// A door leading to another room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    body: Body,
    target: RoomId,
}

impl Door {
    pub fn new(body: Body, target: RoomId) -> Self {
        Self { body, target }
    }

    /// The room this door opens onto.
    pub fn target(&self) -> RoomId {
        self.target
    }
}

impl Entity for Door {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

// ---------------------------------------------------------------------------
// Npc
// ---------------------------------------------------------------------------

/// The interactable character of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    body: Body,
    name: String,
    description: String,
    dialogue: String,
}

impl Npc {
    pub fn new(
        body: Body,
        name: impl Into<String>,
        description: impl Into<String>,
        dialogue: impl Into<String>,
    ) -> Self {
        Self {
            body,
            name: name.into(),
            description: description.into(),
            dialogue: dialogue.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Who the character is.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// What the character says when talked to.

    pub fn dialogue(&self) -> &str {
        &self.dialogue
    }
}

impl Entity for Npc {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
