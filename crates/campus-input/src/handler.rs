//! The debounced key state consumed by gameplay.

use tracing::trace;

use crate::{Direction, Key, KeyEvent};

/// Folds key transitions into sticky and one-shot signals.
///
/// Movement flags are shared by two physical keys each. A press of either
/// sets the flag and a release of either clears it, even if the other
/// binding is still held down.
///
/// Interact and space each carry a held flag and a one-shot flag. The
/// one-shot is raised only on the press that finds the held flag clear, so
/// keyboard auto-repeat while a key stays down never re-arms it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyHandler {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    interact_held: bool,
    interact_just_pressed: bool,
    space_held: bool,
    space_just_pressed: bool,
}

impl KeyHandler {
    /// A handler with nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy that keeps what is physically held and drops pending
    /// one-shots.
    ///
    /// A key still down here cannot raise a one-shot in the copy until it
    /// is released and pressed again.
    pub fn held_only(&self) -> Self {
        Self {
            interact_just_pressed: false,
            space_just_pressed: false,
            ..self.clone()
        }
    }

    /// Applies a press or release.
    pub fn apply(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(key) => self.key_pressed(key),
            KeyEvent::Released(key) => self.key_released(key),
        }
    }

    /// Records a key press.
    pub fn key_pressed(&mut self, key: Key) {
        trace!(%key, "key pressed");
        if let Some(dir) = key.direction() {
            *self.flag_mut(dir) = true;
            return;
        }
        match key {
            Key::E => {
                if !self.interact_held {
                    self.interact_just_pressed = true;
                    self.interact_held = true;
                }
            }
            Key::Space => {
                if !self.space_held {
                    self.space_just_pressed = true;
                    self.space_held = true;
                }
            }
            _ => {}
        }
    }

    /// Records a key release.
    pub fn key_released(&mut self, key: Key) {
        trace!(%key, "key released");
        if let Some(dir) = key.direction() {
            *self.flag_mut(dir) = false;
            return;
        }
        match key {
            Key::E => self.interact_held = false,
            Key::Space => self.space_held = false,
            _ => {}
        }
    }

    /// Whether a direction is currently held.
    pub fn is_pressed(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_up_pressed(&self) -> bool {
        self.up
    }

    pub fn is_down_pressed(&self) -> bool {
        self.down
    }

    pub fn is_left_pressed(&self) -> bool {
        self.left
    }

    pub fn is_right_pressed(&self) -> bool {
        self.right
    }

    /// Whether the interact key is held down.
    pub fn is_interact_held(&self) -> bool {
        self.interact_held
    }

    /// Whether the space key is held down.
    pub fn is_space_held(&self) -> bool {
        self.space_held
    }

    /// Returns `true` once per physical interact press, then `false` until
    /// the key is released and pressed again.
    pub fn interact_just_pressed(&mut self) -> bool {
        std::mem::take(&mut self.interact_just_pressed)
    }

    /// Returns `true` once per physical space press.
    pub fn space_just_pressed(&mut self) -> bool {
        std::mem::take(&mut self.space_just_pressed)
    }

    /// Either action key was just pressed. Consumes both one-shots.
    pub fn action_just_pressed(&mut self) -> bool {
        let interact = self.interact_just_pressed();
        let space = self.space_just_pressed();
        interact || space
    }

    fn flag_mut(&mut self, dir: Direction) -> &mut bool {
        match dir {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}
