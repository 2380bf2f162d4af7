//! Logical keys and the transitions the window toolkit reports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InputError;

/// A movement direction on the overworld or a minigame playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A physical key the game has a binding for.
///
/// Every direction has two bindings: a letter and an arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    /// Interact.
    E,
    Space,
}

impl Key {
    /// The movement direction this key is bound to, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::W | Key::Up => Some(Direction::Up),
            Key::S | Key::Down => Some(Direction::Down),
            Key::A | Key::Left => Some(Direction::Left),
            Key::D | Key::Right => Some(Direction::Right),
            Key::E | Key::Space => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Key::W => "w",
            Key::A => "a",
            Key::S => "s",
            Key::D => "d",
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
            Key::E => "e",
            Key::Space => "space",
        };
        f.write_str(name)
    }
}

impl FromStr for Key {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = match s.trim() {
            "" if s.contains(' ') => "space".to_string(),
            trimmed => trimmed.to_ascii_lowercase(),
        };
        match name.as_str() {
            "w" => Ok(Key::W),
            "a" => Ok(Key::A),
            "s" => Ok(Key::S),
            "d" => Ok(Key::D),
            "up" => Ok(Key::Up),
            "down" => Ok(Key::Down),
            "left" => Ok(Key::Left),
            "right" => Ok(Key::Right),
            "e" => Ok(Key::E),
            "space" => Ok(Key::Space),
            _ => Err(InputError::UnknownKey(s.to_string())),
        }
    }
}

/// A single key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

impl KeyEvent {
    /// The key this transition belongs to.
    pub fn key(self) -> Key {
        match self {
            KeyEvent::Pressed(k) | KeyEvent::Released(k) => k,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_direction_has_two_bindings() {
        let all = [
            Key::W,
            Key::A,
            Key::S,
            Key::D,
            Key::Up,
            Key::Down,
            Key::Left,
            Key::Right,
        ];
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let count = all.iter().filter(|k| k.direction() == Some(dir)).count();
            assert_eq!(count, 2, "{dir:?} should have two bindings");
        }
        assert_eq!(Key::E.direction(), None);
        assert_eq!(Key::Space.direction(), None);
    }

    #[test]
    fn test_key_from_str_roundtrips_display() {
        for key in [Key::W, Key::Left, Key::E, Key::Space] {
            assert_eq!(key.to_string().parse::<Key>().unwrap(), key);
        }
        assert_eq!("  UP ".parse::<Key>().unwrap(), Key::Up);
        assert_eq!(" ".parse::<Key>().unwrap(), Key::Space);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "q".parse::<Key>().unwrap_err();
        assert!(err.to_string().contains("q"));
    }
}
