//! Input events fed to the game loop.

use std::str::FromStr;

use campus_input::{Key, KeyEvent};
use campus_world::Extent;

use crate::CampusError;

/// Something the outside world tells the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// The overworld window changed size.
    Resize(Extent),
    /// Leave the game loop.
    Quit,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}

/// Parses one line of scripted input:
///
/// - `+<key>` / `-<key>`: press / release, e.g. `+w`, `-space`
/// - `resize <w>x<h>`, e.g. `resize 1024x768`
/// - `quit`
impl FromStr for InputEvent {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if let Some(name) = line.strip_prefix('+') {
            return Ok(Self::Key(KeyEvent::Pressed(name.parse::<Key>()?)));
        }
        if let Some(name) = line.strip_prefix('-') {
            return Ok(Self::Key(KeyEvent::Released(name.parse::<Key>()?)));
        }
        if line.eq_ignore_ascii_case("quit") {
            return Ok(Self::Quit);
        }
        if let Some(size) = line.strip_prefix("resize ") {
            let (w, h) = size
                .trim()
                .split_once('x')
                .ok_or_else(|| CampusError::MalformedEvent(line.to_string()))?;
            let parse = |v: &str| {
                v.trim()
                    .parse::<u32>()
                    .map_err(|_| CampusError::MalformedEvent(line.to_string()))
            };
            return Ok(Self::Resize(Extent::new(parse(w)?, parse(h)?)));
        }
        Err(CampusError::MalformedEvent(line.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_events() {
        assert_eq!(
            "+w".parse::<InputEvent>().unwrap(),
            InputEvent::Key(KeyEvent::Pressed(Key::W))
        );
        assert_eq!(
            " -Space ".parse::<InputEvent>().unwrap(),
            InputEvent::Key(KeyEvent::Released(Key::Space))
        );
    }

    #[test]
    fn test_parse_resize_and_quit() {
        assert_eq!(
            "resize 1024x768".parse::<InputEvent>().unwrap(),
            InputEvent::Resize(Extent::new(1024, 768))
        );
        assert_eq!("QUIT".parse::<InputEvent>().unwrap(), InputEvent::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "+q".parse::<InputEvent>(),
            Err(CampusError::Input(_))
        ));
        assert!(matches!(
            "resize big".parse::<InputEvent>(),
            Err(CampusError::MalformedEvent(_))
        ));
        assert!(matches!(
            "jump".parse::<InputEvent>(),
            Err(CampusError::MalformedEvent(_))
        ));
    }
}
