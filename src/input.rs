//! Keyboard binding
//!
//! Hosts forward key press/release events here; the resulting flags are
//! read once per frame as a [`TickInput`].

use crate::sim::TickInput;

/// One of the four steering directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value (arrows or WASD)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Key that flips the spawn-zone debug outline
pub fn toggles_spawn_zones(key: &str) -> bool {
    matches!(key, "z" | "Z")
}

impl TickInput {
    /// Set or clear the flag for one direction
    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    /// Apply a key event; returns true if the key steers the ship
    pub fn apply_key(&mut self, key: &str, pressed: bool) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.set(direction, pressed);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = TickInput::default();
        assert!(input.apply_key("ArrowLeft", true));
        assert!(input.apply_key("w", true));
        assert!(input.left && input.up);
        assert!(!input.right && !input.down);

        assert!(input.apply_key("ArrowLeft", false));
        assert!(!input.left);
        assert!(input.up);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut input = TickInput::default();
        assert!(!input.apply_key("Enter", true));
        assert!(!input.apply_key(" ", true));
        assert_eq!(input, TickInput::default());
    }

    #[test]
    fn test_zone_toggle_key_does_not_steer() {
        assert!(toggles_spawn_zones("z"));
        assert!(toggles_spawn_zones("Z"));
        assert!(!toggles_spawn_zones("a"));

        let mut input = TickInput::default();
        assert!(!input.apply_key("z", true));
        assert_eq!(input, TickInput::default());
    }
}
