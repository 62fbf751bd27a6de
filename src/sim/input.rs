//! Held directional keys
//!
//! Host code updates this on key events; only the motion tick reads it.

use glam::IVec2;

/// The four directional keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Parse a host key name (`KeyboardEvent.key` style)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputTracker {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

impl InputTracker {
    pub fn press(&mut self, key: Key) {
        *self.slot(key) = true;
    }

    pub fn release(&mut self, key: Key) {
        *self.slot(key) = false;
    }

    /// Net direction of the held keys, each axis in -1..=1 (screen space, +y is down)
    pub fn active_vector(&self) -> IVec2 {
        let axis = |neg: bool, pos: bool| pos as i32 - neg as i32;
        IVec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::ArrowLeft => &mut self.left,
            Key::ArrowRight => &mut self.right,
            Key::ArrowUp => &mut self.up,
            Key::ArrowDown => &mut self.down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposing_keys_cancel() {
        let mut input = InputTracker::default();
        input.press(Key::ArrowLeft);
        assert_eq!(input.active_vector(), IVec2::new(-1, 0));
        input.press(Key::ArrowRight);
        assert_eq!(input.active_vector(), IVec2::ZERO);
        input.press(Key::ArrowDown);
        assert_eq!(input.active_vector(), IVec2::new(0, 1));
    }

    #[test]
    fn test_press_release_idempotent() {
        let mut input = InputTracker::default();
        input.press(Key::ArrowUp);
        input.press(Key::ArrowUp);
        assert_eq!(input.active_vector(), IVec2::new(0, -1));
        input.release(Key::ArrowUp);
        input.release(Key::ArrowUp);
        assert_eq!(input.active_vector(), IVec2::ZERO);
        input.release(Key::ArrowLeft);
        assert_eq!(input, InputTracker::default());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(Key::from_name("a"), None);
    }

    #[test]
    fn test_clear() {
        let mut input = InputTracker::default();
        input.press(Key::ArrowLeft);
        input.press(Key::ArrowDown);
        input.clear();
        assert_eq!(input, InputTracker::default());
    }
}
