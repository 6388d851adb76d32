//! Edge detection for polled keyboards

use crate::sim::{Keys, TickInput};

/// Remembers last tick's held keys so fresh presses can be told apart
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    previous: Keys,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build this tick's input from the keys held right now
    pub fn update(&mut self, held: Keys) -> TickInput {
        let pressed = held.difference(self.previous);
        self.previous = held;
        TickInput { held, pressed }
    }

    /// Forget held keys (e.g. after the window loses focus)
    pub fn reset(&mut self) {
        self.previous = Keys::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once_while_held() {
        let mut tracker = InputTracker::new();

        let first = tracker.update(Keys::CONFIRM);
        assert!(first.just_pressed(Keys::CONFIRM));
        assert!(first.is_held(Keys::CONFIRM));

        let second = tracker.update(Keys::CONFIRM);
        assert!(!second.just_pressed(Keys::CONFIRM));
        assert!(second.is_held(Keys::CONFIRM));

        let released = tracker.update(Keys::empty());
        assert_eq!(released, TickInput::default());

        let again = tracker.update(Keys::CONFIRM);
        assert!(again.just_pressed(Keys::CONFIRM));
    }

    #[test]
    fn test_new_key_while_another_held() {
        let mut tracker = InputTracker::new();
        tracker.update(Keys::RIGHT);
        let input = tracker.update(Keys::RIGHT | Keys::UP);
        assert_eq!(input.pressed, Keys::UP);
        assert_eq!(input.held, Keys::RIGHT | Keys::UP);
    }

    #[test]
    fn test_reset_rearms_presses() {
        let mut tracker = InputTracker::new();
        tracker.update(Keys::ESCAPE);
        tracker.reset();
        assert!(tracker.update(Keys::ESCAPE).just_pressed(Keys::ESCAPE));
    }
}
