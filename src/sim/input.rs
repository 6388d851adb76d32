//! Per-tick input snapshot
//!
//! The simulation never polls a keyboard. Whatever drives it hands over
//! which keys are held this tick and which went down since the last one.

use bitflags::bitflags;

bitflags! {
    /// The fixed key set the game reacts to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Keys: u8 {
        const UP      = 1 << 0;
        const DOWN    = 1 << 1;
        const LEFT    = 1 << 2;
        const RIGHT   = 1 << 3;
        /// Enter
        const CONFIRM = 1 << 4;
        const ESCAPE  = 1 << 5;
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Keys currently held down (level)
    pub held: Keys,
    /// Keys that went down since the previous tick (edge)
    pub pressed: Keys,
}

impl TickInput {
    /// Keys held without a fresh press (e.g. scripted movement)
    pub fn holding(keys: Keys) -> Self {
        Self {
            held: keys,
            pressed: Keys::empty(),
        }
    }

    /// A single fresh press of `keys`
    pub fn press(keys: Keys) -> Self {
        Self {
            held: keys,
            pressed: keys,
        }
    }

    #[inline]
    pub fn is_held(&self, key: Keys) -> bool {
        self.held.contains(key)
    }

    #[inline]
    pub fn just_pressed(&self, key: Keys) -> bool {
        self.pressed.contains(key)
    }
}
