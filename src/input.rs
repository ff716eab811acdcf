//! Keyboard state tracking
//!
//! Key events arrive between frames. The tracker remembers which keys are
//! held and which jump-key edges happened, and hands both to the simulation
//! as one [`TickInput`] per frame.

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    /// Hold to charge, release to jump
    Jump,
}

impl Key {
    /// Map a browser `KeyboardEvent.key` value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            " " | "Spacebar" => Some(Key::Jump),
            _ => None,
        }
    }
}

/// Current key state plus jump edges not yet consumed by a tick
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    left: bool,
    right: bool,
    jump: bool,
    jump_pressed: bool,
    jump_released: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. Auto-repeat while held is ignored.
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Jump => {
                if !self.jump {
                    self.jump = true;
                    self.jump_pressed = true;
                }
            }
        }
    }

    /// Record a key going up
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Jump => {
                if self.jump {
                    self.jump = false;
                    self.jump_released = true;
                }
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Jump => self.jump,
        }
    }

    /// Build this frame's input and clear the edges
    pub fn snapshot(&mut self) -> TickInput {
        let input = TickInput {
            left: self.left,
            right: self.right,
            charge_held: self.jump,
            charge_pressed: self.jump_pressed,
            charge_released: self.jump_released,
        };
        self.jump_pressed = false;
        self.jump_released = false;
        input
    }

    /// Drop all held keys and pending edges. Called on window blur, when
    /// key-up events stop arriving.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
