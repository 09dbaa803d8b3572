mod keymap;
mod padkeys;
mod tracker;

use std::fmt;

use padkeys_control::Key;
use padkeys_gamepad::Button;

pub use keymap::{KeyMap, Keystroke};
pub use padkeys::{Padkeys, TranslateError};
pub use tracker::{AxisState, DirectionTracker, ReleasePolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonPhase {
    Pressed,
    Released,
}

impl ButtonPhase {
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed {
            ButtonPhase::Pressed
        } else {
            ButtonPhase::Released
        }
    }
}

impl fmt::Display for ButtonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonPhase::Pressed => f.write_str("pressed"),
            ButtonPhase::Released => f.write_str("released"),
        }
    }
}

/// A logical button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub button: Button,
    pub phase: ButtonPhase,
}

impl ButtonEvent {
    pub fn new(button: Button, phase: ButtonPhase) -> Self {
        Self { button, phase }
    }

    pub fn pressed(button: Button) -> Self {
        Self::new(button, ButtonPhase::Pressed)
    }

    pub fn released(button: Button) -> Self {
        Self::new(button, ButtonPhase::Released)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    KeyPress(Key),
    KeyRelease(Key),
}

impl Action {
    pub fn key(self) -> Key {
        match self {
            Action::KeyPress(key) | Action::KeyRelease(key) => key,
        }
    }
}
