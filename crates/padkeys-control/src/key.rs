use std::fmt;

use evdev::Key as EvdevKey;

/// A key that can be emulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    UpArrow,
    DownArrow,
    LeftArrow,
    RightArrow,
    Return,
    Backspace,
}

impl Key {
    /// Every key the virtual keyboard registers.
    pub const ALL: [Key; 6] = [
        Key::UpArrow,
        Key::DownArrow,
        Key::LeftArrow,
        Key::RightArrow,
        Key::Return,
        Key::Backspace,
    ];

    /// Linux input event code of the key.
    pub fn code(self) -> u16 {
        EvdevKey::from(self).code()
    }
}

impl From<Key> for EvdevKey {
    fn from(key: Key) -> Self {
        match key {
            Key::UpArrow => EvdevKey::KEY_UP,
            Key::DownArrow => EvdevKey::KEY_DOWN,
            Key::LeftArrow => EvdevKey::KEY_LEFT,
            Key::RightArrow => EvdevKey::KEY_RIGHT,
            Key::Return => EvdevKey::KEY_ENTER,
            Key::Backspace => EvdevKey::KEY_BACKSPACE,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Key::UpArrow => "arrow_up",
            Key::DownArrow => "arrow_down",
            Key::LeftArrow => "arrow_left",
            Key::RightArrow => "arrow_right",
            Key::Return => "enter",
            Key::Backspace => "backspace",
        };
        f.write_str(name)
    }
}
