use std::fmt;

use ahash::AHashMap;
use padkeys_control::Key;
use padkeys_gamepad::Button;

/// Keystrokes the menu understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keystroke {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Back,
}

impl Keystroke {
    /// Keyboard key sent for the keystroke.
    pub fn key(self) -> Key {
        match self {
            Keystroke::Up => Key::UpArrow,
            Keystroke::Down => Key::DownArrow,
            Keystroke::Left => Key::LeftArrow,
            Keystroke::Right => Key::RightArrow,
            Keystroke::Enter => Key::Return,
            Keystroke::Back => Key::Backspace,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Keystroke::Up => "UP",
            Keystroke::Down => "DOWN",
            Keystroke::Left => "LEFT",
            Keystroke::Right => "RIGHT",
            Keystroke::Enter => "ENTER",
            Keystroke::Back => "BACK",
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Triggers are left out on purpose; they produce nothing.
const KEYSTROKES: &[(Button, Option<Keystroke>)] = &[
    (Button::Start, Some(Keystroke::Enter)),
    (Button::Select, None),
    (Button::Y, Some(Keystroke::Back)),
    (Button::X, Some(Keystroke::Enter)),
    (Button::B, Some(Keystroke::Back)),
    (Button::A, Some(Keystroke::Enter)),
    (Button::Up, Some(Keystroke::Up)),
    (Button::Down, Some(Keystroke::Down)),
    (Button::Left, Some(Keystroke::Left)),
    (Button::Right, Some(Keystroke::Right)),
];

/// Logical button to keystroke table, shared by all profiles.
#[derive(Debug, Clone)]
pub struct KeyMap {
    keystrokes: AHashMap<Button, Keystroke>,
}

impl KeyMap {
    pub fn new() -> Self {
        let keystrokes = KEYSTROKES
            .iter()
            .filter_map(|(button, keystroke)| keystroke.map(|k| (*button, k)))
            .collect();
        Self { keystrokes }
    }

    /// Keystroke for `button`, `None` when the button is silent.
    pub fn keystroke(&self, button: Button) -> Option<Keystroke> {
        self.keystrokes.get(&button).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_buttons_confirm_or_go_back() {
        let map = KeyMap::new();
        assert_eq!(map.keystroke(Button::A), Some(Keystroke::Enter));
        assert_eq!(map.keystroke(Button::X), Some(Keystroke::Enter));
        assert_eq!(map.keystroke(Button::Start), Some(Keystroke::Enter));
        assert_eq!(map.keystroke(Button::B), Some(Keystroke::Back));
        assert_eq!(map.keystroke(Button::Y), Some(Keystroke::Back));
    }

    #[test]
    fn directions_map_to_arrows() {
        let map = KeyMap::new();
        for (button, key) in [
            (Button::Up, Key::UpArrow),
            (Button::Down, Key::DownArrow),
            (Button::Left, Key::LeftArrow),
            (Button::Right, Key::RightArrow),
        ] {
            assert_eq!(map.keystroke(button).map(Keystroke::key), Some(key));
        }
    }

    #[test]
    fn silent_buttons() {
        let map = KeyMap::new();
        assert_eq!(map.keystroke(Button::Select), None);
        assert_eq!(map.keystroke(Button::LeftTrigger), None);
        assert_eq!(map.keystroke(Button::RightTrigger), None);
    }

    #[test]
    fn back_is_backspace() {
        assert_eq!(Keystroke::Back.key(), Key::Backspace);
        assert_eq!(Keystroke::Enter.key(), Key::Return);
    }
}
