use std::fmt;

use ahash::AHashMap;

use crate::types::Button;

/// NES style pad, four buttons.
/// "2Axes 11Keys Game  Pad"
const NES_BUTTONS: &[(u16, Button)] = &[
    (312, Button::Select),
    (313, Button::Start),
    (305, Button::B),
    (304, Button::A),
];

/// SNES style pads, eight buttons. The two known models report
/// non-overlapping codes so they share one table.
const SNES_BUTTONS: &[(u16, Button)] = &[
    // TOMEE USB Controller, "2Axes 11Keys Game  Pad"
    (312, Button::Select),
    (313, Button::Start),
    (306, Button::B),
    (305, Button::A),
    (307, Button::Y),
    (304, Button::X),
    (308, Button::LeftTrigger),
    (309, Button::RightTrigger),
    // iBUFFALO Classic USB Gamepad, "USB,2-axis 8-button gamepad"
    (294, Button::Select),
    (295, Button::Start),
    (289, Button::B),
    (288, Button::A),
    (291, Button::Y),
    (290, Button::X),
    (292, Button::LeftTrigger),
    (293, Button::RightTrigger),
];

/// Known controller layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    Nes,
    Snes,
}

impl ProfileKind {
    pub fn name(self) -> &'static str {
        match self {
            ProfileKind::Nes => "nes",
            ProfileKind::Snes => "snes",
        }
    }

    fn table(self) -> &'static [(u16, Button)] {
        match self {
            ProfileKind::Nes => NES_BUTTONS,
            ProfileKind::Snes => SNES_BUTTONS,
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable mapping from raw button codes to logical buttons.
///
/// The mapping is not total: a code missing from the profile means the
/// attached pad does not match the selected layout.
#[derive(Debug, Clone)]
pub struct ControllerProfile {
    buttons: AHashMap<u16, Button>,
}

impl ControllerProfile {
    pub fn new(kind: ProfileKind) -> Self {
        let buttons: AHashMap<u16, Button> = kind.table().iter().copied().collect();
        debug_assert_eq!(
            buttons.len(),
            kind.table().len(),
            "button codes must be unique within a profile"
        );
        Self { buttons }
    }

    /// Resolve a raw button code.
    pub fn button(&self, code: u16) -> Option<Button> {
        self.buttons.get(&code).copied()
    }

    /// All entries ordered by code.
    pub fn entries(&self) -> Vec<(u16, Button)> {
        let mut entries: Vec<(u16, Button)> =
            self.buttons.iter().map(|(c, b)| (*c, *b)).collect();
        entries.sort_unstable_by_key(|(code, _)| *code);
        entries
    }

    /// Codes from `reported` that this profile cannot resolve.
    pub fn unknown_codes<I>(&self, reported: I) -> Vec<u16>
    where
        I: IntoIterator<Item = u16>,
    {
        reported
            .into_iter()
            .filter(|code| !self.buttons.contains_key(code))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nes_resolves_face_buttons() {
        let profile = ControllerProfile::new(ProfileKind::Nes);
        assert_eq!(profile.button(304), Some(Button::A));
        assert_eq!(profile.button(305), Some(Button::B));
        assert_eq!(profile.button(312), Some(Button::Select));
        assert_eq!(profile.button(313), Some(Button::Start));
        assert_eq!(profile.button(306), None);
    }

    #[test]
    fn snes_covers_both_pad_models() {
        let profile = ControllerProfile::new(ProfileKind::Snes);
        assert_eq!(profile.button(304), Some(Button::X));
        assert_eq!(profile.button(288), Some(Button::A));
        assert_eq!(profile.button(293), Some(Button::RightTrigger));
        assert_eq!(profile.entries().len(), 16);
    }

    #[test]
    fn codes_are_unique() {
        for kind in [ProfileKind::Nes, ProfileKind::Snes] {
            let profile = ControllerProfile::new(kind);
            assert_eq!(profile.entries().len(), kind.table().len(), "{kind}");
        }
    }

    #[test]
    fn entries_are_sorted_by_code() {
        let entries = ControllerProfile::new(ProfileKind::Nes).entries();
        let codes: Vec<u16> = entries.iter().map(|(c, _)| *c).collect();
        assert_eq!(codes, vec![304, 305, 312, 313]);
    }

    #[test]
    fn unknown_codes_keeps_order() {
        let profile = ControllerProfile::new(ProfileKind::Nes);
        let unknown = profile.unknown_codes([304, 999, 305, 306]);
        assert_eq!(unknown, vec![999, 306]);
    }
}
