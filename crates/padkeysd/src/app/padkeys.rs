use thiserror::Error;

use padkeys_gamepad::{Axis, ControllerProfile, EventKind, RawEvent};

use crate::print_info;

use super::{
    Action, ButtonEvent, ButtonPhase, DirectionTracker, KeyMap, ReleasePolicy,
};

/// Input the selected profile cannot make sense of. All variants are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("unknown button code {code} (value {value}), the pad does not match the profile")]
    UnknownButton { code: u16, value: i32 },
    #[error("unknown axis code {code} (value {value})")]
    UnknownAxis { code: u16, value: i32 },
    #[error("unrecognized {axis} d-pad value {value}")]
    UnknownAxisValue { axis: Axis, value: i32 },
}

/// Turns raw controller events into keyboard actions.
#[derive(Debug, Clone)]
pub struct Padkeys {
    profile: ControllerProfile,
    keymap: KeyMap,
    tracker: DirectionTracker,
}

impl Padkeys {
    pub fn new(profile: ControllerProfile, policy: ReleasePolicy) -> Self {
        Self {
            profile,
            keymap: KeyMap::new(),
            tracker: DirectionTracker::new(policy),
        }
    }

    pub fn profile(&self) -> &ControllerProfile {
        &self.profile
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Resolve a raw event into a logical button transition.
    pub fn classify(
        &mut self,
        event: RawEvent,
    ) -> Result<Option<ButtonEvent>, TranslateError> {
        let RawEvent { kind, code, value } = event;
        match kind {
            EventKind::Button => {
                let button = self
                    .profile
                    .button(code)
                    .ok_or(TranslateError::UnknownButton { code, value })?;
                Ok(Some(ButtonEvent::new(
                    button,
                    ButtonPhase::from_pressed(value != 0),
                )))
            }
            EventKind::Axis => {
                let axis = Axis::from_code(code)
                    .ok_or(TranslateError::UnknownAxis { code, value })?;
                self.tracker.on_axis(axis, value)
            }
        }
    }

    /// Keyboard action for a logical transition, if the button has one.
    pub fn map(&self, event: ButtonEvent) -> Option<Action> {
        let key = self.keymap.keystroke(event.button)?.key();
        Some(match event.phase {
            ButtonPhase::Pressed => Action::KeyPress(key),
            ButtonPhase::Released => Action::KeyRelease(key),
        })
    }

    /// Classify and map one raw event.
    pub fn on_event(
        &mut self,
        event: RawEvent,
    ) -> Result<Option<Action>, TranslateError> {
        let Some(button_event) = self.classify(event)? else {
            return Ok(None);
        };
        let ButtonEvent { button, phase } = button_event;
        let source = if button.is_direction() { "d-pad" } else { "button" };
        match self.keymap.keystroke(button) {
            Some(keystroke) => {
                print_info!("{source} {button} {phase} -> {keystroke}");
            }
            None => {
                print_info!("{source} {button} {phase} -> none");
            }
        }
        Ok(self.map(button_event))
    }
}
