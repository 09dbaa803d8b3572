use padkeys_gamepad::Axis;

use crate::print_warning;

use super::{ButtonEvent, TranslateError};

/// Which direction an axis currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisState {
    #[default]
    Neutral,
    Low,
    High,
}

/// What happens to a held direction once its release has been emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleasePolicy {
    /// Keep the direction. A repeated center reading releases it again.
    #[default]
    Latch,
    /// Go back to neutral.
    Reset,
}

/// Raw d-pad axis readings. The pad reports only extremes and center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reading {
    Low,
    High,
    Center,
}

impl Reading {
    fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Reading::Low),
            255 => Some(Reading::High),
            127 | 128 => Some(Reading::Center),
            _ => None,
        }
    }
}

/// Tracks the held direction of both d-pad axes.
///
/// A center reading carries no direction, so the release is attributed to
/// whatever the axis last reported. The axes never look at each other.
#[derive(Debug, Clone, Default)]
pub struct DirectionTracker {
    vertical: AxisState,
    horizontal: AxisState,
    policy: ReleasePolicy,
}

impl DirectionTracker {
    pub fn new(policy: ReleasePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn state(&self, axis: Axis) -> AxisState {
        match axis {
            Axis::Vertical => self.vertical,
            Axis::Horizontal => self.horizontal,
        }
    }

    /// Feed one axis reading.
    ///
    /// Returns the resulting transition, or `None` for a center reading on
    /// a neutral axis.
    pub fn on_axis(
        &mut self,
        axis: Axis,
        value: i32,
    ) -> Result<Option<ButtonEvent>, TranslateError> {
        let reading = Reading::from_value(value)
            .ok_or(TranslateError::UnknownAxisValue { axis, value })?;
        let policy = self.policy;
        let state = self.state_mut(axis);
        let event = match reading {
            Reading::Low => {
                *state = AxisState::Low;
                ButtonEvent::pressed(axis.low())
            }
            Reading::High => {
                *state = AxisState::High;
                ButtonEvent::pressed(axis.high())
            }
            Reading::Center => {
                let button = match *state {
                    AxisState::Low => axis.low(),
                    AxisState::High => axis.high(),
                    AxisState::Neutral => {
                        print_warning!(
                            "d-pad {axis} centered with no direction held (value {value})"
                        );
                        return Ok(None);
                    }
                };
                if policy == ReleasePolicy::Reset {
                    *state = AxisState::Neutral;
                }
                ButtonEvent::released(button)
            }
        };
        Ok(Some(event))
    }

    fn state_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::Vertical => &mut self.vertical,
            Axis::Horizontal => &mut self.horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use padkeys_gamepad::Button;

    use super::*;

    fn feed(tracker: &mut DirectionTracker, axis: Axis, values: &[i32]) -> Vec<ButtonEvent> {
        values
            .iter()
            .filter_map(|v| tracker.on_axis(axis, *v).unwrap())
            .collect()
    }

    #[test]
    fn vertical_press_and_release() {
        let mut tracker = DirectionTracker::default();
        assert_eq!(
            feed(&mut tracker, Axis::Vertical, &[0, 128]),
            vec![ButtonEvent::pressed(Button::Up), ButtonEvent::released(Button::Up)]
        );
        assert_eq!(
            feed(&mut tracker, Axis::Vertical, &[255, 127]),
            vec![
                ButtonEvent::pressed(Button::Down),
                ButtonEvent::released(Button::Down)
            ]
        );
    }

    #[test]
    fn horizontal_press_and_release() {
        let mut tracker = DirectionTracker::default();
        assert_eq!(
            feed(&mut tracker, Axis::Horizontal, &[0, 127]),
            vec![
                ButtonEvent::pressed(Button::Left),
                ButtonEvent::released(Button::Left)
            ]
        );
        assert_eq!(
            feed(&mut tracker, Axis::Horizontal, &[255, 128]),
            vec![
                ButtonEvent::pressed(Button::Right),
                ButtonEvent::released(Button::Right)
            ]
        );
    }

    #[test]
    fn axes_are_independent() {
        let mut tracker = DirectionTracker::default();
        let mut events = Vec::new();
        for (axis, value) in [
            (Axis::Vertical, 0),
            (Axis::Horizontal, 255),
            (Axis::Vertical, 128),
            (Axis::Horizontal, 127),
            (Axis::Horizontal, 0),
            (Axis::Vertical, 255),
            (Axis::Horizontal, 128),
            (Axis::Vertical, 127),
        ] {
            events.extend(tracker.on_axis(axis, value).unwrap());
        }
        assert_eq!(
            events,
            vec![
                ButtonEvent::pressed(Button::Up),
                ButtonEvent::pressed(Button::Right),
                ButtonEvent::released(Button::Up),
                ButtonEvent::released(Button::Right),
                ButtonEvent::pressed(Button::Left),
                ButtonEvent::pressed(Button::Down),
                ButtonEvent::released(Button::Left),
                ButtonEvent::released(Button::Down),
            ]
        );
    }

    #[test]
    fn center_on_neutral_axis_is_dropped() {
        let mut tracker = DirectionTracker::default();
        assert_eq!(tracker.on_axis(Axis::Vertical, 127), Ok(None));
        assert_eq!(tracker.on_axis(Axis::Horizontal, 128), Ok(None));
        assert_eq!(tracker.state(Axis::Vertical), AxisState::Neutral);
        assert_eq!(tracker.state(Axis::Horizontal), AxisState::Neutral);
    }

    #[test]
    fn latch_keeps_direction_after_release() {
        let mut tracker = DirectionTracker::new(ReleasePolicy::Latch);
        let events = feed(&mut tracker, Axis::Vertical, &[255, 128, 127]);
        assert_eq!(
            events,
            vec![
                ButtonEvent::pressed(Button::Down),
                ButtonEvent::released(Button::Down),
                ButtonEvent::released(Button::Down),
            ]
        );
        assert_eq!(tracker.state(Axis::Vertical), AxisState::High);
    }

    #[test]
    fn reset_returns_to_neutral_after_release() {
        let mut tracker = DirectionTracker::new(ReleasePolicy::Reset);
        let events = feed(&mut tracker, Axis::Horizontal, &[0, 128, 127]);
        assert_eq!(
            events,
            vec![
                ButtonEvent::pressed(Button::Left),
                ButtonEvent::released(Button::Left),
            ]
        );
        assert_eq!(tracker.state(Axis::Horizontal), AxisState::Neutral);
    }

    #[test]
    fn extreme_switches_direction_without_release() {
        let mut tracker = DirectionTracker::default();
        let events = feed(&mut tracker, Axis::Vertical, &[0, 255, 128]);
        assert_eq!(
            events,
            vec![
                ButtonEvent::pressed(Button::Up),
                ButtonEvent::pressed(Button::Down),
                ButtonEvent::released(Button::Down),
            ]
        );
    }

    #[test]
    fn unknown_value_is_fatal() {
        let mut tracker = DirectionTracker::default();
        assert_eq!(
            tracker.on_axis(Axis::Horizontal, 64),
            Err(TranslateError::UnknownAxisValue {
                axis: Axis::Horizontal,
                value: 64,
            })
        );
        assert_eq!(tracker.state(Axis::Horizontal), AxisState::Neutral);
    }
}
