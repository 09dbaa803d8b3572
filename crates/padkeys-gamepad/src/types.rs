use std::fmt;
use std::path::PathBuf;

/// Logical controller buttons a profile can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Start,
    Select,
    A,
    B,
    X,
    Y,
    Up,
    Down,
    Left,
    Right,
    LeftTrigger,
    RightTrigger,
}

impl Button {
    /// Name of the button as printed on the pad.
    pub fn name(self) -> &'static str {
        match self {
            Button::Start => "start",
            Button::Select => "select",
            Button::A => "A",
            Button::B => "B",
            Button::X => "X",
            Button::Y => "Y",
            Button::Up => "UP",
            Button::Down => "DOWN",
            Button::Left => "LEFT",
            Button::Right => "RIGHT",
            Button::LeftTrigger => "left-trigger",
            Button::RightTrigger => "right-trigger",
        }
    }

    /// Whether the button is one of the four d-pad directions.
    pub fn is_direction(self) -> bool {
        matches!(self, Button::Up | Button::Down | Button::Left | Button::Right)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// D-pad axis, numbered the way the kernel reports absolute axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// `ABS_X`, code 0.
    Horizontal,
    /// `ABS_Y`, code 1.
    Vertical,
}

impl Axis {
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Axis::Horizontal),
            1 => Some(Axis::Vertical),
            _ => None,
        }
    }

    pub fn code(self) -> u16 {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }

    /// Direction reported at the low extreme of the axis.
    pub fn low(self) -> Button {
        match self {
            Axis::Horizontal => Button::Left,
            Axis::Vertical => Button::Up,
        }
    }

    /// Direction reported at the high extreme of the axis.
    pub fn high(self) -> Button {
        match self {
            Axis::Horizontal => Button::Right,
            Axis::Vertical => Button::Down,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Kind of a raw controller event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A discrete button (`EV_KEY`).
    Button,
    /// An absolute axis position (`EV_ABS`).
    Axis,
}

/// A raw event as read from the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    pub kind: EventKind,
    pub code: u16,
    pub value: i32,
}

impl RawEvent {
    pub fn button(code: u16, value: i32) -> Self {
        Self {
            kind: EventKind::Button,
            code,
            value,
        }
    }

    pub fn axis(code: u16, value: i32) -> Self {
        Self {
            kind: EventKind::Axis,
            code,
            value,
        }
    }
}

impl fmt::Display for RawEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            EventKind::Button => "button",
            EventKind::Axis => "axis",
        };
        write!(f, "{kind} code={} value={}", self.code, self.value)
    }
}

/// Device meta information reported once at open time.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub path: PathBuf,
    pub name: String,
    pub phys: Option<String>,
    pub vendor_id: u16,
    pub product_id: u16,
    /// Button codes the device claims to report.
    pub buttons: Vec<u16>,
    /// Absolute axis codes the device claims to report.
    pub axes: Vec<u16>,
}
