use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use evdev::{Device, EventType, InputEvent};

use crate::source::EventSource;
use crate::types::{DeviceInfo, RawEvent};
use crate::{Error, Result};

/// A controller opened through its evdev node, e.g. `/dev/input/event0`.
pub struct GamepadDevice {
    path: PathBuf,
    device: Device,
    pending: VecDeque<RawEvent>,
}

impl GamepadDevice {
    /// Open the device node at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let device = Device::open(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            device,
            pending: VecDeque::new(),
        })
    }

    /// Describe the opened device.
    pub fn info(&self) -> DeviceInfo {
        let id = self.device.input_id();
        let buttons = self
            .device
            .supported_keys()
            .map(|keys| keys.iter().map(|key| key.code()).collect())
            .unwrap_or_default();
        let axes = self
            .device
            .supported_absolute_axes()
            .map(|axes| axes.iter().map(|axis| axis.0).collect())
            .unwrap_or_default();
        DeviceInfo {
            path: self.path.clone(),
            name: self.device.name().unwrap_or("unknown").to_string(),
            phys: self.device.physical_path().map(str::to_string),
            vendor_id: id.vendor(),
            product_id: id.product(),
            buttons,
            axes,
        }
    }
}

impl EventSource for GamepadDevice {
    fn next_event(&mut self) -> Result<Option<RawEvent>> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }
            // Blocks until the kernel hands over the next report.
            let events = self.device.fetch_events().map_err(Error::Read)?;
            self.pending.extend(events.filter_map(|e| to_raw_event(&e)));
        }
    }
}

/// Keep button and absolute axis events, drop sync and misc reports.
fn to_raw_event(event: &InputEvent) -> Option<RawEvent> {
    let event_type = event.event_type();
    if event_type == EventType::KEY {
        Some(RawEvent::button(event.code(), event.value()))
    } else if event_type == EventType::ABSOLUTE {
        Some(RawEvent::axis(event.code(), event.value()))
    } else {
        None
    }
}
