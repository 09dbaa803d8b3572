mod device;
mod profile;
mod source;
mod types;

use std::path::PathBuf;

use thiserror::Error;

pub use crate::device::GamepadDevice;
pub use crate::profile::{ControllerProfile, ProfileKind};
pub use crate::source::EventSource;
pub use crate::types::{Axis, Button, DeviceInfo, EventKind, RawEvent};

/// Error type for the controller input side.
#[derive(Debug, Error)]
pub enum Error {
    /// The input device could not be opened.
    #[error("failed to open input device {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the next batch of events failed, usually because the
    /// controller was unplugged.
    #[error("failed to read input events: {0}")]
    Read(#[source] std::io::Error),
}

/// Convenient result alias for controller input operations.
pub type Result<T> = std::result::Result<T, Error>;
