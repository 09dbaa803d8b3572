mod key;
mod performer;
mod sink;

use thiserror::Error;

pub use key::Key;
pub use performer::{Performer, VirtualKeyboard};
pub use sink::KeySink;

/// Error type for keyboard emulation.
#[derive(Debug, Error)]
pub enum Error {
    /// The uinput virtual keyboard could not be created.
    #[error("failed to create virtual keyboard: {0}")]
    Create(#[source] std::io::Error),
    /// Writing a key event to the virtual keyboard failed.
    #[error("failed to send {key:?}: {source}")]
    Emit {
        key: Key,
        #[source]
        source: std::io::Error,
    },
}

/// Convenient result alias for keyboard emulation.
pub type Result<T> = std::result::Result<T, Error>;
