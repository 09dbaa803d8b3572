use ahash::AHashSet;
use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, EventType, InputEvent, Key as EvdevKey};

use crate::{Error, Key, KeySink, Result};

const DEVICE_NAME: &str = "padkeys virtual keyboard";

/// Virtual keyboard backed by uinput, registering every [`Key`].
pub struct VirtualKeyboard {
    device: VirtualDevice,
}

impl VirtualKeyboard {
    pub fn new() -> Result<Self> {
        let mut keys = AttributeSet::<EvdevKey>::new();
        for key in Key::ALL {
            keys.insert(key.into());
        }
        let device = VirtualDeviceBuilder::new()
            .and_then(|builder| builder.name(DEVICE_NAME).with_keys(&keys))
            .and_then(VirtualDeviceBuilder::build)
            .map_err(Error::Create)?;
        Ok(Self { device })
    }
}

impl KeySink for VirtualKeyboard {
    fn send_key(&mut self, key: Key, pressed: bool) -> Result<()> {
        let event = InputEvent::new(EventType::KEY, key.code(), i32::from(pressed));
        // `emit` appends a SYN_REPORT after the batch.
        self.device
            .emit(&[event])
            .map_err(|source| Error::Emit { key, source })
    }
}

/// Keyboard that remembers which keys it holds down.
///
/// Keys still held when the performer is dropped are released first, so
/// consumers never see a key stuck down after the daemon exits.
pub struct Performer<S: KeySink = VirtualKeyboard> {
    sink: S,
    held: AHashSet<Key>,
}

impl Performer<VirtualKeyboard> {
    /// Create a performer on a fresh uinput keyboard.
    pub fn new() -> Result<Self> {
        Ok(Self::with_sink(VirtualKeyboard::new()?))
    }
}

impl<S: KeySink> Performer<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            sink,
            held: AHashSet::new(),
        }
    }

    /// Release every key that is still held.
    ///
    /// Every key is attempted even if one fails; the first error is
    /// returned and the failed keys stay in the held set.
    pub fn release_all(&mut self) -> Result<()> {
        let held: Vec<Key> = self.held.iter().copied().collect();
        let mut first_error = None;
        for key in held {
            if let Err(e) = self.send_key(key, false) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Keys currently held down.
    pub fn held(&self) -> impl Iterator<Item = Key> + '_ {
        self.held.iter().copied()
    }
}

impl<S: KeySink> KeySink for Performer<S> {
    fn send_key(&mut self, key: Key, pressed: bool) -> Result<()> {
        self.sink.send_key(key, pressed)?;
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
        Ok(())
    }
}

impl<S: KeySink> Drop for Performer<S> {
    fn drop(&mut self) {
        let _ = self.release_all();
    }
}
