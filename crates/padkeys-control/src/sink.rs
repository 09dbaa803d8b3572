use crate::{Key, Result};

/// Something that accepts key state changes.
///
/// A call with `pressed = true` followed later by one with `pressed = false`
/// for the same key models a physical press and release. Each call must be
/// observable as a complete key event before it returns.
pub trait KeySink {
    fn send_key(&mut self, key: Key, pressed: bool) -> Result<()>;
}

impl<S: KeySink + ?Sized> KeySink for &mut S {
    fn send_key(&mut self, key: Key, pressed: bool) -> Result<()> {
        (**self).send_key(key, pressed)
    }
}
