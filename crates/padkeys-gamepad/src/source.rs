use crate::types::RawEvent;
use crate::Result;

/// A sequential, ordered, blocking stream of controller events.
pub trait EventSource {
    /// Block until the next event is available.
    ///
    /// Returns `Ok(None)` once the stream has ended.
    fn next_event(&mut self) -> Result<Option<RawEvent>>;
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn next_event(&mut self) -> Result<Option<RawEvent>> {
        (**self).next_event()
    }
}
