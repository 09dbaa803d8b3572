use thiserror::Error;

use padkeys_control::KeySink;
use padkeys_gamepad::EventSource;

use crate::app::{Padkeys, TranslateError};
use crate::print_debug;
use crate::runner::ActionRunner;

/// Anything that stops the daemon.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Gamepad(#[from] padkeys_gamepad::Error),
    #[error(transparent)]
    Control(#[from] padkeys_control::Error),
    #[error(transparent)]
    Translate(#[from] TranslateError),
}

/// Pull events from `source` until it ends or something fails.
///
/// Every event is translated and injected before the next one is read, so
/// key events reach the keyboard in the order the controller reported them.
pub fn run_loop<S, K>(app: &mut Padkeys, source: &mut S, keyboard: &mut K) -> Result<(), Error>
where
    S: EventSource,
    K: KeySink,
{
    let mut runner = ActionRunner::new(keyboard);
    while let Some(event) = source.next_event()? {
        print_debug!("event - {event}");
        let Some(action) = app.on_event(event)? else {
            continue;
        };
        runner.run(action)?;
    }
    print_debug!("event stream ended");
    Ok(())
}
