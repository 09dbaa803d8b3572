use padkeys_control::KeySink;

use crate::app::Action;

pub(crate) struct ActionRunner<'a, K: KeySink> {
    keyboard: &'a mut K,
}

impl<'a, K: KeySink> ActionRunner<'a, K> {
    pub(crate) fn new(keyboard: &'a mut K) -> Self {
        Self { keyboard }
    }

    pub(crate) fn run(&mut self, action: Action) -> padkeys_control::Result<()> {
        match action {
            Action::KeyPress(key) => self.keyboard.send_key(key, true),
            Action::KeyRelease(key) => self.keyboard.send_key(key, false),
        }
    }
}
