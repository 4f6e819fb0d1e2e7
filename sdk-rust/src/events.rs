use crate::Session;
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc;

/// Fan-out of session changes. Every subscriber owns an unbounded queue, so
/// a slow reader still receives every event in order.
#[derive(Default)]
pub(crate) struct SessionEvents {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<Option<Session>>>>,
}

impl SessionEvents {
    pub(crate) fn subscribe(&self) -> mpsc::UnboundedReceiver<Option<Session>> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sender);
        receiver
    }

    /// Sends `session` to every live subscriber and forgets dropped ones.
    pub(crate) fn notify(&self, session: Option<&Session>) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|sender| sender.send(session.cloned()).is_ok());
    }
}
