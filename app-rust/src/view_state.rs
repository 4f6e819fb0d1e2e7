use picture_link_sdk::ClientError;
use serde::Serialize;

/// State shared by every screen: a busy flag, the title and the error slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub is_busy: bool,
    pub title: String,
    pub error_message: String,
    pub has_error: bool,
    /// Confirmation of the last successful command, e.g. a created link.
    pub notice: Option<String>,
}

impl ViewState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.has_error = !self.error_message.is_empty();
    }

    pub fn clear_error(&mut self) {
        self.error_message.clear();
        self.has_error = false;
    }

    /// Shows the human message of a validation error, or the error's display
    /// text for anything else.
    pub(crate) fn set_client_error(&mut self, error: ClientError) {
        match error {
            ClientError::InvalidInput(message) => self.set_error(message),
            other => self.set_error(other.to_string()),
        }
    }

    /// Marks the screen busy and resets feedback from the previous command.
    /// Returns `false` when a command is already running.
    pub(crate) fn begin(&mut self) -> bool {
        if self.is_busy {
            return false;
        }
        self.is_busy = true;
        self.notice = None;
        self.clear_error();
        true
    }

    pub(crate) fn finish(&mut self) {
        self.is_busy = false;
    }
}
