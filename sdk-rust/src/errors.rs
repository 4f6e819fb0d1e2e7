use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// A client-side precondition failed before any request was sent. The
    /// message is suitable for showing to the user as-is.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the backend failed or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-success status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the backend did not have the expected shape (e.g.
    /// a sign-in response without `localId`).
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the backend answered with 404 Not Found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StatusCode(status, _) if *status == reqwest::StatusCode::NOT_FOUND)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
