use thiserror::Error;

/// Why a diagnosis request produced no result. Both kinds end the attempt; nothing retries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiagnoseError {
    /// The server answered with a non-2xx status.
    #[error("server rejected diagnosis request ({status}): {message}")]
    ServerReported { status: u16, message: String },
    /// The request never produced a usable response.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl DiagnoseError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ServerReported { message, .. } => message,
            Self::Transport(message) => message,
        }
    }
}
