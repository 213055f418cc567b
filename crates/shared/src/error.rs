use serde::{Deserialize, Serialize};

/// Fallback shown when the server rejects a request without saying why.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Body the diagnosis endpoint returns alongside a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// The server message, or the generic fallback when it is missing or blank.
    pub fn message_or_fallback(&self) -> &str {
        match self.error.as_deref() {
            Some(message) if !message.trim().is_empty() => message,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }
}
