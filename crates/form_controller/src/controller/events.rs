//! UI events fed to the controller and the alert seam it reports failures through.

use client_core::DiagnoseError;
use shared::catalog::Symptom;

use crate::dom::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SliderInput { symptom: Symptom, value: String },
    TemperatureInput(String),
    Submit,
    Reset,
    /// A click on any element; only the form's buttons act on it.
    Click(NodeId),
}

/// Blocking, user-facing alert. In a browser this is `window.alert`.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Keeps every alert it is given.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rendered,
    Failed(DiagnoseError),
    /// A request is already in flight (the submit button is disabled).
    Ignored,
}

pub fn alert_message(err: &DiagnoseError) -> String {
    match err {
        DiagnoseError::ServerReported { message, .. } => format!("Error: {message}"),
        DiagnoseError::Transport(message) => format!("Error connecting to server: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_text_depends_on_error_kind() {
        let server = DiagnoseError::ServerReported {
            status: 500,
            message: "model unavailable".into(),
        };
        assert_eq!(alert_message(&server), "Error: model unavailable");
        assert_eq!(
            alert_message(&DiagnoseError::Transport("connection refused".into())),
            "Error connecting to server: connection refused"
        );
    }
}
