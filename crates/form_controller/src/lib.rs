//! Client-side controller for the symptom-checker page.

pub mod controller;
pub mod dom;
pub mod page;
pub mod theme;
pub mod view;

pub use controller::{
    events::{alert_message, Notifier, RecordingNotifier, SubmitOutcome, UiEvent},
    orchestration::drain_events,
    FormController, BUSY_LABEL,
};
pub use dom::{Document, NodeId, ScrollRequest, ScrollTarget};
pub use page::symptom_checker_page;
