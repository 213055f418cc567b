//! Drains queued UI events through the controller, one at a time, each to completion.

use client_core::DiagnosisService;
use crossbeam_channel::Receiver;
use tracing::debug;

use super::{
    events::{Notifier, SubmitOutcome, UiEvent},
    FormController,
};

impl FormController {
    /// Applies one event. Returns the submission outcome for `Submit`, `None` otherwise.
    pub async fn dispatch(
        &mut self,
        event: UiEvent,
        service: &dyn DiagnosisService,
        notifier: &mut dyn Notifier,
    ) -> Option<SubmitOutcome> {
        match event {
            UiEvent::SliderInput { symptom, value } => {
                self.on_slider_input(symptom, &value);
                None
            }
            UiEvent::TemperatureInput(value) => {
                self.on_temperature_input(&value);
                None
            }
            UiEvent::Submit => Some(self.submit(service, notifier).await),
            UiEvent::Reset => {
                self.reset();
                None
            }
            UiEvent::Click(node) if Some(node) == self.regions.submit_button => {
                Some(self.submit(service, notifier).await)
            }
            UiEvent::Click(node) if Some(node) == self.regions.reset_button => {
                self.reset();
                None
            }
            UiEvent::Click(_) => None,
        }
    }
}

/// Processes every event currently queued and returns the last submission outcome.
pub async fn drain_events(
    controller: &mut FormController,
    events: &Receiver<UiEvent>,
    service: &dyn DiagnosisService,
    notifier: &mut dyn Notifier,
) -> Option<SubmitOutcome> {
    let mut last_outcome = None;
    while let Ok(event) = events.try_recv() {
        debug!(?event, "dispatching ui event");
        if let Some(outcome) = controller.dispatch(event, service, notifier).await {
            last_outcome = Some(outcome);
        }
    }
    last_outcome
}
