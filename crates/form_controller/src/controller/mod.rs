//! Form controller: slider binding, submission, result rendering and reset.

pub mod events;
pub mod orchestration;
mod render;

use client_core::DiagnosisService;
use shared::{
    catalog::Symptom,
    protocol::DiagnoseRequest,
    severity::{parse_severity, parse_temperature, symptom_tier, BASELINE_TEMPERATURE},
};
use tracing::{debug, info, warn};

use crate::{
    dom::{Document, NodeId, ScrollTarget},
    page::ids,
    theme::{slider_label_color, SLIDER_BASELINE_BLUE},
};

use self::events::{alert_message, Notifier, SubmitOutcome};

pub const BUSY_LABEL: &str = "🔍 Analyzing...";

#[derive(Debug, Clone, Copy)]
struct SymptomControl {
    symptom: Symptom,
    slider: Option<NodeId>,
    label: Option<NodeId>,
}

impl SymptomControl {
    /// Live updates only run when both the slider and its label exist.
    fn bound(&self) -> Option<(NodeId, NodeId)> {
        Some((self.slider?, self.label?))
    }
}

#[derive(Debug, Clone, Copy)]
struct Panel {
    container: Option<NodeId>,
    list: Option<NodeId>,
}

/// Handles to every fixed region, resolved once at bind time.
#[derive(Debug, Clone, Copy)]
struct Regions {
    form: Option<NodeId>,
    temperature: Option<NodeId>,
    submit_button: Option<NodeId>,
    reset_button: Option<NodeId>,
    results: Option<NodeId>,
    timestamp: Option<NodeId>,
    critical: Panel,
    severity_score: Option<NodeId>,
    severity_fill: Option<NodeId>,
    symptom_count: Option<NodeId>,
    temp_display: Option<NodeId>,
    symptom_average: Option<NodeId>,
    diagnosis_list: Option<NodeId>,
    medical: Panel,
    home_care: Panel,
    prevention: Panel,
}

impl Regions {
    fn resolve(doc: &Document) -> Self {
        let find = |id: &str| doc.get_element_by_id(id);
        let panel = |container: &str, list: &str| Panel {
            container: find(container),
            list: find(list),
        };
        Self {
            form: find(ids::FORM),
            temperature: find(ids::TEMPERATURE),
            submit_button: find(ids::SUBMIT_BUTTON),
            reset_button: find(ids::RESET_BUTTON),
            results: find(ids::RESULTS),
            timestamp: find(ids::TIMESTAMP),
            critical: panel(ids::CRITICAL_WARNING, ids::CRITICAL_LIST),
            severity_score: find(ids::SEVERITY_SCORE),
            severity_fill: find(ids::SEVERITY_FILL),
            symptom_count: find(ids::SYMPTOM_COUNT),
            temp_display: find(ids::TEMP_DISPLAY),
            symptom_average: find(ids::SYMPTOM_AVERAGE),
            diagnosis_list: find(ids::DIAGNOSIS_LIST),
            medical: panel(ids::MEDICAL_PANEL, ids::MEDICAL_LIST),
            home_care: panel(ids::HOME_CARE_PANEL, ids::HOME_CARE_LIST),
            prevention: panel(ids::PREVENTION_PANEL, ids::PREVENTION_LIST),
        }
    }
}

/// Owns the page and reacts to its events. Element lookups happen once, in [`bind`].
///
/// [`bind`]: FormController::bind
pub struct FormController {
    document: Document,
    controls: Vec<SymptomControl>,
    regions: Regions,
}

impl FormController {
    pub fn bind(document: Document) -> Self {
        let controls: Vec<SymptomControl> = Symptom::ALL
            .iter()
            .map(|symptom| SymptomControl {
                symptom: *symptom,
                slider: document.get_element_by_id(symptom.id()),
                label: document.get_element_by_id(&symptom.value_label_id()),
            })
            .collect();
        let regions = Regions::resolve(&document);

        let bound = controls.iter().filter(|c| c.bound().is_some()).count();
        if bound < Symptom::COUNT {
            warn!(
                bound,
                expected = Symptom::COUNT,
                "some symptom sliders are missing from the page"
            );
        }
        debug!(bound, "form controller bound");

        Self {
            document,
            controls,
            regions,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    fn control(&self, symptom: Symptom) -> &SymptomControl {
        &self.controls[symptom.index()]
    }

    /// Slider moved: mirror the value into its label and recolor the label.
    pub fn on_slider_input(&mut self, symptom: Symptom, raw: &str) {
        let Some((slider, label)) = self.control(symptom).bound() else {
            return;
        };
        let severity = parse_severity(raw);
        let text = severity.to_string();
        self.document.element_mut(slider).set_value(text.clone());
        let label = self.document.element_mut(label);
        label.set_text(text);
        label.set_style(
            "color",
            slider_label_color(symptom_tier(i64::from(severity))),
        );
    }

    pub fn on_temperature_input(&mut self, raw: &str) {
        if let Some(input) = self.regions.temperature {
            self.document.element_mut(input).set_value(raw);
        }
    }

    /// Reads the form into a request. Absent or malformed controls read as their defaults.
    pub fn collect_request(&self) -> DiagnoseRequest {
        let temperature = self
            .regions
            .temperature
            .and_then(|input| self.document.element(input).value())
            .map(parse_temperature)
            .unwrap_or(BASELINE_TEMPERATURE);

        let mut request = DiagnoseRequest::new(temperature);
        for control in &self.controls {
            let severity = control
                .slider
                .and_then(|slider| self.document.element(slider).value())
                .map(parse_severity)
                .unwrap_or(0);
            request.set_severity(control.symptom, severity);
        }
        request
    }

    pub fn is_busy(&self) -> bool {
        self.regions
            .submit_button
            .is_some_and(|button| self.document.element(button).is_disabled())
    }

    /// Posts the form and renders the outcome. The submit button stays disabled for the
    /// duration of the request and is restored on every path.
    pub async fn submit(
        &mut self,
        service: &dyn DiagnosisService,
        notifier: &mut dyn Notifier,
    ) -> SubmitOutcome {
        if self.is_busy() {
            debug!("submit ignored while a request is in flight");
            return SubmitOutcome::Ignored;
        }

        let request = self.collect_request();
        let original_label = self.begin_busy();
        info!(
            temperature = request.temperature,
            active_symptoms = request.active_symptoms().count(),
            "submitting symptoms"
        );

        let outcome = match service.diagnose(&request).await {
            Ok(result) => {
                self.render(&result);
                SubmitOutcome::Rendered
            }
            Err(err) => {
                warn!(error = %err, "diagnosis failed");
                notifier.alert(&alert_message(&err));
                SubmitOutcome::Failed(err)
            }
        };

        self.end_busy(original_label);
        outcome
    }

    fn begin_busy(&mut self) -> Option<String> {
        let button = self.regions.submit_button?;
        let element = self.document.element_mut(button);
        let original = element.text();
        element.set_text(BUSY_LABEL);
        element.set_disabled(true);
        Some(original)
    }

    fn end_busy(&mut self, original_label: Option<String>) {
        let (Some(button), Some(label)) = (self.regions.submit_button, original_label) else {
            return;
        };
        let element = self.document.element_mut(button);
        element.set_text(label);
        element.set_disabled(false);
    }

    /// Back to a blank form: native defaults, hidden results, baseline temperature and
    /// zeroed sliders with resynchronized labels.
    pub fn reset(&mut self) {
        if let Some(form) = self.regions.form {
            self.document.reset_form(form);
        }
        if let Some(results) = self.regions.results {
            self.document.element_mut(results).set_hidden(true);
        }
        if let Some(input) = self.regions.temperature {
            self.document
                .element_mut(input)
                .set_value(BASELINE_TEMPERATURE.to_string());
        }
        for control in &self.controls {
            let Some((slider, label)) = control.bound() else {
                continue;
            };
            self.document.element_mut(slider).set_value("0");
            let label = self.document.element_mut(label);
            label.set_text("0");
            label.set_style("color", SLIDER_BASELINE_BLUE);
        }
        self.document.scroll_to(ScrollTarget::Top);
        debug!("form reset");
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
