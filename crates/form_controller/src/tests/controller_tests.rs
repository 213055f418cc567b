use std::sync::Mutex;

use super::*;
use crate::{
    controller::{
        events::{RecordingNotifier, UiEvent},
        orchestration::drain_events,
    },
    dom::HIDDEN_CLASS,
    page::{symptom_checker_page, SUBMIT_LABEL},
    theme::{ALERT_RED, SUMMARY_OK_GREEN, WARNING_AMBER},
};
use async_trait::async_trait;
use client_core::DiagnoseError;
use serde_json::json;
use shared::protocol::DiagnosisResult;

struct StubService {
    response: Result<DiagnosisResult, DiagnoseError>,
    requests: Mutex<Vec<DiagnoseRequest>>,
}

impl StubService {
    fn ok(result: DiagnosisResult) -> Self {
        Self {
            response: Ok(result),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing(err: DiagnoseError) -> Self {
        Self {
            response: Err(err),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<DiagnoseRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

#[async_trait]
impl DiagnosisService for StubService {
    async fn diagnose(
        &self,
        request: &DiagnoseRequest,
    ) -> Result<DiagnosisResult, DiagnoseError> {
        self.requests.lock().expect("lock").push(request.clone());
        self.response.clone()
    }
}

fn flu_result() -> DiagnosisResult {
    serde_json::from_value(json!({
        "timestamp": "2025-03-01 09:30:00",
        "overall_severity": 8,
        "temperature": 39.0,
        "active_symptom_count": 2,
        "critical_warning": true,
        "diagnoses": [{
            "disease": "Flu",
            "confidence": 85,
            "urgency": "high",
            "description": "...",
            "incubation": "1-4 days",
            "matched_symptoms": ["fever", "cough"]
        }],
        "recommendations": {
            "immediate": ["Seek care now"],
            "medical": [],
            "home_care": ["Rest"],
            "prevention": []
        }
    }))
    .expect("flu result")
}

fn controller() -> FormController {
    FormController::bind(symptom_checker_page())
}

fn text_of(controller: &FormController, id: &str) -> String {
    controller
        .document()
        .by_id(id)
        .map(|el| el.text())
        .unwrap_or_default()
}

fn style_of<'a>(controller: &'a FormController, id: &str, property: &str) -> Option<&'a str> {
    controller
        .document()
        .by_id(id)
        .and_then(|el| el.style(property))
}

fn is_hidden(controller: &FormController, id: &str) -> bool {
    controller
        .document()
        .by_id(id)
        .is_some_and(|el| el.has_class(HIDDEN_CLASS))
}

fn list_len(controller: &FormController, id: &str) -> usize {
    controller
        .document()
        .by_id(id)
        .map(|el| el.content().len())
        .unwrap_or_default()
}

#[test]
fn slider_label_color_follows_three_tiers() {
    let mut controller = controller();
    for value in 0..=10u8 {
        controller.on_slider_input(Symptom::Headache, &value.to_string());
        let expected = if value >= 7 {
            ALERT_RED
        } else if value >= 4 {
            WARNING_AMBER
        } else {
            SLIDER_BASELINE_BLUE
        };
        assert_eq!(text_of(&controller, "headache-value"), value.to_string());
        assert_eq!(
            style_of(&controller, "headache-value", "color"),
            Some(expected),
            "value {value}"
        );
    }
}

#[test]
fn malformed_slider_value_reads_as_zero() {
    let mut controller = controller();
    controller.on_slider_input(Symptom::Cough, "loud");
    assert_eq!(text_of(&controller, "cough-value"), "0");
    assert_eq!(
        style_of(&controller, "cough-value", "color"),
        Some(SLIDER_BASELINE_BLUE)
    );
}

#[test]
fn missing_elements_are_tolerated() {
    let mut page = symptom_checker_page();
    page.remove_element("fever-value");
    page.remove_element(ids::DIAGNOSIS_LIST);
    page.remove_element(ids::MEDICAL_PANEL);
    let mut controller = FormController::bind(page);

    // Slider without a label is not live-bound, but still contributes to the payload.
    controller.on_slider_input(Symptom::Fever, "9");
    let fever = controller.document().by_id("fever").and_then(|el| el.value());
    assert_eq!(fever, Some("0"));

    controller.render(&flu_result());
    assert!(!is_hidden(&controller, ids::RESULTS));
}

#[test]
fn collect_request_reads_every_control() {
    let mut controller = controller();
    controller.on_temperature_input("39.0");
    controller.on_slider_input(Symptom::Fever, "8");
    controller.on_slider_input(Symptom::Cough, "6");

    let request = controller.collect_request();
    assert_eq!(request.temperature, 39.0);
    assert_eq!(request.severity(Symptom::Fever), 8);
    assert_eq!(request.severity(Symptom::Cough), 6);
    assert_eq!(request.active_symptoms().count(), 2);
}

#[test]
fn absent_slider_sends_zero() {
    let mut page = symptom_checker_page();
    page.remove_element("chills");
    let controller = FormController::bind(page);
    assert_eq!(controller.collect_request().severity(Symptom::Chills), 0);
}

#[test]
fn flu_scenario_renders_expected_regions() {
    let mut controller = controller();
    controller.render(&flu_result());

    assert!(!is_hidden(&controller, ids::RESULTS));
    assert_eq!(text_of(&controller, ids::TIMESTAMP), "2025-03-01 09:30:00");

    assert!(!is_hidden(&controller, ids::CRITICAL_WARNING));
    assert_eq!(list_len(&controller, ids::CRITICAL_LIST), 1);
    assert_eq!(text_of(&controller, ids::CRITICAL_LIST), "Seek care now");

    assert_eq!(text_of(&controller, ids::SEVERITY_SCORE), "8/10");
    assert_eq!(style_of(&controller, ids::SEVERITY_FILL, "width"), Some("80%"));
    assert_eq!(
        style_of(&controller, ids::SEVERITY_FILL, "background"),
        Some(ALERT_RED)
    );
    assert_eq!(style_of(&controller, ids::SEVERITY_SCORE, "color"), Some(ALERT_RED));
    assert_eq!(text_of(&controller, ids::SYMPTOM_COUNT), "2");
    assert_eq!(text_of(&controller, ids::TEMP_DISPLAY), "39°C");
    assert_eq!(style_of(&controller, ids::TEMP_DISPLAY, "color"), Some(ALERT_RED));

    let list = controller.document().by_id(ids::DIAGNOSIS_LIST).expect("list");
    assert_eq!(list.content().len(), 1);
    let card = &list.content()[0];
    let card_element = card.as_element().expect("card element");
    assert!(card_element.has_class("diagnosis-card"));
    assert!(card_element.has_class("high"));
    assert_eq!(
        card.find_by_class("diagnosis-name")[0].text_content(),
        "🥇 Flu"
    );
    let badge = card.find_by_class("confidence-badge")[0];
    assert!(badge.has_class("high"));
    assert_eq!(badge.text_content(), "85% Match");
    assert_eq!(
        card.find_by_class("diagnosis-description")[0].text_content(),
        "... • Incubation: 1-4 days"
    );
    assert_eq!(card.find_by_class("symptom-tag").len(), 2);

    assert!(!is_hidden(&controller, ids::HOME_CARE_PANEL));
    assert_eq!(list_len(&controller, ids::HOME_CARE_LIST), 1);
    assert!(is_hidden(&controller, ids::MEDICAL_PANEL));
    assert!(is_hidden(&controller, ids::PREVENTION_PANEL));

    let scroll = controller.document().last_scroll().expect("scroll");
    let results = controller
        .document()
        .get_element_by_id(ids::RESULTS)
        .expect("results");
    assert_eq!(scroll.target, ScrollTarget::Element(results));
    assert!(scroll.smooth);
}

#[test]
fn critical_block_needs_flag_and_items() {
    let mut controller = controller();

    let mut no_items = flu_result();
    no_items.recommendations.immediate = Some(Vec::new());
    controller.render(&no_items);
    assert!(is_hidden(&controller, ids::CRITICAL_WARNING));

    let mut not_flagged = flu_result();
    not_flagged.critical_warning = false;
    controller.render(&not_flagged);
    assert!(is_hidden(&controller, ids::CRITICAL_WARNING));
    assert_eq!(list_len(&controller, ids::CRITICAL_LIST), 0);
}

#[test]
fn summary_colors_use_separate_thresholds() {
    let mut controller = controller();
    let mut result = flu_result();
    result.overall_severity = 5.0;
    result.temperature = 37.4;
    controller.render(&result);
    assert_eq!(
        style_of(&controller, ids::SEVERITY_SCORE, "color"),
        Some(WARNING_AMBER)
    );
    assert_eq!(
        style_of(&controller, ids::TEMP_DISPLAY, "color"),
        Some(SUMMARY_OK_GREEN)
    );

    result.overall_severity = 2.0;
    result.temperature = 37.5;
    controller.render(&result);
    assert_eq!(
        style_of(&controller, ids::SEVERITY_SCORE, "color"),
        Some(SUMMARY_OK_GREEN)
    );
    assert_eq!(
        style_of(&controller, ids::TEMP_DISPLAY, "color"),
        Some(WARNING_AMBER)
    );
    assert_eq!(style_of(&controller, ids::SEVERITY_FILL, "width"), Some("20%"));
}

#[test]
fn empty_diagnoses_render_single_placeholder() {
    let mut controller = controller();
    let mut result = flu_result();
    result.diagnoses.clear();
    controller.render(&result);

    let list = controller.document().by_id(ids::DIAGNOSIS_LIST).expect("list");
    assert_eq!(list.content().len(), 1);
    let placeholder = &list.content()[0];
    assert!(placeholder
        .as_element()
        .is_some_and(|el| el.has_class("normal")));
    assert_eq!(
        placeholder.find_by_class("diagnosis-name")[0].text_content(),
        "No specific condition detected"
    );
}

#[test]
fn diagnoses_keep_server_order() {
    let mut controller = controller();
    let mut result = flu_result();
    result.diagnoses = ["Cold", "Flu", "Strep", "Sinusitis"]
        .iter()
        .zip([30.0, 90.0, 50.0, 20.0])
        .map(|(name, confidence)| shared::protocol::Diagnosis {
            disease: name.to_string(),
            confidence,
            urgency: "normal".into(),
            ..Default::default()
        })
        .collect();
    controller.render(&result);

    let list = controller.document().by_id(ids::DIAGNOSIS_LIST).expect("list");
    let names: Vec<String> = list
        .content()
        .iter()
        .map(|card| card.find_by_class("diagnosis-name")[0].text_content())
        .collect();
    assert_eq!(names, vec!["🥇 Cold", "🥈 Flu", "🥉 Strep", "Sinusitis"]);
    assert!(list.content()[0].find_by_class("matched-symptoms").is_empty());
}

#[test]
fn rendering_twice_matches_rendering_once() {
    let mut once = controller();
    once.render(&flu_result());

    let mut twice = controller();
    twice.render(&flu_result());
    twice.render(&flu_result());

    assert_eq!(once.document().to_html(), twice.document().to_html());
}

#[test]
fn reset_restores_blank_form() {
    let mut controller = controller();
    controller.on_temperature_input("39.5");
    for symptom in Symptom::ALL {
        controller.on_slider_input(*symptom, "9");
    }
    controller.render(&flu_result());

    controller.reset();

    let doc = controller.document();
    assert_eq!(doc.by_id(ids::TEMPERATURE).and_then(|el| el.value()), Some("36.6"));
    for symptom in Symptom::ALL {
        assert_eq!(doc.by_id(symptom.id()).and_then(|el| el.value()), Some("0"));
        let label = doc.by_id(&symptom.value_label_id()).expect("label");
        assert_eq!(label.text(), "0");
        assert_eq!(label.style("color"), Some(SLIDER_BASELINE_BLUE));
    }
    assert!(is_hidden(&controller, ids::RESULTS));
    assert_eq!(
        doc.last_scroll().map(|scroll| scroll.target),
        Some(ScrollTarget::Top)
    );
}

#[tokio::test]
async fn submit_posts_form_and_renders_result() {
    let mut controller = controller();
    controller.on_temperature_input("39.0");
    controller.on_slider_input(Symptom::Fever, "8");
    controller.on_slider_input(Symptom::Cough, "6");
    let service = StubService::ok(flu_result());
    let mut notifier = RecordingNotifier::default();

    let outcome = controller.submit(&service, &mut notifier).await;

    assert_eq!(outcome, SubmitOutcome::Rendered);
    assert!(notifier.messages.is_empty());
    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].severity(Symptom::Fever), 8);
    assert_eq!(requests[0].temperature, 39.0);
    assert!(!is_hidden(&controller, ids::RESULTS));

    let button = controller.document().by_id(ids::SUBMIT_BUTTON).expect("button");
    assert!(!button.is_disabled());
    assert_eq!(button.text(), SUBMIT_LABEL);
}

#[tokio::test]
async fn server_error_alerts_and_restores_button() {
    let mut controller = controller();
    let service = StubService::failing(DiagnoseError::ServerReported {
        status: 500,
        message: "model unavailable".into(),
    });
    let mut notifier = RecordingNotifier::default();

    let outcome = controller.submit(&service, &mut notifier).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(notifier.messages.len(), 1);
    assert!(notifier.messages[0].contains("model unavailable"));
    let button = controller.document().by_id(ids::SUBMIT_BUTTON).expect("button");
    assert!(!button.is_disabled());
    assert_eq!(button.text(), SUBMIT_LABEL);
    assert!(is_hidden(&controller, ids::RESULTS));
}

#[tokio::test]
async fn transport_error_uses_connection_alert() {
    let mut controller = controller();
    let service = StubService::failing(DiagnoseError::Transport("connection refused".into()));
    let mut notifier = RecordingNotifier::default();

    controller.submit(&service, &mut notifier).await;

    assert_eq!(
        notifier.messages,
        vec!["Error connecting to server: connection refused"]
    );
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn submit_is_ignored_while_button_disabled() {
    let mut controller = controller();
    let button = controller
        .document
        .get_element_by_id(ids::SUBMIT_BUTTON)
        .expect("button");
    controller.document.element_mut(button).set_disabled(true);
    let service = StubService::ok(flu_result());
    let mut notifier = RecordingNotifier::default();

    let outcome = controller.submit(&service, &mut notifier).await;

    assert_eq!(outcome, SubmitOutcome::Ignored);
    assert!(service.requests().is_empty());
}

#[tokio::test]
async fn queued_events_run_in_order() {
    let mut controller = controller();
    let (tx, rx) = crossbeam_channel::unbounded();
    tx.send(UiEvent::TemperatureInput("38.0".into())).expect("send");
    tx.send(UiEvent::SliderInput {
        symptom: Symptom::SoreThroat,
        value: "7".into(),
    })
    .expect("send");
    tx.send(UiEvent::Submit).expect("send");
    let service = StubService::ok(flu_result());
    let mut notifier = RecordingNotifier::default();

    let outcome = drain_events(&mut controller, &rx, &service, &mut notifier).await;

    assert_eq!(outcome, Some(SubmitOutcome::Rendered));
    let requests = service.requests();
    assert_eq!(requests[0].temperature, 38.0);
    assert_eq!(requests[0].severity(Symptom::SoreThroat), 7);

    tx.send(UiEvent::Reset).expect("send");
    assert_eq!(
        drain_events(&mut controller, &rx, &service, &mut notifier).await,
        None
    );
    assert!(is_hidden(&controller, ids::RESULTS));
}

#[tokio::test]
async fn clicks_on_form_buttons_submit_and_reset() {
    let mut controller = controller();
    let doc = controller.document();
    let submit = doc.get_element_by_id(ids::SUBMIT_BUTTON).expect("submit");
    let reset = doc.get_element_by_id(ids::RESET_BUTTON).expect("reset");
    let results = doc.get_element_by_id(ids::RESULTS).expect("results");
    let service = StubService::ok(flu_result());
    let mut notifier = RecordingNotifier::default();

    controller.on_slider_input(Symptom::Fever, "8");
    let outcome = controller
        .dispatch(UiEvent::Click(submit), &service, &mut notifier)
        .await;
    assert_eq!(outcome, Some(SubmitOutcome::Rendered));
    assert!(!is_hidden(&controller, ids::RESULTS));

    let outcome = controller
        .dispatch(UiEvent::Click(results), &service, &mut notifier)
        .await;
    assert_eq!(outcome, None);
    assert!(!is_hidden(&controller, ids::RESULTS));

    let outcome = controller
        .dispatch(UiEvent::Click(reset), &service, &mut notifier)
        .await;
    assert_eq!(outcome, None);
    assert!(is_hidden(&controller, ids::RESULTS));
    assert_eq!(
        controller.document().by_id(Symptom::Fever.id()).and_then(|el| el.value()),
        Some("0")
    );
    assert_eq!(service.requests().len(), 1);
}
