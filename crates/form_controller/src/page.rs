//! Element ids the controller binds to, and the page skeleton that provides them.

use shared::{catalog::Symptom, severity::BASELINE_TEMPERATURE};

use crate::{
    dom::{Document, NodeId},
    theme::SLIDER_BASELINE_BLUE,
};

pub mod ids {
    pub const FORM: &str = "symptomForm";
    pub const TEMPERATURE: &str = "temperature";
    pub const SUBMIT_BUTTON: &str = "submit-btn";
    pub const RESET_BUTTON: &str = "reset-btn";

    pub const RESULTS: &str = "results";
    pub const TIMESTAMP: &str = "timestamp";
    pub const CRITICAL_WARNING: &str = "critical-warning";
    pub const CRITICAL_LIST: &str = "critical-list";

    pub const SEVERITY_SCORE: &str = "severity-score";
    pub const SEVERITY_FILL: &str = "severity-fill";
    pub const SYMPTOM_COUNT: &str = "symptom-count";
    pub const TEMP_DISPLAY: &str = "temp-display";
    pub const SYMPTOM_AVERAGE: &str = "symptom-average";

    pub const DIAGNOSIS_LIST: &str = "diagnosis-list";

    pub const MEDICAL_PANEL: &str = "medical-rec";
    pub const MEDICAL_LIST: &str = "medical-list";
    pub const HOME_CARE_PANEL: &str = "homecare-rec";
    pub const HOME_CARE_LIST: &str = "homecare-list";
    pub const PREVENTION_PANEL: &str = "prevention-rec";
    pub const PREVENTION_LIST: &str = "prevention-list";
}

pub const SUBMIT_LABEL: &str = "🔍 Analyze Symptoms";

/// Builds the symptom-checker page with every element the controller expects.
pub fn symptom_checker_page() -> Document {
    let mut doc = Document::new();

    let form = doc.append(None, "form", Some(ids::FORM));
    build_temperature_field(&mut doc, form);
    for symptom in Symptom::ALL {
        build_symptom_slider(&mut doc, form, *symptom);
    }

    let submit = doc.append(Some(form), "button", Some(ids::SUBMIT_BUTTON));
    let el = doc.element_mut(submit);
    el.add_class("submit-btn");
    el.set_attr("type", "submit");
    el.set_text(SUBMIT_LABEL);

    let reset = doc.append(Some(form), "button", Some(ids::RESET_BUTTON));
    let el = doc.element_mut(reset);
    el.add_class("reset-btn");
    el.set_attr("type", "button");
    el.set_text("↺ Reset");

    build_results_section(&mut doc);
    doc
}

fn build_temperature_field(doc: &mut Document, form: NodeId) {
    let group = doc.append(Some(form), "div", None);
    doc.element_mut(group).add_class("temperature-group");

    let label = doc.append(Some(group), "label", None);
    doc.element_mut(label).set_attr("for", ids::TEMPERATURE);
    doc.element_mut(label).set_text("Body Temperature (°C)");

    let input = doc.append(Some(group), "input", Some(ids::TEMPERATURE));
    let el = doc.element_mut(input);
    el.set_attr("type", "number");
    el.set_attr("step", "0.1");
    el.set_attr("min", "35");
    el.set_attr("max", "42");
    el.set_initial_value(BASELINE_TEMPERATURE.to_string());
}

fn build_symptom_slider(doc: &mut Document, form: NodeId, symptom: Symptom) {
    let group = doc.append(Some(form), "div", None);
    doc.element_mut(group).add_class("symptom-slider");

    let label = doc.append(Some(group), "label", None);
    doc.element_mut(label).set_attr("for", symptom.id());
    doc.element_mut(label).set_text(symptom.display_name());

    let slider = doc.append(Some(group), "input", Some(symptom.id()));
    let el = doc.element_mut(slider);
    el.set_attr("type", "range");
    el.set_attr("min", "0");
    el.set_attr("max", "10");
    el.set_initial_value("0");

    let value_label_id = symptom.value_label_id();
    let value = doc.append(Some(group), "span", Some(&value_label_id));
    let el = doc.element_mut(value);
    el.add_class("slider-value");
    el.set_style("color", SLIDER_BASELINE_BLUE);
    el.set_text("0");
}

fn build_results_section(doc: &mut Document) {
    let results = doc.append(None, "section", Some(ids::RESULTS));
    doc.element_mut(results).add_class("results");
    doc.element_mut(results).set_hidden(true);

    let header = doc.append(Some(results), "div", None);
    doc.element_mut(header).add_class("results-header");
    let title = doc.append(Some(header), "h2", None);
    doc.element_mut(title).set_text("Diagnosis Results");
    doc.append(Some(header), "span", Some(ids::TIMESTAMP));

    let warning = doc.append(Some(results), "div", Some(ids::CRITICAL_WARNING));
    doc.element_mut(warning).add_class("critical-warning");
    doc.element_mut(warning).set_hidden(true);
    let heading = doc.append(Some(warning), "strong", None);
    doc.element_mut(heading).set_text("⚠️ Critical symptoms detected");
    doc.append(Some(warning), "ul", Some(ids::CRITICAL_LIST));

    let cards = doc.append(Some(results), "div", None);
    doc.element_mut(cards).add_class("summary-cards");
    summary_card(doc, cards, "Overall Severity", ids::SEVERITY_SCORE);
    let bar = doc.append(Some(cards), "div", None);
    doc.element_mut(bar).add_class("severity-bar");
    let fill = doc.append(Some(bar), "div", Some(ids::SEVERITY_FILL));
    doc.element_mut(fill).add_class("severity-fill");
    summary_card(doc, cards, "Active Symptoms", ids::SYMPTOM_COUNT);
    summary_card(doc, cards, "Temperature", ids::TEMP_DISPLAY);
    summary_card(doc, cards, "Average Intensity", ids::SYMPTOM_AVERAGE);

    let diagnoses = doc.append(Some(results), "div", Some(ids::DIAGNOSIS_LIST));
    doc.element_mut(diagnoses).add_class("diagnosis-list");

    recommendation_panel(
        doc,
        results,
        "🏥 Medical Advice",
        ids::MEDICAL_PANEL,
        ids::MEDICAL_LIST,
    );
    recommendation_panel(
        doc,
        results,
        "🏠 Home Care",
        ids::HOME_CARE_PANEL,
        ids::HOME_CARE_LIST,
    );
    recommendation_panel(
        doc,
        results,
        "🛡️ Prevention",
        ids::PREVENTION_PANEL,
        ids::PREVENTION_LIST,
    );
}

fn summary_card(doc: &mut Document, parent: NodeId, title: &str, value_id: &str) {
    let card = doc.append(Some(parent), "div", None);
    doc.element_mut(card).add_class("summary-card");
    let heading = doc.append(Some(card), "h4", None);
    doc.element_mut(heading).set_text(title);
    let value = doc.append(Some(card), "span", Some(value_id));
    doc.element_mut(value).add_class("summary-value");
}

fn recommendation_panel(
    doc: &mut Document,
    parent: NodeId,
    title: &str,
    panel_id: &str,
    list_id: &str,
) {
    let panel = doc.append(Some(parent), "div", Some(panel_id));
    doc.element_mut(panel).add_class("recommendation-panel");
    doc.element_mut(panel).set_hidden(true);
    let heading = doc.append(Some(panel), "h3", None);
    doc.element_mut(heading).set_text(title);
    doc.append(Some(panel), "ul", Some(list_id));
}
