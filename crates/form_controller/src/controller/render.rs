//! Result rendering. Every region is cleared and rebuilt on each call.

use shared::{
    protocol::{Diagnosis, DiagnosisResult},
    severity::{confidence_tier, overall_tier, temperature_tier},
};
use tracing::debug;

use crate::{
    dom::ScrollTarget,
    theme::summary_color,
    view::{list_items, ViewNode},
};

use super::{FormController, Panel};

const RANK_MARKERS: [&str; 3] = ["🥇 ", "🥈 ", "🥉 "];

impl FormController {
    pub fn render(&mut self, result: &DiagnosisResult) {
        let regions = self.regions;

        if let Some(results) = regions.results {
            self.document.element_mut(results).set_hidden(false);
        }
        if let Some(timestamp) = regions.timestamp {
            self.document
                .element_mut(timestamp)
                .set_text(result.timestamp.as_str());
        }

        let immediate = result.recommendations.immediate();
        let show_critical = result.critical_warning && !immediate.is_empty();
        self.fill_panel(regions.critical, if show_critical { immediate } else { &[] });

        self.render_summary(result);
        self.render_diagnoses(&result.diagnoses);

        let recommendations = &result.recommendations;
        self.fill_panel(regions.medical, recommendations.medical());
        self.fill_panel(regions.home_care, recommendations.home_care());
        self.fill_panel(regions.prevention, recommendations.prevention());

        if let Some(results) = regions.results {
            self.document.scroll_to(ScrollTarget::Element(results));
        }
        debug!(
            diagnoses = result.diagnoses.len(),
            critical = show_critical,
            "results rendered"
        );
    }

    /// Shows the panel with one item per entry, or hides it when there is nothing to list.
    fn fill_panel(&mut self, panel: Panel, items: &[String]) {
        if let Some(list) = panel.list {
            self.document
                .element_mut(list)
                .replace_content(list_items(items));
        }
        if let Some(container) = panel.container {
            self.document
                .element_mut(container)
                .set_hidden(items.is_empty());
        }
    }

    fn render_summary(&mut self, result: &DiagnosisResult) {
        let regions = self.regions;
        let severity_color = summary_color(overall_tier(result.overall_severity));

        if let Some(score) = regions.severity_score {
            let score = self.document.element_mut(score);
            score.set_text(format!("{}/10", result.overall_severity));
            score.set_style("color", severity_color);
        }
        if let Some(fill) = regions.severity_fill {
            let fill = self.document.element_mut(fill);
            fill.set_style("width", format!("{}%", result.overall_severity * 10.0));
            fill.set_style("background", severity_color);
        }
        if let Some(count) = regions.symptom_count {
            self.document
                .element_mut(count)
                .set_text(result.active_symptom_count.to_string());
        }
        if let Some(temp) = regions.temp_display {
            let temp = self.document.element_mut(temp);
            temp.set_text(format!("{}°C", result.temperature));
            temp.set_style("color", summary_color(temperature_tier(result.temperature)));
        }
        if let Some(average) = regions.symptom_average {
            let text = result
                .symptom_average
                .map(|avg| avg.to_string())
                .unwrap_or_default();
            self.document.element_mut(average).set_text(text);
        }
    }

    fn render_diagnoses(&mut self, diagnoses: &[Diagnosis]) {
        let Some(list) = self.regions.diagnosis_list else {
            return;
        };
        let cards = if diagnoses.is_empty() {
            vec![no_condition_card()]
        } else {
            diagnoses
                .iter()
                .enumerate()
                .map(|(rank, diagnosis)| diagnosis_card(rank, diagnosis))
                .collect()
        };
        self.document.element_mut(list).replace_content(cards);
    }
}

fn no_condition_card() -> ViewNode {
    ViewNode::element("div")
        .class("diagnosis-card")
        .class("normal")
        .child(
            ViewNode::element("div")
                .class("diagnosis-header")
                .child(
                    ViewNode::element("div")
                        .class("diagnosis-name")
                        .text("No specific condition detected"),
                ),
        )
        .child(
            ViewNode::element("p")
                .class("diagnosis-description")
                .text("Symptoms are minimal. Continue to monitor your condition."),
        )
        .into()
}

fn diagnosis_card(rank: usize, diagnosis: &Diagnosis) -> ViewNode {
    let marker = RANK_MARKERS.get(rank).copied().unwrap_or_default();
    let tier = confidence_tier(diagnosis.confidence);

    let mut card = ViewNode::element("div")
        .class("diagnosis-card")
        .class(urgency_class(&diagnosis.urgency))
        .child(
            ViewNode::element("div")
                .class("diagnosis-header")
                .child(
                    ViewNode::element("div")
                        .class("diagnosis-name")
                        .text(format!("{marker}{}", diagnosis.disease)),
                )
                .child(
                    ViewNode::element("span")
                        .class("confidence-badge")
                        .class(tier.as_str())
                        .text(format!("{}% Match", diagnosis.confidence)),
                ),
        )
        .child(
            ViewNode::element("p")
                .class("diagnosis-description")
                .text(format!(
                    "{} • Incubation: {}",
                    diagnosis.description, diagnosis.incubation
                )),
        );

    let matched = diagnosis.matched_symptoms();
    if !matched.is_empty() {
        card = card.child(
            ViewNode::element("div")
                .class("matched-symptoms")
                .child(ViewNode::element("strong").text("Matched Symptoms:"))
                .child(ViewNode::LineBreak)
                .children(matched.iter().map(|name| {
                    ViewNode::element("span")
                        .class("symptom-tag")
                        .text(name.as_str())
                })),
        );
    }
    card.into()
}

/// Urgency tier as a class token; anything unusable falls back to `normal`.
fn urgency_class(urgency: &str) -> String {
    let token: String = urgency
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if token.is_empty() {
        "normal".to_string()
    } else {
        token
    }
}
