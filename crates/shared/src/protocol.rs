use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::{catalog::Symptom, severity::BASELINE_TEMPERATURE};

/// Body of `POST /diagnose`.
///
/// Serializes as a flat object: `temperature` first, then one integer per symptom in
/// catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnoseRequest {
    pub temperature: f64,
    severities: [u8; Symptom::COUNT],
}

impl Default for DiagnoseRequest {
    fn default() -> Self {
        Self {
            temperature: BASELINE_TEMPERATURE,
            severities: [0; Symptom::COUNT],
        }
    }
}

impl DiagnoseRequest {
    pub fn new(temperature: f64) -> Self {
        Self {
            temperature,
            ..Self::default()
        }
    }

    pub fn with_severity(mut self, symptom: Symptom, severity: u8) -> Self {
        self.set_severity(symptom, severity);
        self
    }

    pub fn set_severity(&mut self, symptom: Symptom, severity: u8) {
        self.severities[symptom.index()] = severity;
    }

    pub fn severity(&self, symptom: Symptom) -> u8 {
        self.severities[symptom.index()]
    }

    pub fn active_symptoms(&self) -> impl Iterator<Item = (Symptom, u8)> + '_ {
        Symptom::ALL
            .iter()
            .map(|symptom| (*symptom, self.severity(*symptom)))
            .filter(|(_, severity)| *severity > 0)
    }
}

impl Serialize for DiagnoseRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Symptom::COUNT + 1))?;
        map.serialize_entry("temperature", &self.temperature)?;
        for symptom in Symptom::ALL {
            map.serialize_entry(symptom.id(), &self.severity(*symptom))?;
        }
        map.end()
    }
}

/// Successful response of `POST /diagnose`.
///
/// Every field is optional on the wire; a missing field decodes to its empty value so a
/// partial body still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosisResult {
    pub timestamp: String,
    pub overall_severity: f64,
    pub active_symptom_count: u32,
    pub temperature: f64,
    pub critical_warning: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptom_average: Option<f64>,
    pub diagnoses: Vec<Diagnosis>,
    pub recommendations: Recommendations,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnosis {
    pub disease: String,
    pub confidence: f64,
    pub urgency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    pub description: String,
    pub incubation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_symptoms: Option<Vec<String>>,
}

impl Diagnosis {
    pub fn matched_symptoms(&self) -> &[String] {
        self.matched_symptoms.as_deref().unwrap_or_default()
    }
}

/// Advice lists attached to a result. `home_care` keeps its wire spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immediate: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_care: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevention: Option<Vec<String>>,
}

impl Recommendations {
    pub fn immediate(&self) -> &[String] {
        list_or_empty(&self.immediate)
    }

    pub fn medical(&self) -> &[String] {
        list_or_empty(&self.medical)
    }

    pub fn home_care(&self) -> &[String] {
        list_or_empty(&self.home_care)
    }

    pub fn prevention(&self) -> &[String] {
        list_or_empty(&self.prevention)
    }
}

fn list_or_empty(list: &Option<Vec<String>>) -> &[String] {
    list.as_deref().unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
