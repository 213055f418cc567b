use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! symptom_catalog {
    ($($variant:ident => $id:literal),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Symptom {
            $($variant),+
        }

        impl Symptom {
            /// Every known symptom, in the order the form lists them.
            pub const ALL: &'static [Symptom] = &[$(Symptom::$variant),+];

            pub const COUNT: usize = Self::ALL.len();

            pub fn id(self) -> &'static str {
                match self {
                    $(Symptom::$variant => $id),+
                }
            }

            pub fn from_id(id: &str) -> Option<Self> {
                match id {
                    $($id => Some(Symptom::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

symptom_catalog! {
    Fever => "fever",
    BodyAche => "body_ache",
    Headache => "headache",
    StuffyNose => "stuffy_nose",
    RunnyNose => "runny_nose",
    Cough => "cough",
    Fatigue => "fatigue",
    SoreThroat => "sore_throat",
    DifficultyBreathing => "difficulty_breathing",
    ChestPain => "chest_pain",
    LossOfTaste => "loss_of_taste",
    Nausea => "nausea",
    Chills => "chills",
    Sneezing => "sneezing",
    WateryEyes => "watery_eyes",
    ItchyEyes => "itchy_eyes",
    FacialPain => "facial_pain",
    DifficultySwallowing => "difficulty_swallowing",
    SwollenLymph => "swollen_lymph",
    SensitivityLight => "sensitivity_light",
    SensitivitySound => "sensitivity_sound",
    Confusion => "confusion",
}

impl Symptom {
    /// Element id of the label that mirrors this symptom's slider value.
    pub fn value_label_id(self) -> String {
        format!("{}-value", self.id())
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name, e.g. `Difficulty Breathing`.
    pub fn display_name(self) -> String {
        self.id()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown symptom '{0}'")]
pub struct UnknownSymptom(pub String);

impl FromStr for Symptom {
    type Err = UnknownSymptom;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symptom::from_id(s.trim()).ok_or_else(|| UnknownSymptom(s.to_string()))
    }
}
