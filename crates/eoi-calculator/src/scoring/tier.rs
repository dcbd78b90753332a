use serde::{Deserialize, Serialize};

pub const STRONG_THRESHOLD: u16 = 75;
pub const MODERATE_THRESHOLD: u16 = 50;

/// Qualitative band a total score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Strong,
    Moderate,
    Low,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Strong => "Strong",
            Tier::Moderate => "Moderate",
            Tier::Low => "Low",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Tier::Strong => {
                "Strong profile — high likelihood of selection if program criteria met."
            }
            Tier::Moderate => {
                "Moderate profile — consider improving language, work experience, or getting a job offer."
            }
            Tier::Low => {
                "Low profile — eligibility possible but selection unlikely without significant improvements."
            }
        }
    }
}

/// Lower bounds are inclusive.
pub fn classify(total: u16) -> Tier {
    if total >= STRONG_THRESHOLD {
        Tier::Strong
    } else if total >= MODERATE_THRESHOLD {
        Tier::Moderate
    } else {
        Tier::Low
    }
}
