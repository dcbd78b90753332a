use super::answers::Answers;
use super::questions::{
    AGE, BILINGUAL, CANADIAN_EXPERIENCE, CLB, EDUCATION, EDUCATION_LOCATION, FAMILY_CONNECTION,
    JOB_LOCATION, JOB_OFFER, NCLC, REGULATED_OCCUPATION, SPECIAL_JOB_OFFER, TOTAL_EXPERIENCE,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score the grid is framed against when presenting a total.
pub const NOMINAL_MAXIMUM: u16 = 100;

/// Named contribution to the total. Language proficiency is scored from whichever
/// benchmark table the chosen track selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Education,
    EducationLocation,
    Language,
    Bilingual,
    TotalExperience,
    CanadianExperience,
    Age,
    FamilyConnection,
    JobOffer,
    SpecialJobOffer,
    JobLocation,
    RegulatedOccupation,
}

impl Factor {
    pub const ALL: [Factor; 12] = [
        Factor::Education,
        Factor::EducationLocation,
        Factor::Language,
        Factor::Bilingual,
        Factor::TotalExperience,
        Factor::CanadianExperience,
        Factor::Age,
        Factor::FamilyConnection,
        Factor::JobOffer,
        Factor::SpecialJobOffer,
        Factor::JobLocation,
        Factor::RegulatedOccupation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Factor::Education => "Education",
            Factor::EducationLocation => "Education Location",
            Factor::Language => "Language Proficiency",
            Factor::Bilingual => "Bilingual Bonus",
            Factor::TotalExperience => "Work Experience",
            Factor::CanadianExperience => "Canadian Work Experience",
            Factor::Age => "Age",
            Factor::FamilyConnection => "Family Connection",
            Factor::JobOffer => "Job Offer",
            Factor::SpecialJobOffer => "Special Job Offer Type",
            Factor::JobLocation => "Job Location",
            Factor::RegulatedOccupation => "Regulated Occupation Bonus",
        }
    }

    /// Highest value the factor can contribute under the current grid.
    pub fn maximum(&self) -> u8 {
        match self {
            Factor::Education => EDUCATION.maximum(),
            Factor::EducationLocation => EDUCATION_LOCATION.maximum(),
            Factor::Language => CLB.maximum().max(NCLC.maximum()),
            Factor::Bilingual => BILINGUAL.points,
            Factor::TotalExperience => TOTAL_EXPERIENCE.maximum(),
            Factor::CanadianExperience => CANADIAN_EXPERIENCE.maximum(),
            Factor::Age => AGE.maximum(),
            Factor::FamilyConnection => FAMILY_CONNECTION.points,
            Factor::JobOffer => JOB_OFFER.points,
            Factor::SpecialJobOffer => SPECIAL_JOB_OFFER.maximum(),
            Factor::JobLocation => JOB_LOCATION.maximum(),
            Factor::RegulatedOccupation => REGULATED_OCCUPATION.points,
        }
    }
}

/// Discrete contribution to the total, keeping the selection that earned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub factor: Factor,
    pub label: &'static str,
    pub selection: &'static str,
    pub points: u8,
    pub maximum: u8,
}

/// Per-factor points plus their sum. Always rebuilt from a full answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub total: u16,
}

fn component(factor: Factor, selection: &'static str, points: u8) -> ScoreComponent {
    ScoreComponent {
        factor,
        label: factor.label(),
        selection,
        points,
        maximum: factor.maximum(),
    }
}

fn checkbox_selection(checked: bool) -> &'static str {
    if checked {
        "Yes"
    } else {
        "No"
    }
}

/// Scores a resolved answer set against the points grid.
pub fn evaluate(answers: &Answers) -> ScoreBreakdown {
    let language_table = answers.language.benchmark_table();

    let components = vec![
        component(
            Factor::Education,
            EDUCATION.label(answers.education),
            EDUCATION.points(answers.education),
        ),
        component(
            Factor::EducationLocation,
            EDUCATION_LOCATION.label(answers.education_location),
            EDUCATION_LOCATION.points(answers.education_location),
        ),
        component(
            Factor::Language,
            language_table.label(answers.language_score),
            language_table.points(answers.language_score),
        ),
        component(
            Factor::Bilingual,
            checkbox_selection(answers.bilingual),
            BILINGUAL.points(answers.bilingual),
        ),
        component(
            Factor::TotalExperience,
            TOTAL_EXPERIENCE.label(answers.total_experience),
            TOTAL_EXPERIENCE.points(answers.total_experience),
        ),
        component(
            Factor::CanadianExperience,
            CANADIAN_EXPERIENCE.label(answers.canadian_experience),
            CANADIAN_EXPERIENCE.points(answers.canadian_experience),
        ),
        component(Factor::Age, AGE.label(answers.age), AGE.points(answers.age)),
        component(
            Factor::FamilyConnection,
            checkbox_selection(answers.family_connection),
            FAMILY_CONNECTION.points(answers.family_connection),
        ),
        component(
            Factor::JobOffer,
            checkbox_selection(answers.job_offer),
            JOB_OFFER.points(answers.job_offer),
        ),
        component(
            Factor::SpecialJobOffer,
            SPECIAL_JOB_OFFER.label(answers.special_job_offer),
            SPECIAL_JOB_OFFER.points(answers.special_job_offer),
        ),
        component(
            Factor::JobLocation,
            JOB_LOCATION.label(answers.job_location),
            JOB_LOCATION.points(answers.job_location),
        ),
        component(
            Factor::RegulatedOccupation,
            checkbox_selection(answers.regulated_occupation),
            REGULATED_OCCUPATION.points(answers.regulated_occupation),
        ),
    ];

    let total = components
        .iter()
        .map(|component| u16::from(component.points))
        .sum();

    ScoreBreakdown { components, total }
}

/// Factors printed together on one line of the results panel.
const LINE_GROUPS: [&[Factor]; 9] = [
    &[Factor::Education, Factor::EducationLocation],
    &[Factor::Language, Factor::Bilingual],
    &[Factor::TotalExperience, Factor::CanadianExperience],
    &[Factor::Age],
    &[Factor::FamilyConnection],
    &[Factor::JobOffer],
    &[Factor::SpecialJobOffer],
    &[Factor::JobLocation],
    &[Factor::RegulatedOccupation],
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownPart {
    pub label: &'static str,
    pub points: u8,
}

/// One labeled line of the results panel, e.g. `Education: 10 + Education Location: 10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    pub parts: Vec<BreakdownPart>,
}

impl fmt::Display for BreakdownLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, part) in self.parts.iter().enumerate() {
            if index > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{}: {}", part.label, part.points)?;
        }
        Ok(())
    }
}

impl ScoreBreakdown {
    pub fn points(&self, factor: Factor) -> u8 {
        self.components
            .iter()
            .find(|component| component.factor == factor)
            .map_or(0, |component| component.points)
    }

    pub fn lines(&self) -> Vec<BreakdownLine> {
        LINE_GROUPS
            .iter()
            .map(|group| BreakdownLine {
                parts: group
                    .iter()
                    .map(|factor| BreakdownPart {
                        label: factor.label(),
                        points: self.points(*factor),
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn headline(&self) -> String {
        format!(
            "Your total AAIP Worker EOI score is: {} / {}",
            self.total, NOMINAL_MAXIMUM
        )
    }
}
