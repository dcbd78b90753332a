use super::questions::{
    AgeGroup, CanadianExperience, Education, EducationLocation, JobLocation, LanguageBenchmark,
    LanguageTrack, QuestionId, SpecialJobOffer, TotalExperience, AGE, CANADIAN_EXPERIENCE,
    EDUCATION, EDUCATION_LOCATION, JOB_LOCATION, LANGUAGE_TRACK, SPECIAL_JOB_OFFER,
    TOTAL_EXPERIENCE,
};
use super::tables::ChoiceTable;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fully resolved answer set. Every field holds one option from its closed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    pub education: Education,
    pub education_location: EducationLocation,
    pub language: LanguageTrack,
    pub language_score: LanguageBenchmark,
    pub bilingual: bool,
    pub total_experience: TotalExperience,
    pub canadian_experience: CanadianExperience,
    pub age: AgeGroup,
    pub family_connection: bool,
    pub job_offer: bool,
    pub special_job_offer: SpecialJobOffer,
    pub job_location: JobLocation,
    pub regulated_occupation: bool,
}

/// Raw selections as submitted by the form or the CLI.
///
/// Single-choice fields carry the option key (`"masters"`, `"21_34"`, ...). Only the
/// language score matching the chosen track is consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerDraft {
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub education_location: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub english_score: Option<String>,
    #[serde(default)]
    pub french_score: Option<String>,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub bilingual: bool,
    #[serde(default)]
    pub total_experience: Option<String>,
    #[serde(default)]
    pub canadian_experience: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub family_connection: bool,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub job_offer: bool,
    #[serde(default)]
    pub special_job_offer: Option<String>,
    #[serde(default)]
    pub job_location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub regulated_occupation: bool,
}

/// What to do with a single-choice question the applicant left unanswered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAnswerPolicy {
    /// Refuse to score until every question is answered.
    #[default]
    Reject,
    /// Score as if the first listed option had been chosen.
    FirstOption,
    /// Score as if the lowest-scoring option had been chosen.
    LowestOption,
}

impl MissingAnswerPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingAnswerPolicy::Reject => "reject",
            MissingAnswerPolicy::FirstOption => "first-option",
            MissingAnswerPolicy::LowestOption => "lowest-option",
        }
    }

    fn fill<T>(&self, table: &ChoiceTable<T>) -> Result<T, AnswerError>
    where
        T: Copy + PartialEq + 'static,
    {
        let filled = match self {
            MissingAnswerPolicy::Reject => None,
            MissingAnswerPolicy::FirstOption => table.first(),
            MissingAnswerPolicy::LowestOption => table.lowest(),
        };
        filled.ok_or(AnswerError::MissingSelection {
            question: table.question,
        })
    }
}

impl FromStr for MissingAnswerPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "reject" => Ok(Self::Reject),
            "first" | "first-option" => Ok(Self::FirstOption),
            "lowest" | "lowest-option" => Ok(Self::LowestOption),
            other => Err(format!(
                "unknown missing-answer policy '{other}' (expected reject, first-option, or lowest-option)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("please answer \"{}\"", .question.prompt())]
    MissingSelection { question: QuestionId },
    #[error("'{value}' is not an option for \"{}\"", .question.prompt())]
    InvalidOption { question: QuestionId, value: String },
}

impl AnswerError {
    pub fn question(&self) -> QuestionId {
        match self {
            AnswerError::MissingSelection { question }
            | AnswerError::InvalidOption { question, .. } => *question,
        }
    }
}

fn resolve_choice<T>(
    table: &ChoiceTable<T>,
    raw: Option<&str>,
    policy: MissingAnswerPolicy,
) -> Result<T, AnswerError>
where
    T: Copy + PartialEq + 'static,
{
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => table.parse(value).ok_or_else(|| AnswerError::InvalidOption {
            question: table.question,
            value: value.to_string(),
        }),
        None => policy.fill(table),
    }
}

impl AnswerDraft {
    /// Resolves every selection against its points table, in questionnaire order.
    pub fn resolve(&self, policy: MissingAnswerPolicy) -> Result<Answers, AnswerError> {
        let education = resolve_choice(&EDUCATION, self.education.as_deref(), policy)?;
        let education_location = resolve_choice(
            &EDUCATION_LOCATION,
            self.education_location.as_deref(),
            policy,
        )?;

        let language = resolve_choice(&LANGUAGE_TRACK, self.language.as_deref(), policy)?;
        let raw_score = match language {
            LanguageTrack::English => self.english_score.as_deref(),
            LanguageTrack::French => self.french_score.as_deref(),
        };
        let language_score = resolve_choice(language.benchmark_table(), raw_score, policy)?;

        let total_experience = resolve_choice(
            &TOTAL_EXPERIENCE,
            self.total_experience.as_deref(),
            policy,
        )?;
        let canadian_experience = resolve_choice(
            &CANADIAN_EXPERIENCE,
            self.canadian_experience.as_deref(),
            policy,
        )?;
        let age = resolve_choice(&AGE, self.age.as_deref(), policy)?;
        let special_job_offer = resolve_choice(
            &SPECIAL_JOB_OFFER,
            self.special_job_offer.as_deref(),
            policy,
        )?;
        let job_location = resolve_choice(&JOB_LOCATION, self.job_location.as_deref(), policy)?;

        Ok(Answers {
            education,
            education_location,
            language,
            language_score,
            bilingual: self.bilingual,
            total_experience,
            canadian_experience,
            age,
            family_connection: self.family_connection,
            job_offer: self.job_offer,
            special_job_offer,
            job_location,
            regulated_occupation: self.regulated_occupation,
        })
    }

    /// Selected option key for a single-choice question, if any.
    pub fn selection(&self, question: QuestionId) -> Option<&str> {
        let raw = match question {
            QuestionId::Education => &self.education,
            QuestionId::EducationLocation => &self.education_location,
            QuestionId::Language => &self.language,
            QuestionId::EnglishScore => &self.english_score,
            QuestionId::FrenchScore => &self.french_score,
            QuestionId::TotalExperience => &self.total_experience,
            QuestionId::CanadianExperience => &self.canadian_experience,
            QuestionId::Age => &self.age,
            QuestionId::SpecialJobOffer => &self.special_job_offer,
            QuestionId::JobLocation => &self.job_location,
            QuestionId::Bilingual
            | QuestionId::FamilyConnection
            | QuestionId::JobOffer
            | QuestionId::RegulatedOccupation => return None,
        };
        raw.as_deref()
    }

    /// Whether a checkbox question is ticked. Single-choice questions report `false`.
    pub fn checked(&self, question: QuestionId) -> bool {
        match question {
            QuestionId::Bilingual => self.bilingual,
            QuestionId::FamilyConnection => self.family_connection,
            QuestionId::JobOffer => self.job_offer,
            QuestionId::RegulatedOccupation => self.regulated_occupation,
            _ => false,
        }
    }
}

impl From<&Answers> for AnswerDraft {
    fn from(answers: &Answers) -> Self {
        let (english_score, french_score) = match answers.language {
            LanguageTrack::English => (Some(answers.language_score), None),
            LanguageTrack::French => (None, Some(answers.language_score)),
        };

        Self {
            education: Some(EDUCATION.key(answers.education).to_string()),
            education_location: Some(
                EDUCATION_LOCATION
                    .key(answers.education_location)
                    .to_string(),
            ),
            language: Some(LANGUAGE_TRACK.key(answers.language).to_string()),
            english_score: english_score
                .map(|score| LanguageTrack::English.benchmark_table().key(score).to_string()),
            french_score: french_score
                .map(|score| LanguageTrack::French.benchmark_table().key(score).to_string()),
            bilingual: answers.bilingual,
            total_experience: Some(TOTAL_EXPERIENCE.key(answers.total_experience).to_string()),
            canadian_experience: Some(
                CANADIAN_EXPERIENCE
                    .key(answers.canadian_experience)
                    .to_string(),
            ),
            age: Some(AGE.key(answers.age).to_string()),
            family_connection: answers.family_connection,
            job_offer: answers.job_offer,
            special_job_offer: Some(SPECIAL_JOB_OFFER.key(answers.special_job_offer).to_string()),
            job_location: Some(JOB_LOCATION.key(answers.job_location).to_string()),
            regulated_occupation: answers.regulated_occupation,
        }
    }
}

/// Accepts JSON booleans and the string values HTML checkboxes submit (`on`, `true`, ...).
fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct CheckboxVisitor;

    impl<'de> Visitor<'de> for CheckboxVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean or a checkbox value such as \"on\"")
        }

        fn visit_bool<E>(self, value: bool) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_str<E>(self, value: &str) -> Result<bool, E>
        where
            E: de::Error,
        {
            match value.trim().to_ascii_lowercase().as_str() {
                "on" | "true" | "yes" | "1" => Ok(true),
                "" | "off" | "false" | "no" | "0" => Ok(false),
                _ => Err(E::invalid_value(Unexpected::Str(value), &self)),
            }
        }

        fn visit_unit<E>(self) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(false)
        }
    }

    deserializer.deserialize_any(CheckboxVisitor)
}
