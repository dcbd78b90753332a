use super::tables::{BonusRule, ChoiceRule, ChoiceTable};
use serde::{Deserialize, Serialize};

/// Identifies every question on the AAIP Worker EOI form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Education,
    EducationLocation,
    Language,
    EnglishScore,
    FrenchScore,
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

impl QuestionId {
    pub const ALL: [QuestionId; 14] = [
        QuestionId::Education,
        QuestionId::EducationLocation,
        QuestionId::Language,
        QuestionId::EnglishScore,
        QuestionId::FrenchScore,
        QuestionId::Bilingual,
        QuestionId::TotalExperience,
        QuestionId::CanadianExperience,
        QuestionId::Age,
        QuestionId::FamilyConnection,
        QuestionId::JobOffer,
        QuestionId::SpecialJobOffer,
        QuestionId::JobLocation,
        QuestionId::RegulatedOccupation,
    ];

    /// Form field name used by the HTML form and the CLI `--json` output.
    pub fn key(&self) -> &'static str {
        match self {
            QuestionId::Education => "education",
            QuestionId::EducationLocation => "education_location",
            QuestionId::Language => "language",
            QuestionId::EnglishScore => "english_score",
            QuestionId::FrenchScore => "french_score",
            QuestionId::Bilingual => "bilingual",
            QuestionId::TotalExperience => "total_experience",
            QuestionId::CanadianExperience => "canadian_experience",
            QuestionId::Age => "age",
            QuestionId::FamilyConnection => "family_connection",
            QuestionId::JobOffer => "job_offer",
            QuestionId::SpecialJobOffer => "special_job_offer",
            QuestionId::JobLocation => "job_location",
            QuestionId::RegulatedOccupation => "regulated_occupation",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            QuestionId::Education => "Highest Level of Education Completed",
            QuestionId::EducationLocation => {
                "Location of Highest Level of Education Completed in Canada"
            }
            QuestionId::Language => "Which language gives you the highest points?",
            QuestionId::EnglishScore => "Lowest CLB score across all abilities",
            QuestionId::FrenchScore => "Lowest NCLC score across all abilities",
            QuestionId::Bilingual => {
                "I have CLB/NCLC 4 or higher in both English and French"
            }
            QuestionId::TotalExperience => "Total Work Experience (Canada + Abroad)",
            QuestionId::CanadianExperience => "Work Experience in Canada",
            QuestionId::Age => "Age group",
            QuestionId::FamilyConnection => {
                "I have a parent, child, or sibling in Alberta who is a Canadian PR or citizen over 18 years old"
            }
            QuestionId::JobOffer => "I have a permanent full-time job offer in Alberta",
            QuestionId::SpecialJobOffer => "Special Job Offer Type",
            QuestionId::JobLocation => "Location of Job in Alberta",
            QuestionId::RegulatedOccupation => {
                "Job offer in a regulated occupation AND I hold valid Alberta certification/licensing"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "doctorate")]
    Doctorate,
    #[serde(rename = "masters")]
    Masters,
    #[serde(rename = "bachelors")]
    Bachelors,
    #[serde(rename = "trades")]
    TradesCertificate,
    #[serde(rename = "diploma")]
    DiplomaCertificate,
    #[serde(rename = "secondary")]
    SecondaryOrLower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLocation {
    #[serde(rename = "alberta")]
    Alberta,
    #[serde(rename = "other_province")]
    OtherProvince,
    #[serde(rename = "outside_canada")]
    OutsideCanada,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageTrack {
    English,
    French,
}

/// Lowest CLB (English) or NCLC (French) level across all four abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageBenchmark {
    #[serde(rename = "6")]
    Level6,
    #[serde(rename = "5")]
    Level5,
    #[serde(rename = "4")]
    Level4,
    #[serde(rename = "3")]
    Level3,
    #[serde(rename = "no_test")]
    NoTest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TotalExperience {
    #[serde(rename = "12_plus")]
    TwelveMonthsPlus,
    #[serde(rename = "6_to_11")]
    SixToElevenMonths,
    #[serde(rename = "under_6")]
    UnderSixMonths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanadianExperience {
    #[serde(rename = "alberta_6_plus")]
    AlbertaSixMonthsPlus,
    #[serde(rename = "other_province_6_plus")]
    OtherProvinceSixMonthsPlus,
    #[serde(rename = "under_6")]
    UnderSixMonths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18_20")]
    From18To20,
    #[serde(rename = "21_34")]
    From21To34,
    #[serde(rename = "35_49")]
    From35To49,
    #[serde(rename = "50_plus")]
    FiftyPlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialJobOffer {
    None,
    RuralRenewal,
    TourismHospitality,
    LawEnforcement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobLocation {
    CalgaryCma,
    EdmontonCma,
    RuralRenewalCommunity,
    OtherAlberta,
}

pub static EDUCATION: ChoiceTable<Education> = ChoiceTable {
    question: QuestionId::Education,
    rules: &[
        ChoiceRule {
            choice: Education::Doctorate,
            key: "doctorate",
            label: "Doctorate Degree",
            points: 12,
        },
        ChoiceRule {
            choice: Education::Masters,
            key: "masters",
            label: "Master’s Degree",
            points: 10,
        },
        ChoiceRule {
            choice: Education::Bachelors,
            key: "bachelors",
            label: "Bachelor’s Degree",
            points: 7,
        },
        ChoiceRule {
            choice: Education::TradesCertificate,
            key: "trades",
            label: "Trades Certificate/Diploma",
            points: 7,
        },
        ChoiceRule {
            choice: Education::DiplomaCertificate,
            key: "diploma",
            label: "Diploma/Certificate",
            points: 4,
        },
        ChoiceRule {
            choice: Education::SecondaryOrLower,
            key: "secondary",
            label: "Secondary School or lower",
            points: 0,
        },
    ],
};

pub static EDUCATION_LOCATION: ChoiceTable<EducationLocation> = ChoiceTable {
    question: QuestionId::EducationLocation,
    rules: &[
        ChoiceRule {
            choice: EducationLocation::Alberta,
            key: "alberta",
            label: "Completed in Alberta",
            points: 10,
        },
        ChoiceRule {
            choice: EducationLocation::OtherProvince,
            key: "other_province",
            label: "Completed in another province/territory",
            points: 6,
        },
        ChoiceRule {
            choice: EducationLocation::OutsideCanada,
            key: "outside_canada",
            label: "Completed outside Canada",
            points: 0,
        },
    ],
};

/// The track itself awards nothing; it picks the benchmark table.
pub static LANGUAGE_TRACK: ChoiceTable<LanguageTrack> = ChoiceTable {
    question: QuestionId::Language,
    rules: &[
        ChoiceRule {
            choice: LanguageTrack::English,
            key: "english",
            label: "English",
            points: 0,
        },
        ChoiceRule {
            choice: LanguageTrack::French,
            key: "french",
            label: "French",
            points: 0,
        },
    ],
};

pub static CLB: ChoiceTable<LanguageBenchmark> = ChoiceTable {
    question: QuestionId::EnglishScore,
    rules: &[
        ChoiceRule {
            choice: LanguageBenchmark::Level6,
            key: "6",
            label: "CLB 6",
            points: 10,
        },
        ChoiceRule {
            choice: LanguageBenchmark::Level5,
            key: "5",
            label: "CLB 5",
            points: 8,
        },
        ChoiceRule {
            choice: LanguageBenchmark::Level4,
            key: "4",
            label: "CLB 4",
            points: 5,
        },
        ChoiceRule {
            choice: LanguageBenchmark::Level3,
            key: "3",
            label: "CLB 3",
            points: 0,
        },
        ChoiceRule {
            choice: LanguageBenchmark::NoTest,
            key: "no_test",
            label: "No test",
            points: 0,
        },
    ],
};

pub static NCLC: ChoiceTable<LanguageBenchmark> = ChoiceTable {
    question: QuestionId::FrenchScore,
    rules: &[
        ChoiceRule {
            choice: LanguageBenchmark::Level6,
            key: "6",
            label: "NCLC 6",
            points: 8,
        },
        ChoiceRule {
            choice: LanguageBenchmark::Level5,
            key: "5",
            label: "NCLC 5",
            points: 5,
        },
        ChoiceRule {
            choice: LanguageBenchmark::Level4,
            key: "4",
            label: "NCLC 4",
            points: 3,
        },
        ChoiceRule {
            choice: LanguageBenchmark::Level3,
            key: "3",
            label: "NCLC 3",
            points: 0,
        },
        ChoiceRule {
            choice: LanguageBenchmark::NoTest,
            key: "no_test",
            label: "No test",
            points: 0,
        },
    ],
};

pub static TOTAL_EXPERIENCE: ChoiceTable<TotalExperience> = ChoiceTable {
    question: QuestionId::TotalExperience,
    rules: &[
        ChoiceRule {
            choice: TotalExperience::TwelveMonthsPlus,
            key: "12_plus",
            label: "12+ months",
            points: 11,
        },
        ChoiceRule {
            choice: TotalExperience::SixToElevenMonths,
            key: "6_to_11",
            label: "6-11 months",
            points: 7,
        },
        ChoiceRule {
            choice: TotalExperience::UnderSixMonths,
            key: "under_6",
            label: "Less than 6 months",
            points: 3,
        },
    ],
};

pub static CANADIAN_EXPERIENCE: ChoiceTable<CanadianExperience> = ChoiceTable {
    question: QuestionId::CanadianExperience,
    rules: &[
        ChoiceRule {
            choice: CanadianExperience::AlbertaSixMonthsPlus,
            key: "alberta_6_plus",
            label: "6+ months in Alberta",
            points: 10,
        },
        ChoiceRule {
            choice: CanadianExperience::OtherProvinceSixMonthsPlus,
            key: "other_province_6_plus",
            label: "6+ months in another province/territory",
            points: 6,
        },
        ChoiceRule {
            choice: CanadianExperience::UnderSixMonths,
            key: "under_6",
            label: "Less than 6 months in Canada",
            points: 0,
        },
    ],
};

/// Peaks at 21-34; the two outer bands score the same.
pub static AGE: ChoiceTable<AgeGroup> = ChoiceTable {
    question: QuestionId::Age,
    rules: &[
        ChoiceRule {
            choice: AgeGroup::From18To20,
            key: "18_20",
            label: "18-20 years",
            points: 3,
        },
        ChoiceRule {
            choice: AgeGroup::From21To34,
            key: "21_34",
            label: "21-34 years",
            points: 5,
        },
        ChoiceRule {
            choice: AgeGroup::From35To49,
            key: "35_49",
            label: "35-49 years",
            points: 4,
        },
        ChoiceRule {
            choice: AgeGroup::FiftyPlus,
            key: "50_plus",
            label: "50 years and older",
            points: 3,
        },
    ],
};

pub static SPECIAL_JOB_OFFER: ChoiceTable<SpecialJobOffer> = ChoiceTable {
    question: QuestionId::SpecialJobOffer,
    rules: &[
        ChoiceRule {
            choice: SpecialJobOffer::None,
            key: "none",
            label: "None",
            points: 0,
        },
        ChoiceRule {
            choice: SpecialJobOffer::RuralRenewal,
            key: "rural_renewal",
            label: "Rural Renewal Stream designated community",
            points: 6,
        },
        ChoiceRule {
            choice: SpecialJobOffer::TourismHospitality,
            key: "tourism_hospitality",
            label: "Tourism & Hospitality sector",
            points: 6,
        },
        ChoiceRule {
            choice: SpecialJobOffer::LawEnforcement,
            key: "law_enforcement",
            label: "Law enforcement occupation",
            points: 6,
        },
    ],
};

pub static JOB_LOCATION: ChoiceTable<JobLocation> = ChoiceTable {
    question: QuestionId::JobLocation,
    rules: &[
        ChoiceRule {
            choice: JobLocation::CalgaryCma,
            key: "calgary_cma",
            label: "Calgary CMA",
            points: 0,
        },
        ChoiceRule {
            choice: JobLocation::EdmontonCma,
            key: "edmonton_cma",
            label: "Edmonton CMA",
            points: 0,
        },
        ChoiceRule {
            choice: JobLocation::RuralRenewalCommunity,
            key: "rural_renewal_community",
            label: "Rural Renewal Stream community",
            points: 5,
        },
        ChoiceRule {
            choice: JobLocation::OtherAlberta,
            key: "other_alberta",
            label: "Other Alberta community",
            points: 5,
        },
    ],
};

pub static BILINGUAL: BonusRule = BonusRule {
    question: QuestionId::Bilingual,
    points: 3,
};

pub static FAMILY_CONNECTION: BonusRule = BonusRule {
    question: QuestionId::FamilyConnection,
    points: 8,
};

pub static JOB_OFFER: BonusRule = BonusRule {
    question: QuestionId::JobOffer,
    points: 10,
};

pub static REGULATED_OCCUPATION: BonusRule = BonusRule {
    question: QuestionId::RegulatedOccupation,
    points: 10,
};

impl LanguageTrack {
    /// Benchmark table that scores the language question for this track.
    pub fn benchmark_table(&self) -> &'static ChoiceTable<LanguageBenchmark> {
        match self {
            LanguageTrack::English => &CLB,
            LanguageTrack::French => &NCLC,
        }
    }
}

/// Numbered heading grouping related questions on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSection {
    pub number: u8,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    pub questions: Vec<QuestionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDefinition {
    pub id: QuestionId,
    pub key: &'static str,
    pub prompt: &'static str,
    /// Only asked when the applicant picked this language track.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<LanguageTrack>,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    Select { scored: bool, options: Vec<OptionView> },
    Checkbox { points: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub key: &'static str,
    pub label: &'static str,
    pub points: u8,
}

fn select<T>(table: &ChoiceTable<T>, scored: bool) -> QuestionDefinition
where
    T: Copy + PartialEq + 'static,
{
    QuestionDefinition {
        id: table.question,
        key: table.question.key(),
        prompt: table.question.prompt(),
        track: None,
        kind: QuestionKind::Select {
            scored,
            options: table
                .rules
                .iter()
                .map(|rule| OptionView {
                    key: rule.key,
                    label: rule.label,
                    points: rule.points,
                })
                .collect(),
        },
    }
}

fn checkbox(rule: &BonusRule) -> QuestionDefinition {
    QuestionDefinition {
        id: rule.question,
        key: rule.question.key(),
        prompt: rule.question.prompt(),
        track: None,
        kind: QuestionKind::Checkbox {
            points: rule.points,
        },
    }
}

fn benchmark(track: LanguageTrack) -> QuestionDefinition {
    QuestionDefinition {
        track: Some(track),
        ..select(track.benchmark_table(), true)
    }
}

/// Full questionnaire in display order.
pub fn questionnaire() -> Vec<QuestionSection> {
    vec![
        QuestionSection {
            number: 1,
            title: "Education",
            note: None,
            questions: vec![select(&EDUCATION, true), select(&EDUCATION_LOCATION, true)],
        },
        QuestionSection {
            number: 2,
            title: "Language Proficiency",
            note: Some(
                "Minimum requirement: CLB 4 in all four abilities for English or NCLC 4 for French.",
            ),
            questions: vec![
                select(&LANGUAGE_TRACK, false),
                benchmark(LanguageTrack::English),
                benchmark(LanguageTrack::French),
                checkbox(&BILINGUAL),
            ],
        },
        QuestionSection {
            number: 3,
            title: "Work Experience",
            note: None,
            questions: vec![
                select(&TOTAL_EXPERIENCE, true),
                select(&CANADIAN_EXPERIENCE, true),
            ],
        },
        QuestionSection {
            number: 4,
            title: "Age",
            note: None,
            questions: vec![select(&AGE, true)],
        },
        QuestionSection {
            number: 5,
            title: "Family Connection in Alberta",
            note: None,
            questions: vec![checkbox(&FAMILY_CONNECTION)],
        },
        QuestionSection {
            number: 6,
            title: "Economic Factors - Alberta Job Offer",
            note: None,
            questions: vec![
                checkbox(&JOB_OFFER),
                select(&SPECIAL_JOB_OFFER, true),
                select(&JOB_LOCATION, true),
                checkbox(&REGULATED_OCCUPATION),
            ],
        },
    ]
}
