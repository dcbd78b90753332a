use crate::scoring::{
    AgeGroup, AnswerDraft, Answers, CanadianExperience, Education, EducationLocation,
    JobLocation, LanguageBenchmark, LanguageTrack, SpecialJobOffer, TotalExperience,
};

/// Master's in Alberta, CLB 6, bilingual, every job-offer bonus. Totals 98.
pub(super) fn strong_answers() -> Answers {
    Answers {
        education: Education::Masters,
        education_location: EducationLocation::Alberta,
        language: LanguageTrack::English,
        language_score: LanguageBenchmark::Level6,
        bilingual: true,
        total_experience: TotalExperience::TwelveMonthsPlus,
        canadian_experience: CanadianExperience::AlbertaSixMonthsPlus,
        age: AgeGroup::From21To34,
        family_connection: true,
        job_offer: true,
        special_job_offer: SpecialJobOffer::TourismHospitality,
        job_location: JobLocation::OtherAlberta,
        regulated_occupation: true,
    }
}

/// Lowest option everywhere. Only the age and total-experience floors score.
pub(super) fn minimum_answers() -> Answers {
    Answers {
        education: Education::SecondaryOrLower,
        education_location: EducationLocation::OutsideCanada,
        language: LanguageTrack::English,
        language_score: LanguageBenchmark::NoTest,
        bilingual: false,
        total_experience: TotalExperience::UnderSixMonths,
        canadian_experience: CanadianExperience::UnderSixMonths,
        age: AgeGroup::From18To20,
        family_connection: false,
        job_offer: false,
        special_job_offer: SpecialJobOffer::None,
        job_location: JobLocation::CalgaryCma,
        regulated_occupation: false,
    }
}

pub(super) fn strong_draft() -> AnswerDraft {
    AnswerDraft {
        education: Some("masters".to_string()),
        education_location: Some("alberta".to_string()),
        language: Some("english".to_string()),
        english_score: Some("6".to_string()),
        french_score: None,
        bilingual: true,
        total_experience: Some("12_plus".to_string()),
        canadian_experience: Some("alberta_6_plus".to_string()),
        age: Some("21_34".to_string()),
        family_connection: true,
        job_offer: true,
        special_job_offer: Some("tourism_hospitality".to_string()),
        job_location: Some("other_alberta".to_string()),
        regulated_occupation: true,
    }
}
