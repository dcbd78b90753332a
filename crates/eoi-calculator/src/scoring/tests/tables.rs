use crate::scoring::questions::{
    AGE, BILINGUAL, CANADIAN_EXPERIENCE, CLB, EDUCATION, EDUCATION_LOCATION, FAMILY_CONNECTION,
    JOB_LOCATION, JOB_OFFER, LANGUAGE_TRACK, NCLC, REGULATED_OCCUPATION, SPECIAL_JOB_OFFER,
    TOTAL_EXPERIENCE,
};
use crate::scoring::{
    questionnaire, AgeGroup, ChoiceTable, Education, Factor, JobLocation, LanguageBenchmark,
    QuestionId, QuestionKind, SpecialJobOffer, NOMINAL_MAXIMUM,
};
use serde::Serialize;
use std::collections::HashSet;

fn assert_covers<T>(table: &ChoiceTable<T>, variants: &[T])
where
    T: Copy + PartialEq + std::fmt::Debug + 'static,
{
    assert_eq!(
        table.rules.len(),
        variants.len(),
        "{:?} table should list every option once",
        table.question
    );
    for variant in variants {
        let count = table
            .rules
            .iter()
            .filter(|rule| rule.choice == *variant)
            .count();
        assert_eq!(count, 1, "{variant:?} appears {count} times");
    }

    let keys: HashSet<_> = table.rules.iter().map(|rule| rule.key).collect();
    assert_eq!(keys.len(), table.rules.len(), "form keys must be unique");
}

#[test]
fn tables_cover_every_option_exactly_once() {
    assert_covers(
        &EDUCATION,
        &[
            Education::Doctorate,
            Education::Masters,
            Education::Bachelors,
            Education::TradesCertificate,
            Education::DiplomaCertificate,
            Education::SecondaryOrLower,
        ],
    );
    let benchmarks = [
        LanguageBenchmark::Level6,
        LanguageBenchmark::Level5,
        LanguageBenchmark::Level4,
        LanguageBenchmark::Level3,
        LanguageBenchmark::NoTest,
    ];
    assert_covers(&CLB, &benchmarks);
    assert_covers(&NCLC, &benchmarks);
    assert_covers(
        &AGE,
        &[
            AgeGroup::From18To20,
            AgeGroup::From21To34,
            AgeGroup::From35To49,
            AgeGroup::FiftyPlus,
        ],
    );
    assert_covers(
        &SPECIAL_JOB_OFFER,
        &[
            SpecialJobOffer::None,
            SpecialJobOffer::RuralRenewal,
            SpecialJobOffer::TourismHospitality,
            SpecialJobOffer::LawEnforcement,
        ],
    );
    assert_covers(
        &JOB_LOCATION,
        &[
            JobLocation::CalgaryCma,
            JobLocation::EdmontonCma,
            JobLocation::RuralRenewalCommunity,
            JobLocation::OtherAlberta,
        ],
    );
    assert_eq!(EDUCATION_LOCATION.rules.len(), 3);
    assert_eq!(TOTAL_EXPERIENCE.rules.len(), 3);
    assert_eq!(CANADIAN_EXPERIENCE.rules.len(), 3);
    assert_eq!(LANGUAGE_TRACK.rules.len(), 2);
}

#[test]
fn documented_point_values() {
    let education: Vec<u8> = EDUCATION.rules.iter().map(|rule| rule.points).collect();
    assert_eq!(education, vec![12, 10, 7, 7, 4, 0]);

    let clb: Vec<u8> = CLB.rules.iter().map(|rule| rule.points).collect();
    assert_eq!(clb, vec![10, 8, 5, 0, 0]);

    let nclc: Vec<u8> = NCLC.rules.iter().map(|rule| rule.points).collect();
    assert_eq!(nclc, vec![8, 5, 3, 0, 0]);

    let age: Vec<u8> = AGE.rules.iter().map(|rule| rule.points).collect();
    assert_eq!(age, vec![3, 5, 4, 3]);

    let education_location: Vec<u8> = EDUCATION_LOCATION
        .rules
        .iter()
        .map(|rule| rule.points)
        .collect();
    assert_eq!(education_location, vec![10, 6, 0]);

    let total_experience: Vec<u8> = TOTAL_EXPERIENCE
        .rules
        .iter()
        .map(|rule| rule.points)
        .collect();
    assert_eq!(total_experience, vec![11, 7, 3]);

    let canadian_experience: Vec<u8> = CANADIAN_EXPERIENCE
        .rules
        .iter()
        .map(|rule| rule.points)
        .collect();
    assert_eq!(canadian_experience, vec![10, 6, 0]);

    let special_job_offer: Vec<u8> = SPECIAL_JOB_OFFER
        .rules
        .iter()
        .map(|rule| rule.points)
        .collect();
    assert_eq!(special_job_offer, vec![0, 6, 6, 6]);

    let job_location: Vec<u8> = JOB_LOCATION.rules.iter().map(|rule| rule.points).collect();
    assert_eq!(job_location, vec![0, 0, 5, 5]);

    let language_track: Vec<u8> = LANGUAGE_TRACK.rules.iter().map(|rule| rule.points).collect();
    assert_eq!(language_track, vec![0, 0]);

    assert_eq!(BILINGUAL.points(true), 3);
    assert_eq!(FAMILY_CONNECTION.points(true), 8);
    assert_eq!(JOB_OFFER.points(true), 10);
    assert_eq!(REGULATED_OCCUPATION.points(true), 10);
    assert_eq!(REGULATED_OCCUPATION.points(false), 0);
}

fn assert_serde_names_match_keys<T>(table: &ChoiceTable<T>)
where
    T: Serialize + std::fmt::Debug + 'static,
{
    for rule in table.rules {
        let encoded = serde_json::to_value(&rule.choice).expect("choice serializes");
        assert_eq!(
            encoded,
            serde_json::Value::from(rule.key),
            "{:?} {:?} serializes differently from its form key",
            table.question,
            rule.choice
        );
    }
}

#[test]
fn serde_names_match_form_keys() {
    assert_serde_names_match_keys(&EDUCATION);
    assert_serde_names_match_keys(&EDUCATION_LOCATION);
    assert_serde_names_match_keys(&LANGUAGE_TRACK);
    assert_serde_names_match_keys(&CLB);
    assert_serde_names_match_keys(&NCLC);
    assert_serde_names_match_keys(&TOTAL_EXPERIENCE);
    assert_serde_names_match_keys(&CANADIAN_EXPERIENCE);
    assert_serde_names_match_keys(&AGE);
    assert_serde_names_match_keys(&SPECIAL_JOB_OFFER);
    assert_serde_names_match_keys(&JOB_LOCATION);
}

#[test]
fn factor_maxima_sum_to_nominal_cap() {
    let sum: u16 = Factor::ALL
        .iter()
        .map(|factor| u16::from(factor.maximum()))
        .sum();
    assert_eq!(sum, NOMINAL_MAXIMUM);
}

#[test]
fn special_job_offer_types_award_the_same_points() {
    let awarded: HashSet<u8> = [
        SpecialJobOffer::RuralRenewal,
        SpecialJobOffer::TourismHospitality,
        SpecialJobOffer::LawEnforcement,
    ]
    .into_iter()
    .map(|offer| SPECIAL_JOB_OFFER.points(offer))
    .collect();
    assert_eq!(awarded, HashSet::from([6]));
    assert_eq!(SPECIAL_JOB_OFFER.points(SpecialJobOffer::None), 0);
}

#[test]
fn lowest_prefers_earliest_tie() {
    assert_eq!(AGE.lowest(), Some(AgeGroup::From18To20));
    assert_eq!(JOB_LOCATION.lowest(), Some(JobLocation::CalgaryCma));
    assert_eq!(CLB.lowest(), Some(LanguageBenchmark::Level3));
    assert_eq!(EDUCATION.first(), Some(Education::Doctorate));
    assert_eq!(EDUCATION.lowest(), Some(Education::SecondaryOrLower));
}

#[test]
fn parse_trims_and_rejects_unknown_keys() {
    assert_eq!(EDUCATION.parse(" masters "), Some(Education::Masters));
    assert_eq!(EDUCATION.parse("Masters"), None);
    assert_eq!(CLB.parse("7"), None);
}

#[test]
fn questionnaire_lists_every_question_once() {
    let sections = questionnaire();
    assert_eq!(sections.len(), 6);
    assert_eq!(
        sections.iter().map(|section| section.number).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );

    let ids: Vec<QuestionId> = sections
        .iter()
        .flat_map(|section| section.questions.iter().map(|question| question.id))
        .collect();
    assert_eq!(ids, QuestionId::ALL.to_vec());

    let language = &sections[1];
    assert!(language
        .note
        .expect("language note")
        .contains("CLB 4 in all four abilities"));
    let track = &language.questions[0];
    assert!(matches!(
        &track.kind,
        QuestionKind::Select { scored: false, options } if options.len() == 2
    ));
}
