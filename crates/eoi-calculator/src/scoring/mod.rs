//! AAIP Worker EOI points grid: questionnaire tables, answer resolution, scoring, and tiers.

mod answers;
mod breakdown;
pub mod questions;
mod tables;
mod tier;

#[cfg(test)]
mod tests;

pub use answers::{AnswerDraft, AnswerError, Answers, MissingAnswerPolicy};
pub use breakdown::{
    evaluate, BreakdownLine, BreakdownPart, Factor, ScoreBreakdown, ScoreComponent,
    NOMINAL_MAXIMUM,
};
pub use questions::{
    questionnaire, AgeGroup, CanadianExperience, Education, EducationLocation, JobLocation,
    LanguageBenchmark, LanguageTrack, OptionView, QuestionDefinition, QuestionId, QuestionKind,
    QuestionSection, SpecialJobOffer, TotalExperience,
};
pub use tables::{BonusRule, ChoiceRule, ChoiceTable};
pub use tier::{classify, Tier, MODERATE_THRESHOLD, STRONG_THRESHOLD};

use serde::Serialize;
use tracing::debug;

/// Stateless calculator applying the missing-answer policy before scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreCalculator {
    policy: MissingAnswerPolicy,
}

impl ScoreCalculator {
    pub fn new(policy: MissingAnswerPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MissingAnswerPolicy {
        self.policy
    }

    pub fn assess(&self, draft: &AnswerDraft) -> Result<Assessment, AnswerError> {
        let answers = draft.resolve(self.policy)?;
        let assessment = Assessment::from_answers(answers);

        debug!(
            total = assessment.breakdown.total,
            tier = assessment.tier.label(),
            policy = self.policy.as_str(),
            "eoi score evaluated"
        );

        Ok(assessment)
    }
}

/// Evaluation output: the answers scored, their breakdown, and the resulting tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub answers: Answers,
    pub breakdown: ScoreBreakdown,
    pub tier: Tier,
}

impl Assessment {
    pub fn from_answers(answers: Answers) -> Self {
        let breakdown = evaluate(&answers);
        let tier = classify(breakdown.total);
        Self {
            answers,
            breakdown,
            tier,
        }
    }

    pub fn total(&self) -> u16 {
        self.breakdown.total
    }
}
