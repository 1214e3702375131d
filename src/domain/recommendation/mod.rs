//! Typed schemas for generated analysis content.
//!
//! Each analysis pipeline expects one of these shapes back from the model.
//! Parsing is strict: a response that does not fit its schema is rejected as
//! a single extraction failure rather than patched field by field.

mod analysis;
mod ilp;
mod learning_map;

pub use analysis::{
    AdditionalSkill, CareerPath, ComprehensiveAnalysis, CoreProfile, EducationPath, MatchScore,
    PrimarySkill, ProfileTrait, QuickAnalysis, SkillDetail, SkillRecommendation, SkillToAvoid,
    WorkEnvironmentFit,
};
pub use ilp::{DomainRecommendation, IlpRecommendations};
pub use learning_map::{
    Difficulty, LearningMap, LearningPhase, LearningStep, Milestone, PotentialChallenge,
};
