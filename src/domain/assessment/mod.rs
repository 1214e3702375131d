//! Personality assessment inputs.
//!
//! Two intake pathways feed the analysis pipelines: the quick assessment
//! (fifteen single-choice questions plus profile fields) and the
//! comprehensive pathway (uploaded third-party test reports).

mod answers;
mod traits;
mod uploads;
mod wizard;

pub use answers::{
    AvoidActivity, DecisionMaking, ExcitingProject, FreeTime, FutureVision, LearningPreference,
    MajorSatisfaction, Motivation, NaturalStrength, ProblemSolving, QuickAssessmentAnswers,
    SocialEnergy, StressCoping, TeamRole, WorkEnvironment, WorkPace, WorkStyle,
};
pub use traits::{BigFiveScores, RiasecCode, RiasecProfile, TraitProfile};
pub use uploads::{TestContent, TestKind, UploadedTest, UploadedTests};
pub use wizard::{Pathway, Wizard};
