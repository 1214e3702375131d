//! Deterministic trait derivation from quick-assessment answers.
//!
//! The quick pathway has no real test report to feed the ILP recommender, so
//! Big Five scores and RIASEC codes are derived from the answers with fixed
//! weights. Scores are always clamped to 0-100.

use serde::{Deserialize, Serialize};

use super::answers::{
    AvoidActivity, ExcitingProject, FreeTime, FutureVision, NaturalStrength, ProblemSolving,
    QuickAssessmentAnswers, SocialEnergy, StressCoping, TeamRole, WorkEnvironment, WorkPace,
    WorkStyle,
};

/// Big Five scores on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigFiveScores {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

impl BigFiveScores {
    /// (trait name, score) pairs in canonical order, for prompt formatting.
    pub fn entries(&self) -> [(&'static str, u8); 5] {
        [
            ("Openness", self.openness),
            ("Conscientiousness", self.conscientiousness),
            ("Extraversion", self.extraversion),
            ("Agreeableness", self.agreeableness),
            ("Neuroticism", self.neuroticism),
        ]
    }

    /// High / Moderate / Low banding used in prompts.
    pub fn level(score: u8) -> &'static str {
        if score >= 70 {
            "High"
        } else if score >= 30 {
            "Moderate"
        } else {
            "Low"
        }
    }
}

/// The six RIASEC interest codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiasecCode {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecCode {
    /// All codes in canonical order.
    pub const ALL: [RiasecCode; 6] = [
        RiasecCode::Realistic,
        RiasecCode::Investigative,
        RiasecCode::Artistic,
        RiasecCode::Social,
        RiasecCode::Enterprising,
        RiasecCode::Conventional,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::Investigative => "Investigative",
            Self::Artistic => "Artistic",
            Self::Social => "Social",
            Self::Enterprising => "Enterprising",
            Self::Conventional => "Conventional",
        }
    }
}

/// RIASEC profile: dominant codes plus per-code scores (0-100).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiasecProfile {
    pub primary: RiasecCode,
    pub secondary: RiasecCode,
    pub scores: Vec<(RiasecCode, u8)>,
}

/// Combined derived profile used by the ILP recommendation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitProfile {
    pub big_five: BigFiveScores,
    pub riasec: RiasecProfile,
}

impl TraitProfile {
    /// Derives the full profile from quick-assessment answers.
    pub fn from_answers(answers: &QuickAssessmentAnswers) -> Self {
        Self {
            big_five: derive_big_five(answers),
            riasec: derive_riasec(answers),
        }
    }
}

fn clamp(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

/// Derives Big Five scores from answers with fixed weights.
fn derive_big_five(answers: &QuickAssessmentAnswers) -> BigFiveScores {
    let mut extraversion: i32 = match answers.social_energy {
        SocialEnergy::Energized => 80,
        SocialEnergy::Exhausted => 20,
        SocialEnergy::NeedBreak => 35,
        SocialEnergy::Neutral => 50,
    };
    match answers.work_style {
        WorkStyle::LargeTeam => extraversion += 15,
        WorkStyle::Independent => extraversion -= 15,
        _ => {}
    }

    let mut openness: i32 = match answers.problem_solving {
        ProblemSolving::Creative => 85,
        ProblemSolving::Analyze => 40,
        _ => 50,
    };
    if answers.exciting_project == ExcitingProject::Innovation {
        openness += 20;
    }
    match answers.work_environment {
        WorkEnvironment::Creative => openness += 15,
        WorkEnvironment::Structured => openness -= 20,
        _ => {}
    }

    let mut conscientiousness: i32 = 50;
    if answers.problem_solving == ProblemSolving::Analyze {
        conscientiousness = 75;
    }
    if answers.natural_strength == NaturalStrength::Planning {
        conscientiousness = 85;
    }
    match answers.work_pace {
        WorkPace::Steady => conscientiousness = 80,
        WorkPace::Bursts => conscientiousness = 35,
        _ => {}
    }
    if answers.avoid_activity == AvoidActivity::Detail {
        conscientiousness -= 20;
    }

    let mut agreeableness: i32 = 50;
    if answers.natural_strength == NaturalStrength::Emotional {
        agreeableness = 85;
    }
    match answers.team_role {
        TeamRole::Mediator => agreeableness = 90,
        TeamRole::Leader => agreeableness = 55,
        _ => {}
    }
    if answers.avoid_activity == AvoidActivity::Conflict {
        agreeableness += 15;
    }
    if answers.work_environment == WorkEnvironment::Supportive {
        agreeableness += 10;
    }

    let neuroticism: i32 = match answers.stress_coping {
        StressCoping::Thrive => 25,
        StressCoping::Struggle => 75,
        StressCoping::Methodical => 40,
        StressCoping::Support => 50,
    };

    BigFiveScores {
        openness: clamp(openness),
        conscientiousness: clamp(conscientiousness),
        extraversion: clamp(extraversion),
        agreeableness: clamp(agreeableness),
        neuroticism: clamp(neuroticism),
    }
}

/// Derives RIASEC codes from answers with fixed weights.
fn derive_riasec(answers: &QuickAssessmentAnswers) -> RiasecProfile {
    use RiasecCode::*;

    let mut raw: Vec<(RiasecCode, i32)> = RiasecCode::ALL.iter().map(|c| (*c, 0)).collect();
    let mut add = |code: RiasecCode, points: i32| {
        for entry in raw.iter_mut() {
            if entry.0 == code {
                entry.1 += points;
            }
        }
    };

    match answers.free_time {
        FreeTime::Tinker => add(Realistic, 30),
        FreeTime::Analyze => add(Investigative, 30),
        FreeTime::Create => add(Artistic, 30),
        FreeTime::Socialize => add(Social, 30),
    }

    match answers.exciting_project {
        ExcitingProject::Technical => add(Investigative, 25),
        ExcitingProject::Innovation => add(Artistic, 20),
        ExcitingProject::Impact => add(Social, 25),
        ExcitingProject::Improvement => add(Conventional, 15),
    }

    match answers.future_vision {
        FutureVision::Expert => add(Investigative, 20),
        FutureVision::Leader => add(Enterprising, 30),
        FutureVision::Entrepreneur => add(Enterprising, 25),
        FutureVision::Innovator => add(Artistic, 25),
    }

    match answers.natural_strength {
        NaturalStrength::Technical => add(Investigative, 20),
        NaturalStrength::Ideas => add(Artistic, 20),
        NaturalStrength::Emotional => add(Social, 25),
        NaturalStrength::Planning => add(Conventional, 20),
    }

    match answers.team_role {
        TeamRole::Leader => add(Enterprising, 20),
        TeamRole::Innovator => add(Artistic, 15),
        TeamRole::Mediator => add(Social, 20),
        TeamRole::Executor => add(Conventional, 15),
    }

    let mut sorted = raw.clone();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    RiasecProfile {
        primary: sorted[0].0,
        secondary: sorted[1].0,
        scores: raw
            .into_iter()
            .map(|(code, score)| (code, clamp(score * 2)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{
        DecisionMaking, LearningPreference, MajorSatisfaction, Motivation,
    };

    fn answers() -> QuickAssessmentAnswers {
        QuickAssessmentAnswers {
            undergraduate_degree: "Data Science".to_string(),
            major_satisfaction: MajorSatisfaction::default(),
            include_major: true,
            about_yourself: String::new(),
            work_style: WorkStyle::Independent,
            problem_solving: ProblemSolving::Analyze,
            social_energy: SocialEnergy::Exhausted,
            learning_preference: LearningPreference::Reading,
            work_environment: WorkEnvironment::Structured,
            free_time: FreeTime::Analyze,
            exciting_project: ExcitingProject::Technical,
            natural_strength: NaturalStrength::Technical,
            avoid_activity: AvoidActivity::Repetitive,
            future_vision: FutureVision::Expert,
            motivation: Motivation::Growth,
            stress_coping: StressCoping::Thrive,
            team_role: TeamRole::Executor,
            decision_making: DecisionMaking::Data,
            work_pace: WorkPace::Steady,
        }
    }

    #[test]
    fn introverted_answers_yield_low_extraversion() {
        let profile = TraitProfile::from_answers(&answers());
        // Exhausted (20) minus independent work style (15).
        assert_eq!(profile.big_five.extraversion, 5);
    }

    #[test]
    fn analytical_answers_yield_investigative_primary() {
        let profile = TraitProfile::from_answers(&answers());
        assert_eq!(profile.riasec.primary, RiasecCode::Investigative);
    }

    #[test]
    fn steady_pace_sets_high_conscientiousness() {
        let profile = TraitProfile::from_answers(&answers());
        assert_eq!(profile.big_five.conscientiousness, 80);
    }

    #[test]
    fn thriving_under_stress_lowers_neuroticism() {
        let profile = TraitProfile::from_answers(&answers());
        assert_eq!(profile.big_five.neuroticism, 25);
    }

    #[test]
    fn extraverted_creative_answers_flip_the_profile() {
        let mut a = answers();
        a.social_energy = SocialEnergy::Energized;
        a.work_style = WorkStyle::LargeTeam;
        a.problem_solving = ProblemSolving::Creative;
        a.free_time = FreeTime::Create;
        a.exciting_project = ExcitingProject::Innovation;
        a.natural_strength = NaturalStrength::Ideas;
        a.future_vision = FutureVision::Innovator;
        a.team_role = TeamRole::Innovator;
        a.work_environment = WorkEnvironment::Creative;

        let profile = TraitProfile::from_answers(&a);
        assert_eq!(profile.big_five.extraversion, 95);
        assert_eq!(profile.riasec.primary, RiasecCode::Artistic);
        assert!(profile.big_five.openness >= 85);
    }

    #[test]
    fn scores_are_clamped_to_percentage_range() {
        let profile = TraitProfile::from_answers(&answers());
        for (_, score) in &profile.riasec.scores {
            assert!(*score <= 100);
        }
    }

    #[test]
    fn level_banding() {
        assert_eq!(BigFiveScores::level(85), "High");
        assert_eq!(BigFiveScores::level(50), "Moderate");
        assert_eq!(BigFiveScores::level(10), "Low");
    }
}
