//! Quick assessment answers.
//!
//! Each question is a closed enum; the `describe` methods return the exact
//! interpretation text embedded in analysis prompts, so the model sees a
//! consistent reading of every answer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Satisfaction with the current major, on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MajorSatisfaction(u8);

impl MajorSatisfaction {
    /// Creates a satisfaction level, validating the 1-5 range.
    pub fn new(level: u8) -> Result<Self, ValidationError> {
        if (1..=5).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ValidationError::out_of_range(
                "major_satisfaction",
                1,
                5,
                level as i32,
            ))
        }
    }

    /// Returns the numeric level.
    pub fn level(&self) -> u8 {
        self.0
    }

    /// Interpretation used in prompts.
    pub fn describe(&self) -> &'static str {
        match self.0 {
            1 => "Really dislikes their major - looking for alternative paths",
            2 => "Not very happy with their major - open to new directions",
            3 => "Neutral about their major - exploring complementary skills",
            4 => "Likes their major - wants to enhance with additional skills",
            _ => "Loves their major - seeking to specialize and excel",
        }
    }
}

impl Default for MajorSatisfaction {
    fn default() -> Self {
        Self(3)
    }
}

/// How the student prefers to work with others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkStyle {
    Independent,
    SmallTeam,
    LargeTeam,
    Flexible,
}

impl WorkStyle {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Independent => {
                "Prefers working alone with full autonomy (high independence, lower agreeableness)"
            }
            Self::SmallTeam => {
                "Enjoys small team collaboration (moderate extraversion, high agreeableness)"
            }
            Self::LargeTeam => {
                "Thrives in large, diverse groups (high extraversion, high openness)"
            }
            Self::Flexible => {
                "Adapts to different work styles (balanced personality, high adaptability)"
            }
        }
    }
}

/// Approach to solving problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemSolving {
    Analyze,
    Creative,
    Research,
    Intuition,
}

impl ProblemSolving {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Analyze => "Systematic analyzer (high conscientiousness, analytical thinking)",
            Self::Creative => "Creative innovator (high openness, divergent thinking)",
            Self::Research => "Research-oriented (investigative, learning-focused)",
            Self::Intuition => "Intuitive actor (spontaneous, risk-tolerant)",
        }
    }
}

/// Energy response to social interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialEnergy {
    Energized,
    Neutral,
    NeedBreak,
    Exhausted,
}

impl SocialEnergy {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Energized => "Highly extraverted - gains energy from social interaction",
            Self::Neutral => "Ambiverted - balanced social needs",
            Self::NeedBreak => "Introverted - needs quiet time to recharge",
            Self::Exhausted => "Highly introverted - requires minimal social interaction",
        }
    }
}

/// Preferred way of learning new material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearningPreference {
    Doing,
    Visual,
    Reading,
    Discussing,
}

impl LearningPreference {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Doing => "Kinesthetic learner - learns by doing",
            Self::Visual => "Visual learner - learns by observing",
            Self::Reading => "Verbal learner - learns through text",
            Self::Discussing => "Social learner - learns through dialogue",
        }
    }
}

/// Preferred working environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkEnvironment {
    Structured,
    Dynamic,
    Creative,
    Supportive,
}

impl WorkEnvironment {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Structured => "Prefers organized, process-driven environments",
            Self::Dynamic => "Thrives in fast-paced, changing environments",
            Self::Creative => "Needs flexible, experimental spaces",
            Self::Supportive => "Values collaborative, mentorship-rich environments",
        }
    }
}

/// What the student gravitates to in free time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FreeTime {
    Create,
    Tinker,
    Analyze,
    Socialize,
}

impl FreeTime {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Create => "Creative pursuits (artistic personality)",
            Self::Tinker => "Hands-on building (realistic personality)",
            Self::Analyze => "Problem-solving activities (investigative personality)",
            Self::Socialize => "Social organizing (social personality)",
        }
    }
}

/// The kind of project that excites the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExcitingProject {
    Innovation,
    Improvement,
    Impact,
    Technical,
}

impl ExcitingProject {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Innovation => "Creating new things (entrepreneurial spirit)",
            Self::Improvement => "Optimizing systems (analytical mindset)",
            Self::Impact => "Helping others (social orientation)",
            Self::Technical => "Technical challenges (investigative nature)",
        }
    }
}

/// Self-identified natural strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NaturalStrength {
    Ideas,
    Planning,
    Emotional,
    Technical,
}

impl NaturalStrength {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Ideas => "Creative ideation and brainstorming",
            Self::Planning => "Organization and strategic planning",
            Self::Emotional => "Emotional intelligence and support",
            Self::Technical => "Technical expertise and problem-solving",
        }
    }
}

/// Activity the student prefers to avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvoidActivity {
    Repetitive,
    Public,
    Detail,
    Conflict,
}

impl AvoidActivity {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Repetitive => "Dislikes routine (needs variety and stimulation)",
            Self::Public => "Avoids spotlight (introverted tendencies)",
            Self::Detail => "Dislikes minutiae (big-picture thinker)",
            Self::Conflict => "Avoids confrontation (harmony-seeking)",
        }
    }
}

/// Where the student sees themselves in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FutureVision {
    Expert,
    Leader,
    Entrepreneur,
    Innovator,
}

impl FutureVision {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Expert => "Seeks deep expertise (specialist mindset)",
            Self::Leader => "Aspires to leadership (enterprising nature)",
            Self::Entrepreneur => "Wants independence (entrepreneurial spirit)",
            Self::Innovator => "Aims to innovate (creative visionary)",
        }
    }
}

/// Primary motivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Motivation {
    Impact,
    Growth,
    Recognition,
    Balance,
}

impl Motivation {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Impact => "Purpose-driven and altruistic",
            Self::Growth => "Learning-focused with growth mindset",
            Self::Recognition => "Achievement-oriented and ambitious",
            Self::Balance => "Lifestyle-focused and balanced",
        }
    }
}

/// Response to stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StressCoping {
    Thrive,
    Methodical,
    Support,
    Struggle,
}

impl StressCoping {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Thrive => "Performs well under pressure",
            Self::Methodical => "Becomes more organized when stressed",
            Self::Support => "Seeks collaboration under stress",
            Self::Struggle => "Needs low-stress environments",
        }
    }
}

/// Natural role within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamRole {
    Leader,
    Mediator,
    Innovator,
    Executor,
}

impl TeamRole {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Leader => "Natural leader and direction-setter",
            Self::Mediator => "Diplomatic harmony-keeper",
            Self::Innovator => "Creative idea generator",
            Self::Executor => "Reliable task completer",
        }
    }
}

/// Decision-making style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionMaking {
    Data,
    Intuition,
    Others,
    Quick,
}

impl DecisionMaking {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Data => "Data-driven decision maker",
            Self::Intuition => "Intuitive decision maker",
            Self::Others => "Collaborative decision maker",
            Self::Quick => "Fast, adaptive decision maker",
        }
    }
}

/// Working pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkPace {
    Steady,
    Bursts,
    Deadline,
    Flexible,
}

impl WorkPace {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Steady => "Consistent, methodical worker",
            Self::Bursts => "Works in creative bursts",
            Self::Deadline => "Deadline-driven producer",
            Self::Flexible => "Adaptable work patterns",
        }
    }
}

/// Complete answer set for the quick assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAssessmentAnswers {
    // Basic info
    pub undergraduate_degree: String,
    pub major_satisfaction: MajorSatisfaction,
    /// When false, the degree is excluded from every downstream prompt.
    pub include_major: bool,
    pub about_yourself: String,

    // Work style and preferences
    pub work_style: WorkStyle,
    pub problem_solving: ProblemSolving,
    pub social_energy: SocialEnergy,
    pub learning_preference: LearningPreference,
    pub work_environment: WorkEnvironment,

    // Interests and strengths
    pub free_time: FreeTime,
    pub exciting_project: ExcitingProject,
    pub natural_strength: NaturalStrength,
    pub avoid_activity: AvoidActivity,
    pub future_vision: FutureVision,

    // Values and motivations
    pub motivation: Motivation,
    pub stress_coping: StressCoping,
    pub team_role: TeamRole,
    pub decision_making: DecisionMaking,
    pub work_pace: WorkPace,
}

impl QuickAssessmentAnswers {
    /// The degree as it should appear in prompts: `None` when the student
    /// opted out of considering their major.
    pub fn degree_for_prompt(&self) -> Option<&str> {
        if self.include_major && !self.undergraduate_degree.trim().is_empty() {
            Some(self.undergraduate_degree.trim())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_answers() -> QuickAssessmentAnswers {
        QuickAssessmentAnswers {
            undergraduate_degree: "Data Science".to_string(),
            major_satisfaction: MajorSatisfaction::new(4).unwrap(),
            include_major: true,
            about_yourself: "I enjoy building small tools.".to_string(),
            work_style: WorkStyle::SmallTeam,
            problem_solving: ProblemSolving::Analyze,
            social_energy: SocialEnergy::NeedBreak,
            learning_preference: LearningPreference::Doing,
            work_environment: WorkEnvironment::Structured,
            free_time: FreeTime::Analyze,
            exciting_project: ExcitingProject::Technical,
            natural_strength: NaturalStrength::Technical,
            avoid_activity: AvoidActivity::Repetitive,
            future_vision: FutureVision::Expert,
            motivation: Motivation::Growth,
            stress_coping: StressCoping::Methodical,
            team_role: TeamRole::Executor,
            decision_making: DecisionMaking::Data,
            work_pace: WorkPace::Steady,
        }
    }

    #[test]
    fn satisfaction_rejects_out_of_range() {
        assert!(MajorSatisfaction::new(0).is_err());
        assert!(MajorSatisfaction::new(6).is_err());
        assert!(MajorSatisfaction::new(5).is_ok());
    }

    #[test]
    fn degree_excluded_when_major_not_included() {
        let mut answers = sample_answers();
        assert_eq!(answers.degree_for_prompt(), Some("Data Science"));

        answers.include_major = false;
        assert_eq!(answers.degree_for_prompt(), None);
    }

    #[test]
    fn blank_degree_never_appears_in_prompt() {
        let mut answers = sample_answers();
        answers.undergraduate_degree = "   ".to_string();
        assert_eq!(answers.degree_for_prompt(), None);
    }

    #[test]
    fn answers_serialize_kebab_case() {
        let json = serde_json::to_string(&WorkStyle::SmallTeam).unwrap();
        assert_eq!(json, "\"small-team\"");
        let parsed: SocialEnergy = serde_json::from_str("\"need-break\"").unwrap();
        assert_eq!(parsed, SocialEnergy::NeedBreak);
    }
}
