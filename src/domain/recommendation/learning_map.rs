//! Schema for personalized learning maps.

use serde::{Deserialize, Serialize};

/// Step difficulty band shown to the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A single actionable step inside a learning phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStep {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub personalized_tip: Option<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub time_estimate: Option<String>,
}

/// A phase of the learning journey (foundation, practice, mastery).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPhase {
    pub title: String,
    pub duration: String,
    pub focus: String,
    #[serde(default)]
    pub personality_note: Option<String>,
    /// Display hue the UI assigns to the phase, e.g. "blue".
    #[serde(default)]
    pub color: Option<String>,
    pub steps: Vec<LearningStep>,
}

/// Progress milestone with an attached reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub metric: String,
    pub value: u32,
    pub reward: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A predicted struggle and the suggested workaround.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialChallenge {
    pub challenge: String,
    pub solution: String,
}

/// Personalized skill-learning roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningMap {
    pub skill_name: String,
    pub personalized_approach: String,
    pub estimated_duration: String,
    pub phases: Vec<LearningPhase>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub personality_based_tips: Vec<String>,
    #[serde(default)]
    pub potential_challenges: Vec<PotentialChallenge>,
}

impl LearningMap {
    /// Total number of steps across all phases.
    pub fn step_count(&self) -> usize {
        self.phases.iter().map(|p| p.steps.len()).sum()
    }
}
