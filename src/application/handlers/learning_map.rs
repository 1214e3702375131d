//! Personalized learning map pipeline.

use std::sync::Arc;

use tracing::info;

use crate::application::error::AnalysisError;
use crate::application::prompts::learning_map_prompt;
use crate::domain::extraction::extract_json;
use crate::domain::recommendation::{LearningMap, SkillRecommendation};
use crate::ports::{ChatProvider, CompletionRequest, MessageRole};

const MAP_TEMPERATURE: f32 = 0.7;
const MAP_MAX_TOKENS: u32 = 4000;

/// Builds a personalized learning roadmap for one recommended skill.
pub struct LearningMapHandler {
    provider: Arc<dyn ChatProvider>,
}

impl LearningMapHandler {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(
        &self,
        skill: &SkillRecommendation,
        profile_summary: &str,
        personality_data: &serde_json::Value,
    ) -> Result<LearningMap, AnalysisError> {
        let prompt = learning_map_prompt(skill, profile_summary, personality_data);

        let request = CompletionRequest::new()
            .with_message(MessageRole::User, prompt)
            .with_temperature(MAP_TEMPERATURE)
            .with_max_tokens(MAP_MAX_TOKENS);

        let response = self.provider.complete(request).await?;
        let map: LearningMap = extract_json(&response.content)?;

        info!(
            skill = %map.skill_name,
            phases = map.phases.len(),
            steps = map.step_count(),
            "learning map generated"
        );

        Ok(map)
    }
}
