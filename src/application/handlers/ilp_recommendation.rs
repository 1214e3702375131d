//! ILP recommendation pipeline.

use std::sync::Arc;

use tracing::debug;

use crate::application::error::AnalysisError;
use crate::application::prompts::{ilp_recommendation_prompt, IlpStudentProfile};
use crate::domain::extraction::extract_json;
use crate::domain::ilp::IlpCatalog;
use crate::domain::recommendation::IlpRecommendations;
use crate::ports::{ChatProvider, CompletionRequest, MessageRole};

const ILP_TEMPERATURE: f32 = 0.7;
const ILP_MAX_TOKENS: u32 = 3000;

/// Matches a student profile against the bundled ILP event catalog.
pub struct IlpRecommendationHandler {
    provider: Arc<dyn ChatProvider>,
}

impl IlpRecommendationHandler {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Generates per-domain event recommendations for the student.
    pub async fn handle(
        &self,
        profile: &IlpStudentProfile,
    ) -> Result<IlpRecommendations, AnalysisError> {
        let prompt = ilp_recommendation_prompt(profile, IlpCatalog::bundled());

        let request = CompletionRequest::new()
            .with_message(MessageRole::User, prompt)
            .with_temperature(ILP_TEMPERATURE)
            .with_max_tokens(ILP_MAX_TOKENS);

        let response = self.provider.complete(request).await?;
        let recommendations: IlpRecommendations = extract_json(&response.content)?;

        debug!(
            domains = recommendations.ilp_recommendations.len(),
            "ILP recommendations generated"
        );

        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockChatProvider;

    const ILP_RESPONSE: &str = r#"{
        "ilpRecommendations": {
            "CELD": {"primary": "[10231] Student Leadership Training Series", "alternatives": [], "reasoning": "r"},
            "IED": {"primary": "[20315] Startup Bootcamp: From Idea to Pitch", "alternatives": [], "reasoning": "r"},
            "SEW": {"primary": "[30411] Mindfulness and Stress Management Workshop", "alternatives": [], "reasoning": "r"},
            "PFW": {"primary": "[40509] Yoga for Focus and Recovery", "alternatives": [], "reasoning": "r"},
            "AES": {"primary": "[50601] Watercolour Sketching on Campus", "alternatives": [], "reasoning": "r"},
            "RE": {"primary": "[60708] Quiet Floor Study Circles", "alternatives": [], "reasoning": "r"}
        },
        "overallTheme": "Growth through quiet mastery"
    }"#;

    #[tokio::test]
    async fn returns_recommendations_for_all_domains() {
        let provider = Arc::new(MockChatProvider::new().with_response(ILP_RESPONSE));
        let handler = IlpRecommendationHandler::new(provider.clone());

        let result = handler.handle(&IlpStudentProfile::default()).await.unwrap();
        assert_eq!(result.ilp_recommendations.len(), 6);
        assert_eq!(
            result.overall_theme.as_deref(),
            Some("Growth through quiet mastery")
        );
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn prose_response_is_an_extraction_error() {
        let provider = Arc::new(MockChatProvider::new().with_response("I cannot produce JSON."));
        let handler = IlpRecommendationHandler::new(provider);

        let err = handler
            .handle(&IlpStudentProfile::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Extraction(_)));
    }
}
