//! Comprehensive (uploaded-test) analysis pipeline.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::application::error::AnalysisError;
use crate::application::prompts::{comprehensive_analysis_prompt, IlpStudentProfile};
use crate::domain::assessment::{MajorSatisfaction, UploadedTests};
use crate::domain::extraction::extract_json;
use crate::domain::recommendation::{ComprehensiveAnalysis, IlpRecommendations};
use crate::ports::{ChatProvider, CompletionRequest, MessageRole};

use super::ilp_recommendation::IlpRecommendationHandler;

const COMPREHENSIVE_TEMPERATURE: f32 = 0.7;
const COMPREHENSIVE_MAX_TOKENS: u32 = 6000;

/// Free-text and education context accompanying the uploaded tests.
#[derive(Debug, Clone, Default)]
pub struct ComprehensiveContext {
    pub about_yourself: String,
    /// Absent when the student opted out of considering their major.
    pub degree: Option<String>,
    pub satisfaction: MajorSatisfaction,
}

/// Output of the comprehensive pipeline.
#[derive(Debug, Clone)]
pub struct ComprehensiveReport {
    pub analysis: ComprehensiveAnalysis,
    /// Absent when the chained ILP call failed; the analysis itself survives.
    pub ilp: Option<IlpRecommendations>,
    pub generated_at: DateTime<Utc>,
}

/// Runs the comprehensive analysis and chains the ILP recommendation call.
pub struct ComprehensiveAnalysisHandler {
    provider: Arc<dyn ChatProvider>,
    ilp: IlpRecommendationHandler,
}

impl ComprehensiveAnalysisHandler {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        let ilp = IlpRecommendationHandler::new(provider.clone());
        Self { provider, ilp }
    }

    pub async fn handle(
        &self,
        uploads: &UploadedTests,
        context: &ComprehensiveContext,
    ) -> Result<ComprehensiveReport, AnalysisError> {
        let prompt = comprehensive_analysis_prompt(
            uploads,
            &context.about_yourself,
            context.degree.as_deref(),
            context.satisfaction,
        );

        let request = CompletionRequest::new()
            .with_message(MessageRole::User, prompt)
            .with_temperature(COMPREHENSIVE_TEMPERATURE)
            .with_max_tokens(COMPREHENSIVE_MAX_TOKENS);

        let response = self.provider.complete(request).await?;
        let mut analysis: ComprehensiveAnalysis = extract_json(&response.content)?;

        if analysis.fill_default_career_paths(context.degree.as_deref()) {
            warn!(
                career_paths = analysis.career_paths.len(),
                "model returned too few career paths, padded with defaults"
            );
        }

        info!(
            tests = uploads.len(),
            skills = analysis.skills.len(),
            career_paths = analysis.career_paths.len(),
            "comprehensive analysis extracted"
        );

        // ILP failure is non-fatal; the analysis is still worth returning.
        let ilp = match self.ilp.handle(&self.ilp_profile(context, &analysis)).await {
            Ok(recommendations) => Some(recommendations),
            Err(error) => {
                warn!(%error, "ILP recommendation chain failed, continuing without it");
                None
            }
        };

        Ok(ComprehensiveReport {
            analysis,
            ilp,
            generated_at: Utc::now(),
        })
    }

    fn ilp_profile(
        &self,
        context: &ComprehensiveContext,
        analysis: &ComprehensiveAnalysis,
    ) -> IlpStudentProfile {
        IlpStudentProfile {
            big_five: None,
            riasec: None,
            clifton_strengths: Vec::new(),
            career_interests: analysis
                .career_paths
                .iter()
                .map(|path| path.name.clone())
                .take(5)
                .collect(),
            user_description: Some(context.about_yourself.clone()),
            undergraduate_degree: context.degree.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockChatProvider;
    use crate::domain::assessment::{TestKind, UploadedTest};
    use crate::ports::ChatError;

    fn uploads() -> UploadedTests {
        let mut uploads = UploadedTests::new();
        uploads.insert(UploadedTest::new(
            TestKind::Big5,
            "Extraversion: 30th percentile, Conscientiousness: 82nd percentile",
        ));
        uploads
    }

    const SPARSE_ANALYSIS: &str = r#"{
        "skills": [{"name": "SQL", "description": "d", "match": 80}],
        "careerPaths": [{
            "name": "Research Assistant",
            "description": "d",
            "match": 77,
            "personalityAlignment": "p",
            "skillsNeeded": "s"
        }],
        "insights": "i"
    }"#;

    #[tokio::test]
    async fn pads_career_paths_when_model_returns_one() {
        let provider = Arc::new(
            MockChatProvider::new()
                .with_response(SPARSE_ANALYSIS)
                .with_error(ChatError::unavailable("skip ilp")),
        );
        let handler = ComprehensiveAnalysisHandler::new(provider);

        let context = ComprehensiveContext {
            about_yourself: String::new(),
            degree: Some("BSc Data Science".to_string()),
            satisfaction: MajorSatisfaction::new(5).unwrap(),
        };
        let report = handler.handle(&uploads(), &context).await.unwrap();

        assert!(report.analysis.used_default_career_paths);
        assert!(report.analysis.career_paths.len() >= 2);
        assert!(report
            .analysis
            .career_paths
            .iter()
            .any(|p| p.name == "Data Analyst"));
    }

    #[tokio::test]
    async fn degree_and_satisfaction_reach_the_prompt() {
        let provider = Arc::new(
            MockChatProvider::new()
                .with_response(SPARSE_ANALYSIS)
                .with_error(ChatError::unavailable("skip ilp")),
        );
        let handler = ComprehensiveAnalysisHandler::new(provider.clone());

        let context = ComprehensiveContext {
            about_yourself: "Quiet, detail oriented".to_string(),
            degree: Some("Philosophy".to_string()),
            satisfaction: MajorSatisfaction::new(1).unwrap(),
        };
        handler.handle(&uploads(), &context).await.unwrap();

        let prompt = &provider.recorded_calls()[0].messages[0].content;
        assert!(prompt.contains("Studying: Philosophy"));
        assert!(prompt.contains("Really dislikes/hates their major"));
        assert!(prompt.contains("Quiet, detail oriented"));
    }
}
