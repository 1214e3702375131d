//! Quick-assessment analysis pipeline.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::application::error::AnalysisError;
use crate::application::prompts::{quick_analysis_prompt, IlpStudentProfile};
use crate::domain::assessment::{QuickAssessmentAnswers, TraitProfile};
use crate::domain::extraction::extract_json;
use crate::domain::recommendation::{IlpRecommendations, QuickAnalysis};
use crate::ports::{ChatProvider, CompletionRequest, MessageRole};

use super::ilp_recommendation::IlpRecommendationHandler;

const QUICK_TEMPERATURE: f32 = 0.7;
const QUICK_MAX_TOKENS: u32 = 4000;

/// Output of the quick pipeline.
#[derive(Debug, Clone)]
pub struct QuickReport {
    pub analysis: QuickAnalysis,
    /// Absent when the chained ILP call failed; the analysis itself survives.
    pub ilp: Option<IlpRecommendations>,
    pub generated_at: DateTime<Utc>,
}

/// Runs the quick analysis and chains the ILP recommendation call.
pub struct QuickAnalysisHandler {
    provider: Arc<dyn ChatProvider>,
    ilp: IlpRecommendationHandler,
}

impl QuickAnalysisHandler {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        let ilp = IlpRecommendationHandler::new(provider.clone());
        Self { provider, ilp }
    }

    pub async fn handle(
        &self,
        answers: &QuickAssessmentAnswers,
    ) -> Result<QuickReport, AnalysisError> {
        let prompt = quick_analysis_prompt(answers);

        let request = CompletionRequest::new()
            .with_message(MessageRole::User, prompt)
            .with_temperature(QUICK_TEMPERATURE)
            .with_max_tokens(QUICK_MAX_TOKENS);

        let response = self.provider.complete(request).await?;
        let analysis: QuickAnalysis = extract_json(&response.content)?;

        info!(
            skills = analysis.skills.len(),
            career_paths = analysis.career_paths.len(),
            "quick analysis extracted"
        );

        // ILP failure is non-fatal; the analysis is still worth returning.
        let ilp = match self.ilp.handle(&self.ilp_profile(answers, &analysis)).await {
            Ok(recommendations) => Some(recommendations),
            Err(error) => {
                warn!(%error, "ILP recommendation chain failed, continuing without it");
                None
            }
        };

        Ok(QuickReport {
            analysis,
            ilp,
            generated_at: Utc::now(),
        })
    }

    fn ilp_profile(
        &self,
        answers: &QuickAssessmentAnswers,
        analysis: &QuickAnalysis,
    ) -> IlpStudentProfile {
        let traits = TraitProfile::from_answers(answers);
        IlpStudentProfile {
            big_five: Some(traits.big_five),
            riasec: Some(traits.riasec),
            clifton_strengths: Vec::new(),
            career_interests: analysis
                .career_paths
                .iter()
                .map(|path| path.name.clone())
                .collect(),
            user_description: Some(answers.about_yourself.clone()),
            undergraduate_degree: answers.degree_for_prompt().map(str::to_string),
        }
    }
}
