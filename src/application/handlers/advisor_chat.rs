//! Advisor chat pipeline.

use std::sync::Arc;

use tracing::debug;

use crate::application::error::AnalysisError;
use crate::application::prompts::advisor_system_prompt;
use crate::domain::session::{AdvisorTurn, AnalysisReport, Speaker};
use crate::ports::{ChatProvider, CompletionRequest, Message, MessageRole};

const CHAT_TEMPERATURE: f32 = 0.8;
const CHAT_MAX_TOKENS: u32 = 1000;

/// Answers student questions in the context of their finished report.
pub struct AdvisorChatHandler {
    provider: Arc<dyn ChatProvider>,
}

impl AdvisorChatHandler {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Sends one user message with the full report as system context.
    ///
    /// The history's opening advisor greeting is a canned UI message, not
    /// model output, so it is dropped from the conversation sent upstream.
    pub async fn handle(
        &self,
        report: &AnalysisReport,
        history: &[AdvisorTurn],
        user_message: &str,
    ) -> Result<String, AnalysisError> {
        let mut request = CompletionRequest::new()
            .with_system_prompt(advisor_system_prompt(report))
            .with_temperature(CHAT_TEMPERATURE)
            .with_max_tokens(CHAT_MAX_TOKENS);

        for turn in skip_opening_greeting(history) {
            request.messages.push(match turn.speaker {
                Speaker::Student => Message::user(&turn.content),
                Speaker::Advisor => Message::assistant(&turn.content),
            });
        }
        request = request.with_message(MessageRole::User, user_message);

        let response = self.provider.complete(request).await?;

        debug!(
            history_turns = history.len(),
            reply_chars = response.content.len(),
            "advisor reply received"
        );

        Ok(response.content)
    }
}

fn skip_opening_greeting(history: &[AdvisorTurn]) -> &[AdvisorTurn] {
    match history.first() {
        Some(turn) if turn.speaker == Speaker::Advisor => &history[1..],
        _ => history,
    }
}
