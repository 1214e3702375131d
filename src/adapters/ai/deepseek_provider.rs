//! DeepSeek Provider - Implementation of ChatProvider for the DeepSeek API.
//!
//! Issues non-streaming chat completions against
//! `{base_url}/chat/completions` with bearer authentication. Requests are
//! never retried here; every retry is an explicit caller action.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config::AiConfig;
use crate::ports::{ChatError, ChatProvider, CompletionRequest, CompletionResponse, MessageRole};

/// DeepSeek API provider implementation.
#[derive(Debug)]
pub struct DeepSeekProvider {
    api_key: Secret<String>,
    model: String,
    base_url: String,
    timeout_secs: u64,
    client: Client,
}

impl DeepSeekProvider {
    /// Creates a provider from a validated configuration.
    ///
    /// Fails with [`ChatError::AuthenticationFailed`] when the config carries
    /// no API key, so a missing credential surfaces at construction rather
    /// than on the first request.
    pub fn new(config: &AiConfig) -> Result<Self, ChatError> {
        let api_key = config
            .api_key
            .as_ref()
            .filter(|k| !k.expose_secret().is_empty())
            .cloned()
            .ok_or(ChatError::AuthenticationFailed)?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ChatError::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Converts our request to the DeepSeek wire format.
    fn to_wire_request(&self, request: &CompletionRequest) -> WireRequest {
        let mut messages = Vec::new();

        if let Some(ref prompt) = request.system_prompt {
            messages.push(WireMessage {
                role: "system".to_string(),
                content: prompt.clone(),
            });
        }

        for msg in &request.messages {
            messages.push(WireMessage {
                role: match msg.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                }
                .to_string(),
                content: msg.content.clone(),
            });
        }

        WireRequest {
            model: self.model.clone(),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }

    /// Sends a request and maps transport failures.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, ChatError> {
        let wire_request = self.to_wire_request(request);

        self.client
            .post(self.completions_url())
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout {
                        timeout_secs: self.timeout_secs as u32,
                    }
                } else if e.is_connect() {
                    ChatError::network(format!("Connection failed: {}", e))
                } else {
                    ChatError::network(e.to_string())
                }
            })
    }

    /// Maps a non-success API status to a typed error.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ChatError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(ChatError::AuthenticationFailed),
            429 => Err(ChatError::RateLimited {
                retry_after_secs: Self::parse_retry_after(&error_body),
            }),
            400 => Err(ChatError::InvalidRequest(error_body)),
            500..=599 => Err(ChatError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(ChatError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses a retry hint out of the error body, defaulting to 30s.
    fn parse_retry_after(error_body: &str) -> u32 {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(s) = parsed
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                if let Some(idx) = s.find("try again in ") {
                    let rest = &s[idx + 13..];
                    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
                    if let Ok(secs) = digits.parse::<u32>() {
                        return secs;
                    }
                }
            }
        }
        30
    }

    /// Parses the response body into a completion.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, ChatError> {
        let response = self.handle_response_status(response).await?;

        let wire_response: WireResponse = response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = wire_response
            .choices
            .into_iter()
            .next()
            .ok_or(ChatError::EmptyResponse)?;

        if choice.message.content.is_empty() {
            return Err(ChatError::EmptyResponse);
        }

        Ok(CompletionResponse {
            content: choice.message.content,
            model: wire_response.model,
        })
    }
}

#[async_trait]
impl ChatProvider for DeepSeekProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ChatError> {
        tracing::debug!(
            model = %self.model,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let response = self.send_request(&request).await?;
        let completion = self.parse_response(response).await?;

        tracing::debug!(chars = completion.content.len(), "completion received");
        Ok(completion)
    }
}

// ----- DeepSeek wire types -----

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    model: String,
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Message;

    fn provider() -> DeepSeekProvider {
        DeepSeekProvider::new(&AiConfig::new("sk-test")).unwrap()
    }

    #[test]
    fn construction_requires_api_key() {
        let err = DeepSeekProvider::new(&AiConfig::default()).unwrap_err();
        assert!(matches!(err, ChatError::AuthenticationFailed));
    }

    #[test]
    fn completions_url_joins_base() {
        assert_eq!(
            provider().completions_url(),
            "https://api.deepseek.com/chat/completions"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let config = AiConfig {
            base_url: "https://api.deepseek.com/".to_string(),
            ..AiConfig::new("sk-test")
        };
        let provider = DeepSeekProvider::new(&config).unwrap();
        assert_eq!(
            provider.completions_url(),
            "https://api.deepseek.com/chat/completions"
        );
    }

    #[test]
    fn system_prompt_becomes_first_wire_message() {
        let request = CompletionRequest::new()
            .with_system_prompt("advisor rules")
            .with_message(MessageRole::User, "hi");

        let wire = provider().to_wire_request(&request);
        assert_eq!(wire.messages.len(), 2);
        assert_eq!(wire.messages[0].role, "system");
        assert_eq!(wire.messages[0].content, "advisor rules");
        assert_eq!(wire.messages[1].role, "user");
    }

    #[test]
    fn wire_request_carries_model_and_knobs() {
        let request = CompletionRequest {
            messages: vec![Message::user("q")],
            system_prompt: None,
            max_tokens: Some(3000),
            temperature: Some(0.7),
        };

        let wire = provider().to_wire_request(&request);
        assert_eq!(wire.model, "deepseek-chat");
        assert_eq!(wire.max_tokens, Some(3000));
        assert_eq!(wire.temperature, Some(0.7));
    }

    #[test]
    fn parse_retry_after_from_message() {
        let error = r#"{"error":{"message":"Rate limit exceeded. Please try again in 45 seconds."}}"#;
        assert_eq!(DeepSeekProvider::parse_retry_after(error), 45);
    }

    #[test]
    fn parse_retry_after_default() {
        let error = r#"{"error":{"message":"Something went wrong"}}"#;
        assert_eq!(DeepSeekProvider::parse_retry_after(error), 30);
    }
}
