use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::CohereChatConfig;
use crate::error::ProviderError;
use crate::traits::ChatProvider;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

#[derive(Clone)]
pub struct CohereChatProvider {
    config: CohereChatConfig,
    client: Client,
}

impl CohereChatProvider {
    pub fn new(config: CohereChatConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::Config("cohere api key is empty".to_string()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl ChatProvider for CohereChatProvider {
    fn name(&self) -> &'static str {
        "cohere"
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        if request.messages.is_empty() {
            return Err(ProviderError::Config("chat messages is empty".to_string()));
        }

        let payload = CohereChatRequest {
            model: &request.model,
            messages: &request.messages,
        };
        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            "cohere chat request"
        );

        let res = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(status, model = %request.model, "cohere chat rejected request");
            return Err(ProviderError::Api { status, body });
        }

        let parsed: CohereChatResponse = res.json().await?;
        let text = parsed
            .message
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| {
                ProviderError::InvalidResponse(format!(
                    "cohere chat reply from {} has no text content",
                    request.model
                ))
            })?;

        Ok(ChatResponse {
            provider: self.name().to_string(),
            model: request.model,
            text,
            finish_reason: parsed.finish_reason,
        })
    }
}

#[derive(Debug, Serialize)]
struct CohereChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct CohereChatResponse {
    #[serde(default)]
    finish_reason: Option<String>,
    message: CohereAssistantMessage,
}

#[derive(Debug, Deserialize)]
struct CohereAssistantMessage {
    #[serde(default)]
    content: Vec<CohereContentBlock>,
}

#[derive(Debug, Deserialize)]
struct CohereContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_roles_in_lowercase() {
        let messages = vec![ChatMessage::user("Hello, how are you?")];
        let body = serde_json::to_value(CohereChatRequest {
            model: "command-a-03-2025",
            messages: &messages,
        })
        .expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "model": "command-a-03-2025",
                "messages": [{"role": "user", "content": "Hello, how are you?"}],
            })
        );
    }

    #[test]
    fn response_text_block_parses() {
        let raw = r#"{
            "id": "c1",
            "finish_reason": "COMPLETE",
            "message": {
                "role": "assistant",
                "content": [{"type": "text", "text": "I'm doing well."}]
            },
            "usage": {"tokens": {"input_tokens": 5, "output_tokens": 4}}
        }"#;
        let parsed: CohereChatResponse = serde_json::from_str(raw).expect("parse");
        assert_eq!(parsed.finish_reason.as_deref(), Some("COMPLETE"));
        assert_eq!(parsed.message.content.len(), 1);
        assert_eq!(parsed.message.content[0].kind, "text");
        assert_eq!(parsed.message.content[0].text.as_deref(), Some("I'm doing well."));
    }

    #[test]
    fn tool_only_reply_has_no_text() {
        let raw = r#"{"message":{"role":"assistant","tool_calls":[]}}"#;
        let parsed: CohereChatResponse = serde_json::from_str(raw).expect("parse");
        assert!(parsed.message.content.is_empty());
    }
}
