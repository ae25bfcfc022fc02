use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// A one-turn conversation holding a single user message.
    pub fn single(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub provider: String,
    pub model: String,
    pub text: String,
    pub finish_reason: Option<String>,
}

/// Text produced by one model for a shared prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResponse {
    pub model: String,
    pub text: String,
}
