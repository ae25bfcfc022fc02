use std::time::Duration;

pub const DEFAULT_CHAT_MODEL: &str = "command-a-03-2025";

/// Cohere chat models queried, in order, when comparing responses.
pub const COMMAND_MODELS: [&str; 5] = [
    "command-a-03-2025",
    "command-r7b-12-2024",
    "command-r-plus-08-2024",
    "command-r-08-2024",
    "command",
];

#[derive(Debug, Clone)]
pub struct CohereChatConfig {
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl CohereChatConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: "https://api.cohere.com/v2/chat".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ChatProviderConfig {
    Cohere(CohereChatConfig),
}
