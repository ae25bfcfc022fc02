use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{ChatRequest, ChatResponse};

#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError>;
}
