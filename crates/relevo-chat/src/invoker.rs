use std::sync::Arc;

use crate::error::ProviderError;
use crate::traits::ChatProvider;
use crate::types::{ChatRequest, ModelResponse};

/// Asks chat models for single-turn completions, one request at a time.
#[derive(Clone)]
pub struct ChatInvoker {
    provider: Arc<dyn ChatProvider>,
}

impl ChatInvoker {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    pub async fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let response = self
            .provider
            .chat(ChatRequest::single(model, prompt))
            .await?;
        tracing::debug!(
            provider = %response.provider,
            model,
            chars = response.text.chars().count(),
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            "chat completion"
        );
        Ok(response.text)
    }

    /// Sends `prompt` to every model in `models`, in order. The first failure
    /// stops the run.
    pub async fn complete_all<M>(
        &self,
        models: &[M],
        prompt: &str,
    ) -> Result<Vec<ModelResponse>, ProviderError>
    where
        M: AsRef<str> + Sync,
    {
        let mut responses = Vec::with_capacity(models.len());
        for model in models {
            let model = model.as_ref();
            let text = self.complete(model, prompt).await?;
            responses.push(ModelResponse {
                model: model.to_string(),
                text,
            });
        }
        Ok(responses)
    }
}
