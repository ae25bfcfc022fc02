use std::time::Duration;

pub const DEFAULT_RERANK_TIMEOUT: Duration = Duration::from_secs(8);

/// Where and how to reach one hosted rerank endpoint.
#[derive(Debug, Clone)]
pub struct RerankEndpointConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl RerankEndpointConfig {
    /// Cohere v2 rerank with `rerank-v3.5`.
    pub fn cohere(api_key: impl Into<String>) -> Self {
        Self::hosted(api_key, "rerank-v3.5", "https://api.cohere.com/v2/rerank")
    }

    pub fn jina(api_key: impl Into<String>) -> Self {
        Self::hosted(
            api_key,
            "jina-reranker-v2-base-multilingual",
            "https://api.jina.ai/v1/rerank",
        )
    }

    fn hosted(api_key: impl Into<String>, model: &str, endpoint: &str) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.to_string(),
            endpoint: endpoint.to_string(),
            timeout: DEFAULT_RERANK_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub enum RerankProviderConfig {
    Cohere(RerankEndpointConfig),
    Jina(RerankEndpointConfig),
}

impl RerankProviderConfig {
    pub fn endpoint(&self) -> &RerankEndpointConfig {
        match self {
            Self::Cohere(c) | Self::Jina(c) => c,
        }
    }

    pub fn endpoint_mut(&mut self) -> &mut RerankEndpointConfig {
        match self {
            Self::Cohere(c) | Self::Jina(c) => c,
        }
    }

    pub fn model(&self) -> &str {
        &self.endpoint().model
    }
}

/// Knobs of [`crate::RerankService`] that do not belong to any one provider.
#[derive(Debug, Clone)]
pub struct RerankServiceConfig {
    /// Maximum number of characters kept in [`crate::RankedResult::snippet`].
    pub preview_chars: usize,
}

impl Default for RerankServiceConfig {
    fn default() -> Self {
        Self { preview_chars: 150 }
    }
}
