use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::RerankEndpointConfig;
use crate::error::ProviderError;
use crate::providers::decode_json;
use crate::traits::RerankProvider;
use crate::types::{RerankItem, RerankRequest, RerankResponse};

#[derive(Clone)]
pub struct JinaRerankProvider {
    config: RerankEndpointConfig,
    client: Client,
}

impl JinaRerankProvider {
    pub fn new(config: RerankEndpointConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::Config("jina api key is empty".to_string()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl RerankProvider for JinaRerankProvider {
    fn name(&self) -> &'static str {
        "jina"
    }

    async fn rerank(&self, request: RerankRequest) -> Result<RerankResponse, ProviderError> {
        if request.documents.is_empty() {
            return Err(ProviderError::Config(
                "rerank documents is empty".to_string(),
            ));
        }

        let payload = JinaRerankRequest {
            model: &self.config.model,
            query: &request.query,
            top_n: request.top_n.unwrap_or(request.documents.len()),
            documents: &request.documents,
            return_documents: false,
        };
        tracing::debug!(
            model = %self.config.model,
            documents = payload.documents.len(),
            top_n = payload.top_n,
            "jina rerank request"
        );

        let res = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let parsed: JinaRerankResponse = decode_json(res).await?;
        let items = parsed
            .results
            .into_iter()
            .map(|it| RerankItem {
                index: it.index,
                score: it.relevance_score,
            })
            .collect();

        Ok(RerankResponse {
            provider: self.name().to_string(),
            model: parsed.model.unwrap_or_else(|| self.config.model.clone()),
            items,
        })
    }
}

#[derive(Debug, Serialize)]
struct JinaRerankRequest<'a> {
    model: &'a str,
    query: &'a str,
    documents: &'a [String],
    top_n: usize,
    return_documents: bool,
}

#[derive(Debug, Deserialize)]
struct JinaRerankResponse {
    #[serde(default)]
    model: Option<String>,
    results: Vec<JinaRerankItem>,
}

#[derive(Debug, Deserialize)]
struct JinaRerankItem {
    index: usize,
    relevance_score: f32,
}
