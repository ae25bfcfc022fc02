use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::RerankEndpointConfig;
use crate::error::ProviderError;
use crate::providers::decode_json;
use crate::traits::RerankProvider;
use crate::types::{RerankItem, RerankRequest, RerankResponse};

#[derive(Clone)]
pub struct CohereRerankProvider {
    config: RerankEndpointConfig,
    client: Client,
}

impl CohereRerankProvider {
    pub fn new(config: RerankEndpointConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::Config("cohere api key is empty".to_string()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl RerankProvider for CohereRerankProvider {
    fn name(&self) -> &'static str {
        "cohere"
    }

    async fn rerank(&self, request: RerankRequest) -> Result<RerankResponse, ProviderError> {
        if request.documents.is_empty() {
            return Err(ProviderError::Config(
                "rerank documents is empty".to_string(),
            ));
        }

        let payload = CohereRerankRequest {
            model: &self.config.model,
            query: &request.query,
            top_n: request.top_n.unwrap_or(request.documents.len()),
            documents: &request.documents,
        };
        tracing::debug!(
            model = %self.config.model,
            documents = payload.documents.len(),
            top_n = payload.top_n,
            "cohere rerank request"
        );

        let res = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let parsed: CohereRerankResponse = decode_json(res).await?;
        if parsed.results.is_empty() {
            return Err(ProviderError::InvalidResponse(
                "cohere rerank returned empty results".to_string(),
            ));
        }

        let items = parsed
            .results
            .into_iter()
            .map(|it| RerankItem {
                index: it.index,
                score: it.score,
            })
            .collect();

        Ok(RerankResponse {
            provider: self.name().to_string(),
            model: self.config.model.clone(),
            items,
        })
    }
}

#[derive(Debug, Serialize)]
struct CohereRerankRequest<'a> {
    model: &'a str,
    query: &'a str,
    documents: &'a [String],
    top_n: usize,
}

#[derive(Debug, Deserialize)]
struct CohereRerankResponse {
    results: Vec<CohereRerankItem>,
}

#[derive(Debug, Deserialize)]
struct CohereRerankItem {
    index: usize,
    #[serde(alias = "relevance_score", alias = "score")]
    score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cohere_response_score_aliases_parse() {
        let v2 = r#"{"id":"x","results":[{"index":3,"relevance_score":0.999},{"index":0,"relevance_score":0.04}],"meta":{"billed_units":{"search_units":1}}}"#;
        let p: CohereRerankResponse = serde_json::from_str(v2).expect("parse cohere v2");
        assert_eq!(p.results.len(), 2);
        assert_eq!(p.results[0].index, 3);
        assert!((p.results[0].score - 0.999).abs() < 1e-6);

        let legacy = r#"{"results":[{"index":1,"score":0.77}]}"#;
        let p: CohereRerankResponse = serde_json::from_str(legacy).expect("parse legacy");
        assert_eq!(p.results[0].index, 1);
        assert!((p.results[0].score - 0.77).abs() < 1e-6);
    }

    #[test]
    fn request_sends_documents_as_plain_strings() {
        let docs = vec!["a".to_string(), "b".to_string()];
        let body = serde_json::to_value(CohereRerankRequest {
            model: "rerank-v3.5",
            query: "q",
            documents: &docs,
            top_n: 1,
        })
        .expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "model": "rerank-v3.5",
                "query": "q",
                "documents": ["a", "b"],
                "top_n": 1,
            })
        );
    }

    #[test]
    fn blank_api_key_is_a_config_error() {
        let err = CohereRerankProvider::new(RerankEndpointConfig::cohere("  "))
            .err()
            .expect("blank key rejected");
        assert!(matches!(err, ProviderError::Config(_)));
    }
}
