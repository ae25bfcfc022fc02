pub mod cohere;
pub mod jina;

pub use cohere::CohereRerankProvider;
pub use jina::JinaRerankProvider;

use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// Turns a non-2xx reply into [`ProviderError::Api`] and decodes the rest.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    res: reqwest::Response,
) -> Result<T, ProviderError> {
    if !res.status().is_success() {
        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();
        tracing::warn!(status, "rerank provider rejected request");
        return Err(ProviderError::Api { status, body });
    }
    let bytes = res.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
