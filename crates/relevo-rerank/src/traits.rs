use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{RerankRequest, RerankResponse};

/// A remote service that scores documents against a query.
///
/// Implementations return at most `top_n` items, each naming a position in
/// `request.documents`, ordered by descending score.
#[async_trait]
pub trait RerankProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn rerank(&self, request: RerankRequest) -> Result<RerankResponse, ProviderError>;
}
