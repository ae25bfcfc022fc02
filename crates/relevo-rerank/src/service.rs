use std::sync::Arc;

use crate::config::RerankServiceConfig;
use crate::error::{ProviderError, RerankError};
use crate::traits::RerankProvider;
use crate::types::{RankedResult, RerankItem, RerankRequest};

/// Orders candidate texts by relevance to a query using a remote provider.
///
/// Each call issues at most one provider request. The provider is trusted to
/// rank, but its answer is checked: indices must be in range and unique, the
/// count must equal the (clamped) top-N, scores must lie in `[0, 1]` and must
/// not increase. Anything else is reported as
/// [`ProviderError::InvalidResponse`].
#[derive(Clone)]
pub struct RerankService {
    provider: Arc<dyn RerankProvider>,
    config: RerankServiceConfig,
}

impl RerankService {
    pub fn new(provider: Arc<dyn RerankProvider>) -> Self {
        Self::with_config(provider, RerankServiceConfig::default())
    }

    pub fn with_config(provider: Arc<dyn RerankProvider>, config: RerankServiceConfig) -> Self {
        Self { provider, config }
    }

    /// Ranks `candidates` against `query` and keeps the best `top_n`.
    ///
    /// `top_n` larger than the candidate count is clamped. An empty candidate
    /// list returns an empty result without contacting the provider.
    pub async fn rerank<S>(
        &self,
        query: &str,
        candidates: &[S],
        top_n: usize,
    ) -> Result<Vec<RankedResult>, RerankError>
    where
        S: AsRef<str> + Sync,
    {
        self.rank(query, candidates, None::<&[&str]>, top_n).await
    }

    /// Like [`Self::rerank`], attaching `labels[i]` to the result for
    /// candidate `i`. `labels` must be as long as `candidates`.
    pub async fn rerank_labeled<S, L>(
        &self,
        query: &str,
        candidates: &[S],
        labels: &[L],
        top_n: usize,
    ) -> Result<Vec<RankedResult>, RerankError>
    where
        S: AsRef<str> + Sync,
        L: AsRef<str> + Sync,
    {
        self.rank(query, candidates, Some(labels), top_n).await
    }

    async fn rank<S, L>(
        &self,
        query: &str,
        candidates: &[S],
        labels: Option<&[L]>,
        top_n: usize,
    ) -> Result<Vec<RankedResult>, RerankError>
    where
        S: AsRef<str> + Sync,
        L: AsRef<str> + Sync,
    {
        if candidates.is_empty() {
            tracing::debug!("no candidates to rerank");
            return Ok(Vec::new());
        }
        if top_n == 0 {
            return Err(RerankError::InvalidArgument(
                "top_n must be positive when candidates are given".to_string(),
            ));
        }
        if let Some(labels) = labels {
            if labels.len() != candidates.len() {
                return Err(RerankError::InvalidArgument(format!(
                    "{} labels given for {} candidates",
                    labels.len(),
                    candidates.len()
                )));
            }
        }

        let top_n = top_n.min(candidates.len());
        let request = RerankRequest {
            query: query.to_string(),
            documents: candidates.iter().map(|c| c.as_ref().to_string()).collect(),
            top_n: Some(top_n),
        };

        let response = self.provider.rerank(request).await?;
        tracing::debug!(
            provider = %response.provider,
            model = %response.model,
            candidates = candidates.len(),
            top_n,
            returned = response.items.len(),
            "rerank response"
        );

        self.collect_results(&response.items, candidates, labels, top_n)
            .map_err(|e| {
                tracing::warn!(provider = %response.provider, error = %e, "rejected rerank response");
                RerankError::Provider(e)
            })
    }

    fn collect_results<S, L>(
        &self,
        items: &[RerankItem],
        candidates: &[S],
        labels: Option<&[L]>,
        top_n: usize,
    ) -> Result<Vec<RankedResult>, ProviderError>
    where
        S: AsRef<str>,
        L: AsRef<str>,
    {
        if items.len() > top_n {
            return Err(ProviderError::InvalidResponse(format!(
                "{} results returned for top_n={top_n}",
                items.len()
            )));
        }

        let mut seen = vec![false; candidates.len()];
        let mut previous_score: Option<f32> = None;
        let mut results = Vec::with_capacity(items.len());

        for item in items {
            let text = candidates.get(item.index).ok_or_else(|| {
                ProviderError::InvalidResponse(format!(
                    "index {} out of range for {} candidates",
                    item.index,
                    candidates.len()
                ))
            })?;
            if let Some(slot) = seen.get_mut(item.index) {
                if *slot {
                    return Err(ProviderError::InvalidResponse(format!(
                        "index {} returned more than once",
                        item.index
                    )));
                }
                *slot = true;
            }
            if !(0.0..=1.0).contains(&item.score) {
                return Err(ProviderError::InvalidResponse(format!(
                    "score {} for index {} is outside [0, 1]",
                    item.score, item.index
                )));
            }
            if let Some(prev) = previous_score {
                if item.score > prev {
                    return Err(ProviderError::InvalidResponse(
                        "results are not in descending score order".to_string(),
                    ));
                }
            }
            previous_score = Some(item.score);

            let (snippet, truncated) = preview(text.as_ref(), self.config.preview_chars);
            results.push(RankedResult {
                original_index: item.index,
                relevance_score: item.score,
                label: labels
                    .and_then(|l| l.get(item.index))
                    .map(|l| l.as_ref().to_string()),
                snippet,
                truncated,
            });
        }

        if results.len() < top_n {
            return Err(ProviderError::InvalidResponse(format!(
                "{} results returned for top_n={top_n}",
                results.len()
            )));
        }

        Ok(results)
    }
}

/// Cuts `text` to at most `max_chars` characters, reporting whether
/// anything was dropped.
pub fn preview(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (text.get(..byte_idx).unwrap_or(text).to_string(), true),
        None => (text.to_string(), false),
    }
}
