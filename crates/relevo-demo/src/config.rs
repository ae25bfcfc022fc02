use std::str::FromStr;
use std::time::Duration;

use relevo_chat::{COMMAND_MODELS, ChatProviderConfig, CohereChatConfig};
use relevo_rerank::{RerankEndpointConfig, RerankProviderConfig, RerankServiceConfig};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name}={value:?} is invalid: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoMode {
    Quickstart,
    Greeting,
    Documents,
    Models,
    All,
}

impl FromStr for DemoMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quickstart" => Ok(Self::Quickstart),
            "greeting" => Ok(Self::Greeting),
            "documents" | "docs" => Ok(Self::Documents),
            "models" => Ok(Self::Models),
            "all" => Ok(Self::All),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub rerank: RerankProviderConfig,
    pub chat: ChatProviderConfig,
    pub service: RerankServiceConfig,
    pub chat_models: Vec<String>,
    pub top_n_docs: usize,
    /// `None` ranks every model response.
    pub top_n_models: Option<usize>,
    pub mode: DemoMode,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from `get`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| get(name).filter(|v| !v.trim().is_empty());

        let cohere_key = var("COHERE_API_KEY").ok_or(ConfigError::Missing("COHERE_API_KEY"))?;
        let timeout = var("RELEVO_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| Duration::from_secs(secs.clamp(1, 600)));

        let provider = var("RELEVO_RERANK_PROVIDER")
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_else(|| "cohere".to_string());
        let mut rerank = match provider.as_str() {
            "cohere" => {
                let key = var("RELEVO_RERANK_API_KEY").unwrap_or_else(|| cohere_key.clone());
                RerankProviderConfig::Cohere(RerankEndpointConfig::cohere(key))
            }
            "jina" => {
                let key = var("RELEVO_RERANK_API_KEY")
                    .or_else(|| var("JINA_API_KEY"))
                    .ok_or(ConfigError::Missing("RELEVO_RERANK_API_KEY/JINA_API_KEY"))?;
                RerankProviderConfig::Jina(RerankEndpointConfig::jina(key))
            }
            _ => {
                return Err(ConfigError::Invalid {
                    name: "RELEVO_RERANK_PROVIDER",
                    value: provider,
                    reason: "use cohere or jina",
                });
            }
        };
        let endpoint = rerank.endpoint_mut();
        if let Some(model) = var("RELEVO_RERANK_MODEL") {
            endpoint.model = model;
        }
        if let Some(url) = var("RELEVO_RERANK_ENDPOINT") {
            endpoint.endpoint = url;
        }
        if let Some(t) = timeout {
            endpoint.timeout = t;
        }

        let mut chat = CohereChatConfig::new(cohere_key);
        if let Some(endpoint) = var("RELEVO_CHAT_ENDPOINT") {
            chat.endpoint = endpoint;
        }
        if let Some(t) = timeout {
            chat.timeout = t;
        }

        let chat_models = var("RELEVO_CHAT_MODELS").map_or_else(
            || COMMAND_MODELS.iter().map(ToString::to_string).collect(),
            |raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
            },
        );
        if chat_models.is_empty() {
            return Err(ConfigError::Invalid {
                name: "RELEVO_CHAT_MODELS",
                value: var("RELEVO_CHAT_MODELS").unwrap_or_default(),
                reason: "no model names",
            });
        }

        let mode = match var("RELEVO_DEMO") {
            None => DemoMode::All,
            Some(raw) => raw.parse().map_err(|()| ConfigError::Invalid {
                name: "RELEVO_DEMO",
                value: raw.clone(),
                reason: "use quickstart, greeting, documents, models or all",
            })?,
        };

        Ok(Self {
            rerank,
            chat: ChatProviderConfig::Cohere(chat),
            service: RerankServiceConfig {
                preview_chars: lookup_usize(&var, "RELEVO_PREVIEW_CHARS", 150, 1, 4096),
            },
            chat_models,
            top_n_docs: lookup_usize(&var, "RELEVO_TOP_N_DOCS", 5, 1, 1000),
            top_n_models: var("RELEVO_TOP_N_MODELS")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .map(|n| n.clamp(1, 1000)),
            mode,
        })
    }
}

fn lookup_usize(
    var: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: usize,
    min: usize,
    max: usize,
) -> usize {
    var(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}
