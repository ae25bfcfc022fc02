use std::io::{self, Write};

use relevo_chat::{ChatInvoker, DEFAULT_CHAT_MODEL, build_chat_provider};
use relevo_rerank::{RerankError, RerankService, build_rerank_provider};
use thiserror::Error;

use crate::config::{DemoConfig, DemoMode};
use crate::corpus::{CAPITAL_DOCS, CAPITAL_QUERY, CLIMATE_DOCS, CLIMATE_QUERY, GREETING};
use crate::render;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("rerank provider: {0}")]
    RerankSetup(relevo_rerank::ProviderError),

    #[error("chat provider: {0}")]
    ChatSetup(relevo_chat::ProviderError),

    #[error("rerank failed: {0}")]
    Rerank(#[from] RerankError),

    #[error("chat failed: {0}")]
    Chat(#[from] relevo_chat::ProviderError),

    #[error("console output failed: {0}")]
    Io(#[from] io::Error),
}

/// Console walkthrough of chat completion and relevance reranking.
pub struct Demo {
    rerank: RerankService,
    chat: ChatInvoker,
    chat_models: Vec<String>,
    top_n_docs: usize,
    top_n_models: Option<usize>,
}

impl Demo {
    pub fn new(
        rerank: RerankService,
        chat: ChatInvoker,
        chat_models: Vec<String>,
        top_n_docs: usize,
        top_n_models: Option<usize>,
    ) -> Self {
        Self {
            rerank,
            chat,
            chat_models,
            top_n_docs,
            top_n_models,
        }
    }

    pub fn from_config(config: &DemoConfig) -> Result<Self, DemoError> {
        let rerank_provider =
            build_rerank_provider(config.rerank.clone()).map_err(DemoError::RerankSetup)?;
        let chat_provider =
            build_chat_provider(config.chat.clone()).map_err(DemoError::ChatSetup)?;
        tracing::info!(
            rerank = rerank_provider.name(),
            rerank_model = config.rerank.model(),
            chat = chat_provider.name(),
            models = config.chat_models.len(),
            "providers ready"
        );

        Ok(Self::new(
            RerankService::with_config(rerank_provider, config.service.clone()),
            ChatInvoker::new(chat_provider),
            config.chat_models.clone(),
            config.top_n_docs,
            config.top_n_models,
        ))
    }

    pub async fn run(&self, mode: DemoMode, out: &mut impl Write) -> Result<(), DemoError> {
        match mode {
            DemoMode::Quickstart => self.quickstart(out).await?,
            DemoMode::Greeting => self.greeting(out).await?,
            DemoMode::Documents => self.documents(out).await?,
            DemoMode::Models => self.models(out).await?,
            DemoMode::All => {
                self.quickstart(out).await?;
                self.greeting(out).await?;
                self.documents(out).await?;
                self.models(out).await?;
            }
        }
        render::farewell(out)?;
        Ok(())
    }

    /// Ranks every capital-city document against a single question.
    pub async fn quickstart(&self, out: &mut impl Write) -> Result<(), DemoError> {
        render::heading(out, "QUICKSTART RERANK")?;
        render::query(out, CAPITAL_QUERY)?;
        let results = self
            .rerank
            .rerank(CAPITAL_QUERY, &CAPITAL_DOCS, CAPITAL_DOCS.len())
            .await?;
        render::ranked_results(out, &results)?;
        Ok(())
    }

    pub async fn greeting(&self, out: &mut impl Write) -> Result<(), DemoError> {
        render::heading(out, "CHAT DEMO")?;
        let reply = self.chat.complete(DEFAULT_CHAT_MODEL, GREETING).await?;
        writeln!(out, "{DEFAULT_CHAT_MODEL}: {reply}")?;
        Ok(())
    }

    pub async fn documents(&self, out: &mut impl Write) -> Result<(), DemoError> {
        render::heading(out, "DOCUMENT RERANKING DEMO")?;
        render::query(out, CLIMATE_QUERY)?;
        writeln!(
            out,
            "Reranking {} documents, showing top {} results:\n",
            CLIMATE_DOCS.len(),
            self.top_n_docs
        )?;
        let results = self
            .rerank
            .rerank(CLIMATE_QUERY, &CLIMATE_DOCS, self.top_n_docs)
            .await?;
        render::ranked_results(out, &results)?;
        Ok(())
    }

    /// Asks every roster model the climate question, then ranks their answers.
    /// Without a configured count every answer is ranked.
    pub async fn models(&self, out: &mut impl Write) -> Result<(), DemoError> {
        render::heading(out, "MODEL RESPONSE RERANKING DEMO")?;
        let responses = self
            .chat
            .complete_all(&self.chat_models, CLIMATE_QUERY)
            .await?;

        render::query(out, CLIMATE_QUERY)?;
        for response in &responses {
            render::model_response(out, &response.model, &response.text)?;
        }

        let top_n = self.top_n_models.unwrap_or(responses.len());
        writeln!(
            out,
            "\nReranking model responses, showing top {top_n} results:\n"
        )?;
        let texts: Vec<&str> = responses.iter().map(|r| r.text.as_str()).collect();
        let labels: Vec<&str> = responses.iter().map(|r| r.model.as_str()).collect();
        let results = self
            .rerank
            .rerank_labeled(CLIMATE_QUERY, &texts, &labels, top_n)
            .await?;
        render::ranked_results(out, &results)?;
        Ok(())
    }
}
