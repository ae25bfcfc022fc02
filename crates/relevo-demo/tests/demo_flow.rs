use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use relevo_chat::{ChatInvoker, ChatProvider, ChatRequest, ChatResponse};
use relevo_demo::corpus::{CAPITAL_DOCS, CLIMATE_DOCS};
use relevo_demo::{Demo, DemoError, DemoMode};
use relevo_rerank::{RerankItem, RerankProvider, RerankRequest, RerankResponse, RerankService};

/// Ranks later documents higher, honouring `top_n`.
struct ReverseRanker {
    calls: AtomicUsize,
}

#[async_trait]
impl RerankProvider for ReverseRanker {
    fn name(&self) -> &'static str {
        "reverse"
    }

    async fn rerank(
        &self,
        request: RerankRequest,
    ) -> Result<RerankResponse, relevo_rerank::ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let n = request.documents.len();
        let top_n = request.top_n.unwrap_or(n);
        let items = (0..n)
            .rev()
            .take(top_n)
            .enumerate()
            .map(|(rank, index)| RerankItem {
                index,
                score: 1.0 - 0.1 * rank as f32,
            })
            .collect();
        Ok(RerankResponse {
            provider: "reverse".to_string(),
            model: "reverse-v1".to_string(),
            items,
        })
    }
}

/// Echoes the model name so answers can be told apart.
struct EchoChat {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl ChatProvider for EchoChat {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, relevo_chat::ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(relevo_chat::ProviderError::Api {
                status: 401,
                body: "invalid api token".to_string(),
            });
        }
        Ok(ChatResponse {
            provider: "echo".to_string(),
            text: format!("answer from {}", request.model),
            model: request.model,
            finish_reason: None,
        })
    }
}

fn demo(fail_chat: bool) -> (Demo, Arc<ReverseRanker>, Arc<EchoChat>) {
    let ranker = Arc::new(ReverseRanker {
        calls: AtomicUsize::new(0),
    });
    let chat = Arc::new(EchoChat {
        calls: AtomicUsize::new(0),
        fail: fail_chat,
    });
    let demo = Demo::new(
        RerankService::new(ranker.clone()),
        ChatInvoker::new(chat.clone()),
        vec![
            "model-a".to_string(),
            "model-b".to_string(),
            "model-c".to_string(),
        ],
        3,
        Some(2),
    );
    (demo, ranker, chat)
}

async fn run(demo: &Demo, mode: DemoMode) -> Result<String, DemoError> {
    let mut out = Vec::new();
    demo.run(mode, &mut out).await?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

#[tokio::test]
async fn quickstart_ranks_every_capital_document() {
    let (demo, ranker, chat) = demo(false);
    let text = run(&demo, DemoMode::Quickstart).await.expect("quickstart");

    let ranked = text.lines().filter(|line| line.starts_with('#')).count();
    assert_eq!(ranked, CAPITAL_DOCS.len());
    assert!(text.contains("#5: 1.0000 - Capital punishment"));
    assert!(text.trim_end().ends_with("🐬"));
    assert_eq!(ranker.calls.load(Ordering::SeqCst), 1);
    assert_eq!(chat.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn documents_demo_honours_top_n() {
    let (demo, _ranker, _chat) = demo(false);
    let text = run(&demo, DemoMode::Documents).await.expect("documents");

    assert!(text.contains(&format!(
        "Reranking {} documents, showing top 3 results:",
        CLIMATE_DOCS.len()
    )));
    assert!(text.contains("#7: 1.0000 - The Paris Agreement"));
    assert!(text.contains("#6: 0.9000 - Carbon capture"));
    assert!(text.contains("#5: 0.8000 - Deforestation"));
    assert!(!text.contains("#4:"));
}

#[tokio::test]
async fn model_responses_are_labelled_by_model() {
    let (demo, ranker, chat) = demo(false);
    let text = run(&demo, DemoMode::Models).await.expect("models");

    assert!(text.contains("Model: model-a\nResponse: answer from model-a\n"));
    assert!(text.contains("#3: 1.0000 - model-c - answer from model-c"));
    assert!(text.contains("#2: 0.9000 - model-b - answer from model-b"));
    assert!(!text.contains("#1: "));
    assert_eq!(chat.calls.load(Ordering::SeqCst), 3);
    assert_eq!(ranker.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn chat_failure_stops_before_reranking() {
    let (demo, ranker, chat) = demo(true);
    let err = run(&demo, DemoMode::Models).await.expect_err("chat fails");

    assert!(matches!(
        err,
        DemoError::Chat(relevo_chat::ProviderError::Api { status: 401, .. })
    ));
    assert_eq!(chat.calls.load(Ordering::SeqCst), 1);
    assert_eq!(ranker.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn all_runs_every_section_in_order() {
    let (demo, ranker, chat) = demo(false);
    let text = run(&demo, DemoMode::All).await.expect("all");

    let order = [
        "=== QUICKSTART RERANK ===",
        "=== CHAT DEMO ===",
        "=== DOCUMENT RERANKING DEMO ===",
        "=== MODEL RESPONSE RERANKING DEMO ===",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|h| text.find(h).expect("section present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(text.contains("command-a-03-2025: answer from command-a-03-2025"));
    assert_eq!(ranker.calls.load(Ordering::SeqCst), 3);
    assert_eq!(chat.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn model_top_n_is_clamped_to_roster_size() {
    let chat = Arc::new(EchoChat {
        calls: AtomicUsize::new(0),
        fail: false,
    });
    let demo = Demo::new(
        RerankService::new(Arc::new(ReverseRanker {
            calls: AtomicUsize::new(0),
        })),
        ChatInvoker::new(chat),
        vec!["model-a".to_string()],
        3,
        Some(2),
    );
    // One roster model, so the ranker is asked for exactly one item.
    let text = run(&demo, DemoMode::Models).await.expect("single model");
    assert!(text.contains("#1: 1.0000 - model-a - answer from model-a"));
}

#[tokio::test]
async fn unset_model_top_n_ranks_the_whole_roster() {
    let roster: Vec<String> = ["a", "b", "c", "d", "e", "f", "g"]
        .iter()
        .map(|m| format!("model-{m}"))
        .collect();
    let ranker = Arc::new(ReverseRanker {
        calls: AtomicUsize::new(0),
    });
    let demo = Demo::new(
        RerankService::new(ranker.clone()),
        ChatInvoker::new(Arc::new(EchoChat {
            calls: AtomicUsize::new(0),
            fail: false,
        })),
        roster.clone(),
        3,
        None,
    );

    let text = run(&demo, DemoMode::Models).await.expect("models");
    assert!(text.contains("showing top 7 results:"));
    for (index, model) in roster.iter().enumerate() {
        assert!(
            text.contains(&format!("#{}: ", index + 1)),
            "{model} missing from ranking"
        );
        assert!(text.contains(&format!("- {model} - answer from {model}")));
    }
    assert_eq!(ranker.calls.load(Ordering::SeqCst), 1);
}
