//! Test doubles for the completion service and document extractor, plus a
//! log capture for asserting what reaches the tracing output.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::subscriber::DefaultGuard;
use tracing::Level;

use crate::config::Config;
use crate::extractor::{non_empty, DocumentExtractor, ExtractError};
use crate::llm_client::{CompletionRequest, CompletionService, LlmError};
use crate::state::AppState;

pub const JD_MATCH_REPLY: &str = r#"{"match_score": 72, "matched_skills": ["APIs"], "missing_skills": ["Go"], "experience_gaps": [], "keyword_coverage_percentage": 40, "improvement_suggestions": ["Add Go projects"], "final_verdict": "Moderate fit"}"#;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

enum Reply {
    Text(String),
    Empty,
    Timeout,
}

/// Completion double that records every request and answers with a canned reply.
pub struct StubCompletion {
    reply: Reply,
    calls: Mutex<Vec<CapturedRequest>>,
}

impl StubCompletion {
    fn with(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with(Reply::Text(text.to_string()))
    }

    pub fn empty() -> Self {
        Self::with(Reply::Empty)
    }

    pub fn timing_out() -> Self {
        Self::with(Reply::Timeout)
    }

    pub fn calls(&self) -> Vec<CapturedRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(CapturedRequest {
            system: request.system.to_string(),
            user: request.user.to_string(),
            temperature: request.temperature,
        });
        match &self.reply {
            Reply::Text(text) => Ok(text.trim().to_string()),
            Reply::Empty => Err(LlmError::EmptyContent),
            Reply::Timeout => Err(LlmError::Timeout),
        }
    }
}

/// Extractor double returning fixed text (or nothing) and counting calls.
pub struct StubExtractor {
    text: String,
    calls: AtomicUsize,
}

impl StubExtractor {
    pub fn returning(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DocumentExtractor for StubExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<String, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        non_empty(self.text.clone())
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| (key == "OPENAI_API_KEY").then(|| "sk-test".to_string()))
        .unwrap()
}

pub fn test_state(completion: Arc<StubCompletion>, extractor: Arc<StubExtractor>) -> AppState {
    AppState {
        completion,
        extractor,
        config: test_config(),
    }
}

/// In-memory sink for a DEBUG-level fmt subscriber.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn debug_subscriber(buffer: LogBuffer) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || buffer.clone())
        .finish()
}

/// Runs `f` under a DEBUG subscriber and returns everything it logged.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    tracing::subscriber::with_default(debug_subscriber(buffer.clone()), f);
    buffer.contents()
}

/// Same as `capture_logs` for async tests: logs are captured until the guard drops.
pub fn capture_logs_scoped() -> (LogBuffer, DefaultGuard) {
    let buffer = LogBuffer::default();
    let guard = tracing::subscriber::set_default(debug_subscriber(buffer.clone()));
    (buffer, guard)
}
