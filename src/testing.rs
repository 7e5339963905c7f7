//! In-process `ModelGateway` double shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm::{LlmError, ModelGateway};

/// Replies with fixed text per operation, or fails when the reply is `None`.
/// Counts calls and records the last prompt/persona seen.
#[derive(Default)]
pub struct ScriptedGateway {
    orchestrate_reply: Option<String>,
    generate_reply: Option<String>,
    orchestrate_calls: AtomicUsize,
    generate_calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_persona: Mutex<Option<String>>,
}

impl ScriptedGateway {
    pub fn new(orchestrate: Option<&str>, generate: Option<&str>) -> Self {
        Self {
            orchestrate_reply: orchestrate.map(str::to_string),
            generate_reply: generate.map(str::to_string),
            ..Self::default()
        }
    }

    /// Gateway whose direct call always answers `reply`.
    pub fn generating(reply: &str) -> Self {
        Self::new(None, Some(reply))
    }

    pub fn failing() -> Self {
        Self::new(None, None)
    }

    pub fn orchestrate_calls(&self) -> usize {
        self.orchestrate_calls.load(Ordering::SeqCst)
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_persona(&self) -> Option<String> {
        self.last_persona.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn orchestrate(&self, prompt: &str) -> Result<String, LlmError> {
        self.orchestrate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        self.orchestrate_reply
            .clone()
            .ok_or_else(|| LlmError::Request("orchestrator unavailable".into()))
    }

    async fn generate(&self, prompt: &str, persona: Option<&str>) -> Result<String, LlmError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        *self.last_persona.lock().unwrap() = persona.map(str::to_string);
        self.generate_reply.clone().ok_or(LlmError::Api {
            status: 429,
            message: "quota exceeded".into(),
        })
    }
}
