//! `GeminiGateway`: [`ModelGateway`] backed by the Generative Language API.
//!
//! Calls `POST {base_url}/models/{model}:generateContent`.  All connection
//! details come from [`LlmConfig`]; the API key travels in the
//! `x-goog-api-key` header so it never appears in URLs or logs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::llm::agents::coordinator_persona;
use crate::llm::gateway::{LlmError, ModelGateway};

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

// ---------------------------------------------------------------------------
// GeminiGateway
// ---------------------------------------------------------------------------

/// Hosted Gemini model reached over HTTPS.
///
/// Built once at startup; the `reqwest::Client` inside pools connections and
/// is shared by all concurrent requests.
pub struct GeminiGateway {
    client: reqwest::Client,
    config: LlmConfig,
    coordinator: String,
}

impl GeminiGateway {
    /// Build a gateway from application config.
    ///
    /// A timeout is applied only when `config.timeout_secs` is set; otherwise
    /// the transport default governs.  A default client is used if the
    /// builder fails.
    pub fn from_config(config: &LlmConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
            coordinator: coordinator_persona(),
        }
    }

    /// `true` when an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref().filter(|k| !k.is_empty())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request(&self, prompt: &str, persona: Option<&str>) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content::text(Some("user"), prompt)],
            system_instruction: persona.map(|p| Content::text(None, p)),
            generation_config: self
                .config
                .temperature
                .map(|temperature| GenerationConfig { temperature }),
        }
    }

    async fn send(&self, prompt: &str, persona: Option<&str>) -> Result<String, LlmError> {
        let key = self
            .api_key()
            .ok_or_else(|| LlmError::NotConfigured("GEMINI_API_KEY is not set".into()))?;

        log::debug!(
            "generateContent model={} prompt_len={} persona={}",
            self.config.model,
            prompt.len(),
            persona.is_some()
        );

        let body = self.build_request(prompt, persona);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &bytes));
        }

        extract_text(&bytes)
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn orchestrate(&self, prompt: &str) -> Result<String, LlmError> {
        self.send(prompt, Some(&self.coordinator)).await
    }

    async fn generate(&self, prompt: &str, persona: Option<&str>) -> Result<String, LlmError> {
        self.send(prompt, persona).await
    }
}

// ---------------------------------------------------------------------------
// Response decoding
// ---------------------------------------------------------------------------

/// Concatenated text parts of the first candidate.
fn extract_text(body: &[u8]) -> Result<String, LlmError> {
    let parsed: GenerateResponse =
        serde_json::from_slice(body).map_err(|e| LlmError::Parse(e.to_string()))?;

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    Ok(text)
}

fn api_error(status: u16, body: &[u8]) -> LlmError {
    let message = serde_json::from_slice::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| String::from_utf8_lossy(body).trim().to_string());
    LlmError::Api { status, message }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
