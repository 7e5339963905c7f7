//! Interview coaching pipeline.
//!
//! ```text
//! request ─▶ prompt ─▶ ModelGateway ─▶ (JSON replies) extract ─▶ response
//! ```
//!
//! * [`CoachService::coach`] — coordinated call, one direct fallback.
//! * [`CoachService::score`] — one direct call, fenced-JSON extraction.
//! * [`CoachService::followup_questions`], [`CoachService::single_followup`],
//!   [`CoachService::session_summary`], [`CoachService::speech_analysis`] —
//!   single direct calls.

pub mod extract;
pub mod followup;
pub mod prompt;
pub mod service;
pub mod types;

use thiserror::Error;

use crate::llm::LlmError;

pub use service::CoachService;
pub use types::{
    CoachingRequest, CoachingResponse, FeedbackEntry, FollowupQuestions,
    FollowupQuestionsRequest, ScoreResult, ScoringRequest, SessionSummary, SessionSummaryRequest,
    SingleFollowup, SingleFollowupRequest, SpeechAnalysis, SpeechAnalysisRequest,
};

/// Terminal failures of a coaching operation.
#[derive(Debug, Error)]
pub enum CoachError {
    /// The model provider call failed or returned nothing usable.
    #[error("{0}")]
    Upstream(String),

    /// The reply could not be read as the expected JSON shape.
    #[error("could not parse model response: {0}")]
    Parse(String),
}

impl From<LlmError> for CoachError {
    fn from(e: LlmError) -> Self {
        CoachError::Upstream(e.to_string())
    }
}
