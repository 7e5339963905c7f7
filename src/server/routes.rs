//! Route handlers.
//!
//! Bodies are decoded by axum's `Json` extractor, so a missing required field
//! is rejected with a 4xx before any handler runs.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::coach::{
    CoachService, CoachingRequest, CoachingResponse, FollowupQuestions, FollowupQuestionsRequest,
    ScoreResult, ScoringRequest, SessionSummary, SessionSummaryRequest, SingleFollowup,
    SingleFollowupRequest, SpeechAnalysis, SpeechAnalysisRequest,
};

use super::error::ApiError;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub version: &'static str,
    pub agents: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Status {
    pub status: &'static str,
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "interview coach backend running",
        version: env!("CARGO_PKG_VERSION"),
        agents: "connected",
    })
}

/// Liveness; also serves `/api/warmup`.
pub async fn health() -> Json<Status> {
    Json(Status { status: "ok" })
}

pub async fn coach(
    State(service): State<CoachService>,
    Json(req): Json<CoachingRequest>,
) -> Result<Json<CoachingResponse>, ApiError> {
    log::info!(
        "POST /coach transcript_len={} vision_notes={}",
        req.transcript.len(),
        req.vision_notes.as_deref().is_some_and(|v| !v.is_empty())
    );
    Ok(Json(service.coach(&req).await?))
}

pub async fn score(
    State(service): State<CoachService>,
    Json(req): Json<ScoringRequest>,
) -> Result<Json<ScoreResult>, ApiError> {
    log::info!(
        "POST /score transcript_len={} history={}",
        req.transcript.len(),
        req.feedback_history.len()
    );
    Ok(Json(service.score(&req).await?))
}

pub async fn followups(
    State(service): State<CoachService>,
    Json(req): Json<FollowupQuestionsRequest>,
) -> Result<Json<FollowupQuestions>, ApiError> {
    Ok(Json(service.followup_questions(&req).await?))
}

pub async fn followup(
    State(service): State<CoachService>,
    Json(req): Json<SingleFollowupRequest>,
) -> Result<Json<SingleFollowup>, ApiError> {
    Ok(Json(service.single_followup(&req).await?))
}

pub async fn summary(
    State(service): State<CoachService>,
    Json(req): Json<SessionSummaryRequest>,
) -> Result<Json<SessionSummary>, ApiError> {
    Ok(Json(service.session_summary(&req).await?))
}

pub async fn analyze_speech(
    State(service): State<CoachService>,
    Json(req): Json<SpeechAnalysisRequest>,
) -> Result<Json<SpeechAnalysis>, ApiError> {
    Ok(Json(service.speech_analysis(&req).await?))
}
