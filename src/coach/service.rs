//! Coaching and scoring handlers.
//!
//! Coaching goes through the coordinated gateway call first.  When that fails
//! for any reason (`Request`, `Timeout`, `Api`, `Parse`, `EmptyResponse`)
//! [`CoachService::coach`] issues exactly one direct call with a reduced
//! prompt.  There is no further retry and no backoff, so a failing request
//! costs at most two upstream calls.
//!
//! Scoring makes one direct call and never falls back.

use std::sync::Arc;

use crate::llm::ModelGateway;

use super::extract::parse_json;
use super::prompt::{self, SCORING_PERSONA};
use super::types::{CoachingRequest, CoachingResponse, ScoreResult, ScoringRequest};
use super::CoachError;

// ---------------------------------------------------------------------------
// CoachService
// ---------------------------------------------------------------------------

/// Stateless request handlers sharing one model gateway.
///
/// Cheap to clone; every clone talks to the same gateway.
#[derive(Clone)]
pub struct CoachService {
    gateway: Arc<dyn ModelGateway>,
}

impl CoachService {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    pub(crate) fn gateway(&self) -> &dyn ModelGateway {
        self.gateway.as_ref()
    }

    /// Coaching feedback for one answer.
    ///
    /// Returns the coordinator's reply when it succeeds; otherwise the direct
    /// fallback's reply.  When both fail the error carries the fallback's
    /// failure text.
    pub async fn coach(&self, req: &CoachingRequest) -> Result<CoachingResponse, CoachError> {
        let primary = prompt::coaching(req);
        match self.gateway.orchestrate(&primary).await {
            Ok(feedback) => Ok(CoachingResponse { feedback }),
            Err(err) => {
                log::warn!("coordinated coaching call failed, using direct fallback: {err}");
                let fallback = prompt::coaching_fallback(req);
                match self.gateway.generate(&fallback, None).await {
                    Ok(feedback) => Ok(CoachingResponse { feedback }),
                    Err(fallback_err) => {
                        log::error!("coaching fallback failed: {fallback_err}");
                        Err(CoachError::from(fallback_err))
                    }
                }
            }
        }
    }

    /// Scores for a whole session.
    ///
    /// The reply must contain a JSON object matching [`ScoreResult`],
    /// optionally inside a code fence.  Ranges and list lengths are only
    /// checked for logging; an out-of-range score is still returned.
    pub async fn score(&self, req: &ScoringRequest) -> Result<ScoreResult, CoachError> {
        let raw = self
            .gateway
            .generate(&prompt::scoring(req), Some(SCORING_PERSONA))
            .await?;

        let scores: ScoreResult = parse_json(&raw).inspect_err(|_| {
            log::warn!("unparseable scoring reply (len={})", raw.len());
        })?;

        for warning in scores.range_warnings() {
            log::warn!("score outside requested shape: {warning}");
        }
        Ok(scores)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
