//! Practice helpers built on the same gateway: follow-up questions, session
//! summaries and per-segment speech analysis.
//!
//! Each is one direct call with no fallback.  JSON replies go through
//! [`parse_json`], so they tolerate code fences exactly like scoring does.

use super::extract::parse_json;
use super::prompt::{self, COACH_PERSONA};
use super::service::CoachService;
use super::types::{
    FollowupQuestions, FollowupQuestionsRequest, SessionSummary, SessionSummaryRequest,
    SingleFollowup, SingleFollowupRequest, SpeechAnalysis, SpeechAnalysisRequest,
};
use super::CoachError;

/// Upper bound on follow-up questions returned to the client.
pub const MAX_FOLLOWUP_QUESTIONS: usize = 3;

impl CoachService {
    /// Practice questions targeting the given weak areas; at most
    /// [`MAX_FOLLOWUP_QUESTIONS`], extra questions from the model are dropped.
    pub async fn followup_questions(
        &self,
        req: &FollowupQuestionsRequest,
    ) -> Result<FollowupQuestions, CoachError> {
        let raw = self
            .gateway()
            .generate(&prompt::followup_questions(req), Some(COACH_PERSONA))
            .await?;
        let mut out: FollowupQuestions = parse_json(&raw)?;
        out.questions.truncate(MAX_FOLLOWUP_QUESTIONS);
        Ok(out)
    }

    /// One question probing deeper into the user's last answer.
    pub async fn single_followup(
        &self,
        req: &SingleFollowupRequest,
    ) -> Result<SingleFollowup, CoachError> {
        let raw = self
            .gateway()
            .generate(&prompt::single_followup(req), Some(COACH_PERSONA))
            .await?;
        let question = raw.trim().trim_matches('"').trim();
        if question.is_empty() {
            return Err(CoachError::Upstream("model returned no follow-up question".into()));
        }
        Ok(SingleFollowup {
            followup_question: question.to_string(),
        })
    }

    pub async fn session_summary(
        &self,
        req: &SessionSummaryRequest,
    ) -> Result<SessionSummary, CoachError> {
        let raw = self
            .gateway()
            .generate(&prompt::session_summary(req), Some(COACH_PERSONA))
            .await?;
        parse_json(&raw)
    }

    pub async fn speech_analysis(
        &self,
        req: &SpeechAnalysisRequest,
    ) -> Result<SpeechAnalysis, CoachError> {
        let raw = self
            .gateway()
            .generate(&prompt::speech_analysis(req), Some(COACH_PERSONA))
            .await?;
        parse_json(&raw)
    }
}
