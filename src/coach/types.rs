//! Request and response types for the coaching endpoints.
//!
//! Field names match the JSON bodies clients send (`snake_case`).  Nothing
//! here is persisted; every value lives for one request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Coaching
// ---------------------------------------------------------------------------

/// One answer to coach on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoachingRequest {
    pub question: String,
    pub transcript: String,
    /// Camera-derived observations; absent and empty are treated alike.
    #[serde(default)]
    pub vision_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingResponse {
    pub feedback: String,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// A prior feedback item.  Opaque JSON object; only the `agent` tag is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackEntry(pub Map<String, Value>);

impl FeedbackEntry {
    /// The `agent` tag (`"Speech"`, `"Vision"`, `"Voice"`, ...) when it is a
    /// string.
    pub fn agent(&self) -> Option<&str> {
        self.0.get("agent").and_then(Value::as_str)
    }

    pub fn is_from(&self, agent: &str) -> bool {
        self.agent() == Some(agent)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringRequest {
    pub transcript: String,
    #[serde(default)]
    pub feedback_history: Vec<FeedbackEntry>,
}

impl ScoringRequest {
    /// Entries tagged with `agent`, in history order.
    pub fn entries_from(&self, agent: &str) -> Vec<&FeedbackEntry> {
        self.feedback_history
            .iter()
            .filter(|e| e.is_from(agent))
            .collect()
    }
}

/// Session scores as returned by the model.
///
/// Scores are nominally 0-100 and the lists nominally hold three items each;
/// neither is enforced (see [`ScoreResult::range_warnings`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall: f64,
    pub speech: f64,
    pub vision: f64,
    pub clarity: f64,
    pub pacing: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl ScoreResult {
    pub const EXPECTED_ITEMS: usize = 3;

    /// Human-readable notes for every value outside the requested shape.
    /// Empty when the model followed the prompt.
    pub fn range_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (name, value) in [
            ("overall", self.overall),
            ("speech", self.speech),
            ("vision", self.vision),
            ("clarity", self.clarity),
            ("pacing", self.pacing),
        ] {
            if !(0.0..=100.0).contains(&value) {
                warnings.push(format!("{name}={value} outside 0-100"));
            }
        }
        for (name, items) in [
            ("strengths", &self.strengths),
            ("improvements", &self.improvements),
        ] {
            if items.len() != Self::EXPECTED_ITEMS {
                warnings.push(format!(
                    "{name} has {} items, expected {}",
                    items.len(),
                    Self::EXPECTED_ITEMS
                ));
            }
        }
        warnings
    }
}

// ---------------------------------------------------------------------------
// Follow-up questions, session summary, speech analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FollowupQuestionsRequest {
    pub transcript: String,
    #[serde(default)]
    pub areas_for_improvement: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowupQuestions {
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleFollowupRequest {
    pub original_question: String,
    pub user_answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleFollowup {
    pub followup_question: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummaryRequest {
    pub transcript: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub overall_score: f64,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub detailed_feedback: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechAnalysisRequest {
    pub transcript_segment: String,
    #[serde(default)]
    pub current_question: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechAnalysis {
    pub clarity_feedback: String,
    pub structure_feedback: String,
    pub relevance_feedback: String,
    pub actionable_suggestions: Vec<String>,
}
