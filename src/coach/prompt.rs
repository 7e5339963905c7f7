//! Prompt construction for every coaching call.
//!
//! Pure functions from request to prompt text.  Request fields are embedded
//! verbatim: quotes inside a transcript are not escaped, so a transcript
//! containing `"` can blur the prompt's own quoting.

use serde::Serialize;

use super::types::{
    CoachingRequest, FollowupQuestionsRequest, ScoringRequest, SessionSummaryRequest,
    SingleFollowupRequest, SpeechAnalysisRequest,
};

// ---------------------------------------------------------------------------
// Personas
// ---------------------------------------------------------------------------

/// System instruction for the scoring call.
pub const SCORING_PERSONA: &str = "\
You are an interview performance evaluator.
Analyze the interview transcript and feedback history and return accurate scores.";

/// System instruction shared by the follow-up, summary and analysis calls.
pub const COACH_PERSONA: &str = "\
You are an expert AI interview coach. Give precise, constructive and actionable guidance.";

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

const SCORE_SCHEMA: &str = r#"{
    "overall": <number 0-100>,
    "speech": <number 0-100>,
    "vision": <number 0-100>,
    "clarity": <number 0-100>,
    "pacing": <number 0-100>,
    "strengths": ["strength1", "strength2", "strength3"],
    "improvements": ["improvement1", "improvement2", "improvement3"]
}"#;

const SUMMARY_SCHEMA: &str = r#"{
    "overall_score": <number 0-100>,
    "strengths": ["key strength", ...],
    "areas_for_improvement": ["specific area with actionable advice", ...],
    "detailed_feedback": "<narrative feedback summarizing the session>"
}"#;

const SPEECH_SCHEMA: &str = r#"{
    "clarity_feedback": "<feedback on clarity>",
    "structure_feedback": "<feedback on structure>",
    "relevance_feedback": "<feedback on relevance to the question>",
    "actionable_suggestions": ["suggestion", ...]
}"#;

// ---------------------------------------------------------------------------
// Coaching
// ---------------------------------------------------------------------------

/// Prompt for the coordinated coaching call.
pub fn coaching(req: &CoachingRequest) -> String {
    format!(
        r#"The user was asked this interview question: "{question}"

Their spoken answer: "{transcript}"

Vision observations from camera: "{vision}"

As the Coach Agent, coordinate with your Speech Agent, Vision Agent, and Voice Agent to analyze this response.

Provide brief, actionable coaching feedback in 2-3 sentences max.
Focus on the single most important improvement the user should make.
Be encouraging and speak directly to the user in second person."#,
        question = req.question,
        transcript = req.transcript,
        vision = req.vision_notes.as_deref().unwrap_or(""),
    )
}

/// Reduced prompt for the direct fallback call.  Vision notes are omitted.
pub fn coaching_fallback(req: &CoachingRequest) -> String {
    format!(
        r#"The user answered "{}" with: "{}". Give 2-3 sentences of actionable interview coaching feedback."#,
        req.question, req.transcript
    )
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Prompt for the scoring call.  Demands a bare JSON object.
pub fn scoring(req: &ScoringRequest) -> String {
    let speech = req.entries_from("Speech");
    let vision = req.entries_from("Vision");

    format!(
        r#"Based on this interview transcript: "{transcript}"

Speech Agent observations: {speech}
Vision Agent observations: {vision}
All feedback history: {history}

Return ONLY a JSON object with these exact fields, no other text:
{SCORE_SCHEMA}"#,
        transcript = req.transcript,
        speech = to_json(&speech),
        vision = to_json(&vision),
        history = to_json(&req.feedback_history),
    )
}

// ---------------------------------------------------------------------------
// Follow-ups, summary, speech analysis
// ---------------------------------------------------------------------------

pub fn followup_questions(req: &FollowupQuestionsRequest) -> String {
    let mut prompt = format!(
        "Based on the user's interview transcript and their identified areas for improvement, \
generate exactly 3 personalized follow-up questions that help the user practice and strengthen \
their weak points.\n\nInterview Transcript:\n{}\n\nAreas for Improvement:\n",
        req.transcript
    );
    for area in &req.areas_for_improvement {
        prompt.push_str(&format!("- {area}\n"));
    }
    prompt.push_str(
        "\nGenerate 3 distinct questions. Return ONLY a JSON object of the form \
{\"questions\": [\"...\", \"...\", \"...\"]}, no other text.",
    );
    prompt
}

/// Plain-text reply expected: the question itself.
pub fn single_followup(req: &SingleFollowupRequest) -> String {
    format!(
        r#"The user just answered an interview question. Generate ONE concise follow-up question that probes deeper into their response, based directly on what they said.

Original Question:
"{}"

User's Answer:
"{}"

Reply with the follow-up question only, no preamble. If the answer is very short or irrelevant, ask a question that gently steers them back to giving a more detailed answer to the original question."#,
        req.original_question, req.user_answer
    )
}

pub fn session_summary(req: &SessionSummaryRequest) -> String {
    format!(
        "Provide a comprehensive summary of this interview session. Analyze the candidate's \
responses for clarity, relevance, confidence, and overall communication effectiveness.\n\n\
Transcript:\n{}\n\nReturn ONLY a JSON object with these exact fields, no other text:\n{SUMMARY_SCHEMA}",
        req.transcript
    )
}

pub fn speech_analysis(req: &SpeechAnalysisRequest) -> String {
    format!(
        "Give real-time feedback on this speech segment from an interview answer.\n\n\
Current Interview Question: {}\n\nUser Speech Segment:\n{}\n\n\
Criteria:\n\
- Clarity: Is the speech easy to understand?\n\
- Structure: Does the response have a logical flow with a clear beginning, middle, and end?\n\
- Relevance: Does the response directly address the current question (if provided)?\n\n\
Keep each point concise. Return ONLY a JSON object with these exact fields, no other text:\n{SPEECH_SCHEMA}",
        req.current_question.as_deref().unwrap_or("(not provided)"),
        req.transcript_segment
    )
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
