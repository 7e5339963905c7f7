//! JSON extraction from free-form model replies.
//!
//! Models often wrap JSON in a markdown code fence.  [`json_payload`] strips
//! that wrapping with a fixed rule and [`parse_json`] deserializes the rest.
//!
//! Rule, applied to the trimmed reply:
//! 1. No "```" anywhere: the whole reply is the payload.
//! 2. Otherwise the payload is the text between the first fence and the next
//!    one (or the end of the reply).  Text before the first fence and every
//!    later fenced block are ignored.
//! 3. A payload starting with the tag `json` loses those four characters.

use serde::de::DeserializeOwned;

use super::CoachError;

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// The slice of `raw` that should contain the JSON document.
pub fn json_payload(raw: &str) -> &str {
    let text = raw.trim();
    let Some(segment) = text.split(FENCE).nth(1) else {
        return text;
    };
    segment.strip_prefix(JSON_TAG).unwrap_or(segment)
}

/// Extract and deserialize a JSON document from a model reply.
///
/// Malformed JSON, missing fields and wrong types all surface as
/// [`CoachError::Parse`]; nothing partially populated is returned.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, CoachError> {
    serde_json::from_str(json_payload(raw)).map_err(|e| CoachError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::types::ScoreResult;

    const SCORES: &str = r#"{"overall": 82, "speech": 78, "vision": 88, "clarity": 80, "pacing": 75,
        "strengths": ["Clear structure", "Concrete example", "Good eye contact"],
        "improvements": ["Fewer fillers", "Slow down", "Quantify results"]}"#;

    #[test]
    fn unfenced_text_is_returned_trimmed() {
        assert_eq!(json_payload("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn fence_with_json_tag() {
        assert_eq!(json_payload("```json\n{\"a\": 1}\n```"), "\n{\"a\": 1}\n");
    }

    #[test]
    fn fence_without_tag() {
        assert_eq!(json_payload("```\n{\"a\": 1}\n```"), "\n{\"a\": 1}\n");
    }

    #[test]
    fn prose_around_fence_is_ignored() {
        let raw = "Here are the scores:\n```json\n{\"a\": 1}\n```\nLet me know!";
        assert_eq!(json_payload(raw), "\n{\"a\": 1}\n");
    }

    #[test]
    fn only_first_fenced_block_is_used() {
        let raw = "```json\n{\"a\": 1}\n```\n```json\n{\"a\": 2}\n```";
        assert_eq!(json_payload(raw), "\n{\"a\": 1}\n");
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        assert_eq!(json_payload("```json\n{\"a\": 1}"), "\n{\"a\": 1}");
    }

    #[test]
    fn other_language_tag_is_kept() {
        // Only a literal `json` tag is dropped; anything else stays and fails
        // to parse downstream.
        assert_eq!(json_payload("```js\n{}\n```"), "js\n{}\n");
    }

    #[test]
    fn fenced_and_unfenced_parse_identically() {
        let fenced = format!("```json\n{SCORES}\n```");
        let a: ScoreResult = parse_json(&fenced).expect("fenced");
        let b: ScoreResult = parse_json(SCORES).expect("plain");
        assert_eq!(a, b);
        assert_eq!(a.overall, 82.0);
        assert_eq!(a.strengths.len(), 3);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_json::<ScoreResult>("not json").unwrap_err();
        assert!(matches!(err, CoachError::Parse(_)));
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let err = parse_json::<ScoreResult>(r#"{"overall": 80}"#).unwrap_err();
        match err {
            CoachError::Parse(msg) => assert!(msg.contains("missing field")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let raw = SCORES.replace("\"overall\": 82", "\"overall\": \"high\"");
        assert!(matches!(
            parse_json::<ScoreResult>(&raw),
            Err(CoachError::Parse(_))
        ));
    }

    #[test]
    fn empty_fence_is_a_parse_error() {
        assert!(parse_json::<ScoreResult>("``````").is_err());
    }
}
