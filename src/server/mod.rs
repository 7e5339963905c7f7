//! HTTP surface of the interview coach.
//!
//! | Method | Path              | Body                         | Reply              |
//! |--------|-------------------|------------------------------|--------------------|
//! | GET    | `/`               |                              | service info       |
//! | GET    | `/health`         |                              | `{"status":"ok"}`  |
//! | GET    | `/api/warmup`     |                              | `{"status":"ok"}`  |
//! | POST   | `/coach`          | `CoachingRequest`            | `{"feedback":...}` |
//! | POST   | `/score`          | `ScoringRequest`             | `ScoreResult`      |
//! | POST   | `/followups`      | `FollowupQuestionsRequest`   | `{"questions":[]}` |
//! | POST   | `/followup`       | `SingleFollowupRequest`      | `{"followup_question":...}` |
//! | POST   | `/summary`        | `SessionSummaryRequest`      | `SessionSummary`   |
//! | POST   | `/analyze/speech` | `SpeechAnalysisRequest`      | `SpeechAnalysis`   |
//!
//! Failures are `500 {"detail": "..."}`.  CORS is fully open.

pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::coach::CoachService;
use crate::config::AppConfig;
use crate::llm::ModelGateway;

pub use error::ApiError;

/// All routes with CORS and request logging applied.
pub fn router(service: CoachService) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/api/warmup", get(routes::health))
        .route("/coach", post(routes::coach))
        .route("/score", post(routes::score))
        .route("/followups", post(routes::followups))
        .route("/followup", post(routes::followup))
        .route("/summary", post(routes::summary))
        .route("/analyze/speech", post(routes::analyze_speech))
        .with_state(service)
        .layer(middleware::from_fn(log_requests))
        .layer(CorsLayer::permissive())
}

async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();
    if status.is_server_error() {
        log::warn!("{method} {path} -> {status} ({elapsed_ms} ms)");
    } else {
        log::info!("{method} {path} -> {status} ({elapsed_ms} ms)");
    }
    response
}

/// Bind `config.server` and serve until Ctrl-C.
pub async fn serve(config: &AppConfig, gateway: Arc<dyn ModelGateway>) -> anyhow::Result<()> {
    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    log::info!("listening on {addr}");

    axum::serve(listener, router(CoachService::new(gateway)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("shutdown signal received");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedGateway;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const SCORES: &str = r#"```json
{"overall": 82, "speech": 78, "vision": 88, "clarity": 80, "pacing": 75,
 "strengths": ["Clear structure", "Concrete example", "Good eye contact"],
 "improvements": ["Fewer fillers", "Slow down", "Quantify results"]}
```"#;

    fn app(gateway: ScriptedGateway) -> Router {
        router(CoachService::new(Arc::new(gateway)))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = axum::http::Request::builder().method(method).uri(uri);
        let req = match body {
            Some(v) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn liveness_endpoints() {
        for path in ["/health", "/api/warmup"] {
            let (status, body) = send(app(ScriptedGateway::failing()), Method::GET, path, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({"status": "ok"}));
        }

        let (status, body) = send(app(ScriptedGateway::failing()), Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["agents"], "connected");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn coach_returns_feedback() {
        let gateway = ScriptedGateway::new(
            Some("You gave a clear example. Next time, state the result in numbers."),
            None,
        );
        let (status, body) = send(
            app(gateway),
            Method::POST,
            "/coach",
            Some(json!({
                "transcript": "I led a team of five engineers...",
                "question": "Tell me about a time you led a team",
                "vision_notes": "good eye contact"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"feedback": "You gave a clear example. Next time, state the result in numbers."})
        );
    }

    #[tokio::test]
    async fn coach_total_failure_is_500_with_detail() {
        let (status, body) = send(
            app(ScriptedGateway::failing()),
            Method::POST,
            "/coach",
            Some(json!({"transcript": "t", "question": "q"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().unwrap().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn coach_missing_field_is_rejected_before_gateway() {
        let (status, _) = send(
            app(ScriptedGateway::failing()),
            Method::POST,
            "/coach",
            Some(json!({"transcript": "t"})),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn score_returns_exact_schema() {
        let (status, body) = send(
            app(ScriptedGateway::generating(SCORES)),
            Method::POST,
            "/score",
            Some(json!({
                "transcript": "...",
                "feedback_history": [
                    {"agent": "Speech", "note": "too many fillers"},
                    {"agent": "Vision", "note": "strong eye contact"}
                ]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let obj = body.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["clarity", "improvements", "overall", "pacing", "speech", "strengths", "vision"]
        );
        for key in ["overall", "speech", "vision", "clarity", "pacing"] {
            assert!(obj[key].is_number(), "{key} is numeric");
        }
        assert_eq!(obj["strengths"].as_array().unwrap().len(), 3);
        assert_eq!(obj["improvements"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn score_unparseable_reply_is_500() {
        let (status, body) = send(
            app(ScriptedGateway::generating("not json")),
            Method::POST,
            "/score",
            Some(json!({"transcript": "t", "feedback_history": []})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().unwrap().starts_with("could not parse"));
    }

    #[tokio::test]
    async fn followups_route_caps_questions() {
        let (status, body) = send(
            app(ScriptedGateway::generating(
                r#"{"questions": ["a?", "b?", "c?", "d?"]}"#,
            )),
            Method::POST,
            "/followups",
            Some(json!({"transcript": "t", "areas_for_improvement": ["pacing"]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"questions": ["a?", "b?", "c?"]}));
    }

    #[tokio::test]
    async fn followup_route_returns_question() {
        let (status, body) = send(
            app(ScriptedGateway::generating("What would you do differently?")),
            Method::POST,
            "/followup",
            Some(json!({"original_question": "q", "user_answer": "a"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"followup_question": "What would you do differently?"}));
    }

    #[tokio::test]
    async fn cors_headers_are_present() {
        let req = axum::http::Request::builder()
            .method(Method::GET)
            .uri("/health")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let resp = app(ScriptedGateway::failing()).oneshot(req).await.unwrap();
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
