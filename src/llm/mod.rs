//! Model provider access for the interview coach.
//!
//! This module provides:
//! * [`ModelGateway`] — async trait implemented by every model backend.
//! * [`GeminiGateway`] — Generative Language API backend.
//! * [`agents`] — the coordinator/specialist roster folded into one persona.
//! * [`LlmError`] — error variants for provider calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use interview_coach::config::AppConfig;
//! use interview_coach::llm::{GeminiGateway, ModelGateway};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::from_env().unwrap();
//!     let gateway = GeminiGateway::from_config(&config.llm);
//!
//!     let reply = gateway
//!         .generate("Say hello in one word.", None)
//!         .await
//!         .unwrap();
//!     println!("{reply}");
//! }
//! ```

pub mod agents;
pub mod gateway;
pub mod gemini;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use agents::{coordinator_persona, AgentProfile};
pub use gateway::{LlmError, ModelGateway};
pub use gemini::GeminiGateway;
