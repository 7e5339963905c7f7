//! Interview coach backend.
//!
//! Forwards interview-practice transcripts and camera notes to a hosted
//! language model and returns coaching feedback and session scores.
//!
//! * [`config`] — TOML settings and environment overrides.
//! * [`llm`] — the [`llm::ModelGateway`] seam and its Gemini backend.
//! * [`coach`] — prompts, fallback, JSON extraction and the handlers.
//! * [`server`] — the axum router.

pub mod coach;
pub mod config;
pub mod llm;
pub mod server;

#[cfg(test)]
pub(crate) mod testing;
