//! Configuration module for the interview coach service.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the HTTP server
//! and the model provider, `AppPaths` for the platform config directory, TOML
//! persistence via `AppConfig::load` / `AppConfig::save_to`, and environment
//! overrides via `AppConfig::apply_env`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, LlmConfig, ServerConfig};
