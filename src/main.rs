//! Application entry point — interview coach HTTP service.
//!
//! # Startup sequence
//!
//! 1. Load `.env` (if present) and initialise logging.
//! 2. Build [`AppConfig`] from `settings.toml` plus environment overrides.
//! 3. Build the model gateway ([`GeminiGateway`]) once from config.
//! 4. Serve the router until Ctrl-C.

use std::sync::Arc;

use anyhow::Result;
use interview_coach::{
    config::AppConfig,
    llm::{GeminiGateway, ModelGateway},
    server,
};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Environment + logging
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env file: {e}");
        }
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("interview coach v{} starting up", env!("CARGO_PKG_VERSION"));

    // 2. Configuration
    let config = AppConfig::from_env()?;

    // 3. Model gateway
    let gemini = GeminiGateway::from_config(&config.llm);
    if gemini.is_configured() {
        log::info!("model gateway ready (model={})", config.llm.model);
    } else {
        log::warn!("GEMINI_API_KEY is not set; coaching requests will fail until it is");
    }
    let gateway: Arc<dyn ModelGateway> = Arc::new(gemini);

    // 4. HTTP server
    server::serve(&config, gateway).await
}
