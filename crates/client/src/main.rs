//! Starship game client binary.
//!
//! Composition root for a local play session:
//! 1. Configuration from the environment (and `.env`)
//! 2. File logging
//! 3. Game content, built-in or loaded from a data directory
//! 4. Runtime with its tick workers
//! 5. The stdin/stdout command loop
//!
//! ```bash
//! STARSHIP_SEED=7 STARSHIP_SAVE_DIR=./save cargo run -p starship-client
//! ```
mod config;
mod logging;
mod repl;

use std::path::Path;

use anyhow::{Context, Result};
use game_content::{ContentFactory, GameContent};
use runtime::{OracleManager, Runtime};

use config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging()?;

    tracing::info!("Starting starship client");
    tracing::info!(player = %config.player_id, ticks = config.enable_ticks, "session config");

    let content = load_content(config.data_dir.as_deref())?;
    let runtime = Runtime::builder()
        .config(config.runtime_config())
        .oracles(OracleManager::new(content))
        .build()
        .await
        .context("building runtime")?;

    let outcome = repl::run(runtime.handle(), &config).await;
    runtime.shutdown().await.context("stopping runtime")?;
    outcome
}

fn load_content(data_dir: Option<&Path>) -> Result<GameContent> {
    match data_dir {
        Some(dir) => ContentFactory::new(dir)
            .load_all()
            .with_context(|| format!("loading game content from {}", dir.display())),
        None => Ok(GameContent::builtin()),
    }
}
