//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use game_core::PlayerId;
use runtime::RuntimeConfig;

/// Settings for one local play session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory with `config.toml`, `events.ron`, `shop.ron`, ... overrides.
    pub data_dir: Option<PathBuf>,
    /// Durable store location; state is kept in memory when unset.
    pub save_dir: Option<PathBuf>,
    pub player_id: PlayerId,
    pub player_name: String,
    pub seed: Option<u64>,
    pub replay_cadence: Duration,
    pub enable_ticks: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            save_dir: None,
            player_id: PlayerId(1),
            player_name: "Captain".to_string(),
            seed: None,
            replay_cadence: runtime::replay::DEFAULT_CADENCE,
            enable_ticks: true,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `STARSHIP_DATA_DIR` - Content override directory (default: built-in content)
    /// - `STARSHIP_SAVE_DIR` - Save directory (default: in-memory only)
    /// - `STARSHIP_PLAYER_ID` - Numeric player id (default: 1)
    /// - `STARSHIP_PLAYER_NAME` - Display name used by `/start` (default: Captain)
    /// - `STARSHIP_SEED` - RNG seed for reproducible sessions
    /// - `STARSHIP_REPLAY_MS` - Battle replay cadence in milliseconds (default: 500)
    /// - `STARSHIP_TICKS` - Run scheduled ticks (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        config.data_dir = read("STARSHIP_DATA_DIR").map(PathBuf::from);
        config.save_dir = read("STARSHIP_SAVE_DIR").map(PathBuf::from);

        if let Some(id) = parse::<u64>(read("STARSHIP_PLAYER_ID")) {
            config.player_id = PlayerId(id);
        }
        if let Some(name) = read("STARSHIP_PLAYER_NAME") {
            config.player_name = name;
        }
        config.seed = parse(read("STARSHIP_SEED"));
        if let Some(ms) = parse::<u64>(read("STARSHIP_REPLAY_MS")) {
            config.replay_cadence = Duration::from_millis(ms);
        }
        if let Some(enable) = parse::<bool>(read("STARSHIP_TICKS")) {
            config.enable_ticks = enable;
        }

        config
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            enable_ticks: self.enable_ticks,
            seed: self.seed,
            replay_cadence: self.replay_cadence,
            save_dir: self.save_dir.clone(),
            ..RuntimeConfig::default()
        }
    }
}

fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
    value?.trim().parse().ok()
}
