//! Runner configuration.
//!
//! Consolidates all environment variable reads. Invalid values fall back to
//! their defaults instead of aborting the game.

use std::path::PathBuf;

use crate::engine::{EngineConfig, SpawnProbe};
use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;

pub const ENV_SEED: &str = "FALLING_BLOCKS_SEED";
pub const ENV_USER: &str = "FALLING_BLOCKS_USER";
pub const ENV_LEADERBOARD_PATH: &str = "FALLING_BLOCKS_LEADERBOARD_PATH";
pub const ENV_LEADERBOARD_DISABLED: &str = "FALLING_BLOCKS_LEADERBOARD_DISABLED";
pub const ENV_LOG_PATH: &str = "FALLING_BLOCKS_LOG_PATH";
pub const ENV_SPAWN_PROBE: &str = "FALLING_BLOCKS_SPAWN_PROBE";
pub const ENV_KEY_RELEASE_TIMEOUT: &str = "FALLING_BLOCKS_KEY_RELEASE_TIMEOUT_MS";

pub const DEFAULT_LEADERBOARD_PATH: &str = "leaderboard.json";

/// Complete runner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub engine: EngineConfig,
    /// Leaderboard user; scores are not submitted without one.
    pub user: Option<String>,
    /// JSON leaderboard file; `None` disables the leaderboard.
    pub leaderboard_path: Option<PathBuf>,
    /// Log file; `None` discards log events.
    pub log_path: Option<PathBuf>,
    /// Auto-release timeout for terminals without key-release events.
    pub key_release_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            user: None,
            leaderboard_path: Some(PathBuf::from(DEFAULT_LEADERBOARD_PATH)),
            log_path: None,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed = get(ENV_SEED).and_then(|v| v.parse::<u32>().ok());
        let spawn_probe = get(ENV_SPAWN_PROBE)
            .and_then(|v| SpawnProbe::from_str(&v))
            .unwrap_or_default();

        let disabled = get(ENV_LEADERBOARD_DISABLED)
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let leaderboard_path = if disabled {
            None
        } else {
            get(ENV_LEADERBOARD_PATH)
                .map(PathBuf::from)
                .or(defaults.leaderboard_path)
        };

        Self {
            engine: EngineConfig { seed, spawn_probe },
            user: get(ENV_USER),
            leaderboard_path,
            log_path: get(ENV_LOG_PATH).map(PathBuf::from),
            key_release_timeout_ms: get(ENV_KEY_RELEASE_TIMEOUT)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.key_release_timeout_ms),
        }
    }
}
