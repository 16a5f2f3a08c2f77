//! Runtime configuration loaded from `volley_shooter.toml`.
//!
//! Every field defaults to the matching constant in [`crate::constants`], so a
//! TOML file only needs the keys it wants to override.  The path can be moved
//! with the `VOLLEY_SHOOTER_CONFIG` environment variable.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Entity sizes ──────────────────────────────────────────────────────────
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub player_width: f32,
    pub player_height: f32,

    // ── Enemies ───────────────────────────────────────────────────────────────
    pub enemy_spawn_interval_ms: u64,
    pub enemy_spawn_batch: usize,
    pub enemy_descent_interval_ms: u64,
    pub enemy_descent_step: f32,

    // ── Projectiles ───────────────────────────────────────────────────────────
    pub projectile_tick_ms: u64,
    pub projectile_step: f32,
    pub burst_size: usize,

    // ── Player ────────────────────────────────────────────────────────────────
    pub player_step: f32,

    // ── Viewport ──────────────────────────────────────────────────────────────
    pub cell_width_px: f32,
    pub cell_height_px: f32,

    // ── Session ───────────────────────────────────────────────────────────────
    /// Fixed RNG seed.  `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Drop enemies below the viewport and projectiles above it.
    pub cull_offscreen: bool,
    /// Also test player-vs-enemy contact after every scheduler advance, not
    /// only after key events.
    pub continuous_player_check: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            enemy_spawn_interval_ms: ENEMY_SPAWN_INTERVAL_MS,
            enemy_spawn_batch: ENEMY_SPAWN_BATCH,
            enemy_descent_interval_ms: ENEMY_DESCENT_INTERVAL_MS,
            enemy_descent_step: ENEMY_DESCENT_STEP,
            projectile_tick_ms: PROJECTILE_TICK_MS,
            projectile_step: PROJECTILE_STEP,
            burst_size: BURST_SIZE,
            player_step: PLAYER_STEP,
            cell_width_px: CELL_WIDTH_PX,
            cell_height_px: CELL_HEIGHT_PX,
            seed: None,
            cull_offscreen: false,
            continuous_player_check: false,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document.  Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Read `path` and overlay it on the defaults.
    ///
    /// A missing file is not an error.  A parse error is logged and the
    /// defaults are returned, so a bad edit never stops the game from
    /// starting.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(loaded) => {
                    tracing::info!(path = %path.display(), "loaded game config");
                    loaded
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to parse config; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!(path = %path.display(), "no config file found; using compiled defaults");
                Self::default()
            }
        }
    }

    /// Load from `$VOLLEY_SHOOTER_CONFIG`, falling back to
    /// `./volley_shooter.toml`.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }
}

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}
