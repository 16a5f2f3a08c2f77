//! Compile-time defaults.  `GameConfig::default()` reads every value from here.

// ── Entity sizes (pixels) ─────────────────────────────────────────────────────

pub const ENEMY_WIDTH: f32 = 100.0;
pub const ENEMY_HEIGHT: f32 = 100.0;
pub const PROJECTILE_WIDTH: f32 = 50.0;
pub const PROJECTILE_HEIGHT: f32 = 50.0;
pub const PLAYER_WIDTH: f32 = 100.0;
pub const PLAYER_HEIGHT: f32 = 100.0;

// ── Enemy cadence ─────────────────────────────────────────────────────────────

pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 1_000;
pub const ENEMY_SPAWN_BATCH: usize = 3;
pub const ENEMY_DESCENT_INTERVAL_MS: u64 = 100;
pub const ENEMY_DESCENT_STEP: f32 = 20.0;

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const PROJECTILE_TICK_MS: u64 = 10;
/// Upward travel per projectile tick.  Matches the enemy descent rate
/// (200 px/s).
pub const PROJECTILE_STEP: f32 = 2.0;
pub const BURST_SIZE: usize = 3;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_STEP: f32 = 100.0;

// ── Terminal viewport ─────────────────────────────────────────────────────────

/// Pixels covered by one terminal column / row.
pub const CELL_WIDTH_PX: f32 = 10.0;
pub const CELL_HEIGHT_PX: f32 = 20.0;

/// Used when the terminal size cannot be queried.
pub const FALLBACK_RENDER_WIDTH: f32 = 800.0;
pub const FALLBACK_RENDER_HEIGHT: f32 = 440.0;

pub const CONFIG_FILE: &str = "volley_shooter.toml";
pub const CONFIG_ENV_VAR: &str = "VOLLEY_SHOOTER_CONFIG";
