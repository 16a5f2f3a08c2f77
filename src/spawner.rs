//! Enemy waves and projectile bursts.
//!
//! Both entry points only create entities in the store.  Periodic behavior
//! (descent, ascent) is attached by the [`crate::scheduler`].

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{EntityId, Vector2};
use crate::store::GameState;

/// Uniform integer in `[min, max]`, both ends inclusive.  An empty range
/// collapses to `min`.
pub fn random_in_range(rng: &mut impl Rng, min: i64, max: i64) -> i64 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Create one wave of enemies along the top edge.
pub fn spawn_enemy_wave(
    state: &mut GameState,
    rng: &mut impl Rng,
    config: &GameConfig,
) -> Vec<EntityId> {
    let max_x = (state.render_width() - config.enemy_width).floor() as i64;
    let ids: Vec<EntityId> = (0..config.enemy_spawn_batch)
        .map(|_| {
            let x = random_in_range(rng, 0, max_x) as f32;
            state.add_enemy(Vector2::new(x, 0.0))
        })
        .collect();
    tracing::debug!(count = ids.len(), "enemy wave spawned");
    ids
}

/// Where a burst leaves the player: horizontally centred on the player,
/// level with its top edge.
pub fn burst_origin(state: &GameState, config: &GameConfig) -> Vector2 {
    let player = state.player();
    Vector2::new(
        player.position.x + player.width / 2.0 - config.projectile_width / 2.0,
        player.position.y,
    )
}

/// Create one burst of projectiles, all at the same origin.
pub fn fire_burst(state: &mut GameState, config: &GameConfig) -> Vec<EntityId> {
    let origin = burst_origin(state, config);
    let ids: Vec<EntityId> = (0..config.burst_size)
        .map(|_| state.add_projectile(origin))
        .collect();
    tracing::debug!(count = ids.len(), x = origin.x, y = origin.y, "burst fired");
    ids
}
