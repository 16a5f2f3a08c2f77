//! Key events → player movement and projectile bursts.
//!
//! There is no input state beyond the player's position: every key-down is
//! exactly one action, with no repeat throttling and no diagonal combination.

use std::str::FromStr;

use crate::config::GameConfig;
use crate::entities::{EntityId, Vector2};
use crate::scheduler::Scheduler;
use crate::store::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl Key {
    /// Map a browser-style `{key, code}` pair.  Arrows are matched on `key`,
    /// fire on `code == "Space"`.
    pub fn from_dom(key: &str, code: &str) -> Option<Key> {
        match key.parse() {
            Ok(k) => Some(k),
            Err(_) if code == "Space" => Some(Key::Fire),
            Err(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowUp" => Ok(Key::Up),
            "ArrowDown" => Ok(Key::Down),
            "ArrowLeft" => Ok(Key::Left),
            "ArrowRight" => Ok(Key::Right),
            "Space" | " " => Ok(Key::Fire),
            other => Err(UnknownKey(other.to_string())),
        }
    }
}

/// Result of applying one key to the session.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyAction {
    Moved(Vector2),
    Fired(Vec<EntityId>),
}

/// Player position after one directional step.  `Fire` leaves it unchanged.
pub fn step_player(position: Vector2, key: Key, step: f32) -> Vector2 {
    match key {
        Key::Up => Vector2::new(position.x, position.y - step),
        Key::Down => Vector2::new(position.x, position.y + step),
        Key::Left => Vector2::new(position.x - step, position.y),
        Key::Right => Vector2::new(position.x + step, position.y),
        Key::Fire => position,
    }
}

/// Apply a key to the store.  The player is not clamped to the viewport.
pub fn apply_key(
    key: Key,
    state: &mut GameState,
    scheduler: &mut Scheduler,
    config: &GameConfig,
) -> KeyAction {
    match key {
        Key::Fire => KeyAction::Fired(scheduler.fire_burst(state)),
        _ => {
            let next = step_player(state.player().position, key, config.player_step);
            state.move_player(next);
            KeyAction::Moved(next)
        }
    }
}
