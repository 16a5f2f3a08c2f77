//! Player-vs-enemy contact.

use crate::entities::EntityId;
use crate::geometry;
use crate::store::GameState;

/// The first live enemy (in spawn order) overlapping the player, if any.
pub fn player_hit(state: &GameState) -> Option<EntityId> {
    geometry::first_hit(state.player().rect(), state.enemies())
}
