//! Axis-aligned rectangle overlap.

use crate::entities::{Entity, EntityId, Rect};

/// True when `a` and `b` overlap on both axes.  Edges that only touch do not
/// count as a hit.
pub fn intersects(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// First entity (in slice order) whose box overlaps `probe`.
pub fn first_hit<'a, I>(probe: Rect, candidates: I) -> Option<EntityId>
where
    I: IntoIterator<Item = &'a Entity>,
{
    candidates
        .into_iter()
        .filter(|e| e.alive)
        .find(|e| intersects(probe, e.rect()))
        .map(|e| e.id)
}
