//! All game entity types — pure data, no logic.

// ── Geometry primitives ───────────────────────────────────────────────────────

/// Top-left corner of an entity, in screen-space pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box used for every collision test.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Session-unique handle.  Ids are handed out monotonically and never reused
/// within one `GameState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Vector2,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
}

impl Entity {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }
}

// ── Session lifecycle ─────────────────────────────────────────────────────────

/// Init → Playing → Terminal.  A reset from any phase goes back to Init.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Init,
    Playing,
    Terminal,
}

/// Notification published by the core for the host shell.  The shell mirrors
/// these onto its visuals; it never feeds them back into the simulation.
#[derive(Clone, Debug, PartialEq)]
pub enum ShellEvent {
    Spawned {
        kind: EntityKind,
        id: EntityId,
        position: Vector2,
    },
    Moved {
        kind: EntityKind,
        id: EntityId,
        position: Vector2,
    },
    Removed {
        kind: EntityKind,
        id: EntityId,
    },
    ScoreChanged(u32),
    /// The player touched an enemy.  The shell should alert the user and
    /// request a session reset.
    GameOver {
        score: u32,
    },
    SessionReset,
}
