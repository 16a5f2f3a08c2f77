//! Entity store — the single owner of every live entity and the score.
//!
//! Every mutation records a [`ShellEvent`] in an outbox that the host shell
//! drains after each callback.  Operations on unknown ids are silent no-ops.

use crate::config::GameConfig;
use crate::entities::{Entity, EntityId, EntityKind, ShellEvent, Vector2};

#[derive(Clone, Debug)]
pub struct GameState {
    player: Entity,
    /// Insertion-ordered; collision scans walk this order.
    enemies: Vec<Entity>,
    projectiles: Vec<Entity>,
    score: u32,
    game_over: bool,
    render_width: f32,
    render_height: f32,
    enemy_size: (f32, f32),
    projectile_size: (f32, f32),
    next_id: u64,
    events: Vec<ShellEvent>,
}

impl GameState {
    /// Fresh session state.  The player sits horizontally centred on the
    /// bottom edge of the viewport.
    pub fn new(config: &GameConfig, render_width: f32, render_height: f32) -> Self {
        let player = Entity {
            id: EntityId(0),
            kind: EntityKind::Player,
            position: Vector2::new(
                render_width / 2.0 - config.player_width / 2.0,
                render_height - config.player_height,
            ),
            width: config.player_width,
            height: config.player_height,
            alive: true,
        };
        Self {
            events: vec![ShellEvent::Spawned {
                kind: EntityKind::Player,
                id: player.id,
                position: player.position,
            }],
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            game_over: false,
            render_width,
            render_height,
            enemy_size: (config.enemy_width, config.enemy_height),
            projectile_size: (config.projectile_width, config.projectile_height),
            next_id: 1,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────────

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Entity] {
        &self.projectiles
    }

    /// Snapshot of the live enemies, in spawn order.
    pub fn list_enemies(&self) -> Vec<Entity> {
        self.enemies.clone()
    }

    /// Snapshot of the live projectiles, in spawn order.
    pub fn list_projectiles(&self) -> Vec<Entity> {
        self.projectiles.clone()
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Entity> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn projectile(&self, id: EntityId) -> Option<&Entity> {
        self.projectiles.iter().find(|p| p.id == id)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn render_width(&self) -> f32 {
        self.render_width
    }

    pub fn render_height(&self) -> f32 {
        self.render_height
    }

    // ── Creation ──────────────────────────────────────────────────────────────

    pub fn add_enemy(&mut self, position: Vector2) -> EntityId {
        let (width, height) = self.enemy_size;
        let entity = self.make(EntityKind::Enemy, position, width, height);
        let id = entity.id;
        self.enemies.push(entity);
        id
    }

    pub fn add_projectile(&mut self, position: Vector2) -> EntityId {
        let (width, height) = self.projectile_size;
        let entity = self.make(EntityKind::Projectile, position, width, height);
        let id = entity.id;
        self.projectiles.push(entity);
        id
    }

    fn make(&mut self, kind: EntityKind, position: Vector2, width: f32, height: f32) -> Entity {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.events.push(ShellEvent::Spawned { kind, id, position });
        Entity {
            id,
            kind,
            position,
            width,
            height,
            alive: true,
        }
    }

    // ── Removal ───────────────────────────────────────────────────────────────

    /// Returns `true` if an enemy was actually removed.
    pub fn remove_enemy(&mut self, id: EntityId) -> bool {
        remove_from(&mut self.enemies, id, &mut self.events)
    }

    /// Returns `true` if a projectile was actually removed.
    pub fn remove_projectile(&mut self, id: EntityId) -> bool {
        remove_from(&mut self.projectiles, id, &mut self.events)
    }

    // ── Movement ──────────────────────────────────────────────────────────────

    pub fn move_enemy(&mut self, id: EntityId, position: Vector2) {
        move_in(&mut self.enemies, id, position, &mut self.events);
    }

    pub fn move_projectile(&mut self, id: EntityId, position: Vector2) {
        move_in(&mut self.projectiles, id, position, &mut self.events);
    }

    pub fn move_player(&mut self, position: Vector2) {
        self.player.position = position;
        self.events.push(ShellEvent::Moved {
            kind: EntityKind::Player,
            id: self.player.id,
            position,
        });
    }

    // ── Score & status ────────────────────────────────────────────────────────

    pub fn increment_score(&mut self) -> u32 {
        self.score = self.score.saturating_add(1);
        self.events.push(ShellEvent::ScoreChanged(self.score));
        self.score
    }

    /// Latch the terminal flag.  Only the first call publishes.
    pub fn mark_game_over(&mut self) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        self.events.push(ShellEvent::GameOver { score: self.score });
    }

    // ── Outbox ────────────────────────────────────────────────────────────────

    pub(crate) fn publish(&mut self, event: ShellEvent) {
        self.events.push(event);
    }

    /// Take every event recorded since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<ShellEvent> {
        std::mem::take(&mut self.events)
    }
}

fn remove_from(list: &mut Vec<Entity>, id: EntityId, events: &mut Vec<ShellEvent>) -> bool {
    let Some(index) = list.iter().position(|e| e.id == id) else {
        return false;
    };
    let removed = list.remove(index);
    events.push(ShellEvent::Removed {
        kind: removed.kind,
        id,
    });
    true
}

fn move_in(list: &mut [Entity], id: EntityId, position: Vector2, events: &mut Vec<ShellEvent>) {
    if let Some(entity) = list.iter_mut().find(|e| e.id == id) {
        entity.position = position;
        events.push(ShellEvent::Moved {
            kind: entity.kind,
            id,
            position,
        });
    }
}
