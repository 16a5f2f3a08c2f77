//! Virtual-time scheduler for every periodic behavior in a session.
//!
//! Time is an integer millisecond clock advanced explicitly by the host.
//! Three kinds of timer exist:
//!
//! * the enemy spawn cycle (one wave per `enemy_spawn_interval_ms`),
//! * enemy descent (every live enemy steps down per `enemy_descent_interval_ms`),
//! * one ascent task per projectile, keyed by the projectile's id.
//!
//! Timers fire in deadline order.  Timers due at the same millisecond fire in
//! registration order.  Each callback runs to completion before the next one
//! starts, so all store access inside a callback is sequential.
//!
//! A projectile task is removed from the task map in the same call that
//! removes its projectile from the store; a cancelled task never fires again.

use std::collections::BTreeMap;

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{EntityId, Vector2};
use crate::geometry;
use crate::spawner;
use crate::store::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerKind {
    EnemySpawn,
    EnemyDescent,
    Projectile(EntityId),
}

#[derive(Clone, Copy, Debug)]
struct Recurring {
    interval: u64,
    next_due: u64,
    seq: u64,
}

impl Recurring {
    fn new(interval: u64, now: u64, seq: u64) -> Self {
        let interval = interval.max(1);
        Self {
            interval,
            next_due: now + interval,
            seq,
        }
    }

    fn reschedule(&mut self) {
        self.next_due += self.interval;
    }
}

/// Pending upward travel of a single projectile.
#[derive(Clone, Copy, Debug)]
struct ProjectileTask {
    next_due: u64,
    seq: u64,
}

/// What happened to a projectile on one of its ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileTick {
    /// Still flying.
    Advanced,
    /// Hit an enemy; both are gone and the score went up.
    Hit { enemy: EntityId, score: u32 },
    /// Left the top of the viewport and was culled.
    Culled,
    /// The projectile was no longer in the store; its task was dropped.
    Stale,
}

pub struct Scheduler {
    config: GameConfig,
    now: u64,
    spawn: Recurring,
    descent: Recurring,
    projectile_tasks: BTreeMap<EntityId, ProjectileTask>,
    next_seq: u64,
}

impl Scheduler {
    /// Arm the spawn and descent cycles at time zero.  The first wave lands
    /// one full spawn interval after start.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            spawn: Recurring::new(config.enemy_spawn_interval_ms, 0, 0),
            descent: Recurring::new(config.enemy_descent_interval_ms, 0, 1),
            config: config.clone(),
            now: 0,
            projectile_tasks: BTreeMap::new(),
            next_seq: 2,
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn pending_projectile_tasks(&self) -> usize {
        self.projectile_tasks.len()
    }

    pub fn is_tracking(&self, projectile: EntityId) -> bool {
        self.projectile_tasks.contains_key(&projectile)
    }

    // ── Registration / cancellation ───────────────────────────────────────────

    /// Start the ascent task for a projectile already in the store.
    pub fn track_projectile(&mut self, projectile: EntityId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let interval = self.config.projectile_tick_ms.max(1);
        self.projectile_tasks.insert(
            projectile,
            ProjectileTask {
                next_due: self.now + interval,
                seq,
            },
        );
    }

    /// Fire a burst from the player and give each projectile its own task.
    pub fn fire_burst(&mut self, state: &mut GameState) -> Vec<EntityId> {
        let ids = spawner::fire_burst(state, &self.config);
        for &id in &ids {
            self.track_projectile(id);
        }
        ids
    }

    /// Cancel the projectile's task, then drop it from the store.
    pub fn destroy_projectile(&mut self, state: &mut GameState, projectile: EntityId) {
        self.projectile_tasks.remove(&projectile);
        state.remove_projectile(projectile);
    }

    // ── Time ──────────────────────────────────────────────────────────────────

    /// Move the clock forward by `elapsed_ms`, firing every timer that falls
    /// due on the way.
    pub fn advance(&mut self, elapsed_ms: u64, state: &mut GameState, rng: &mut impl Rng) {
        let target = self.now + elapsed_ms;
        while let Some((due, timer)) = self.next_timer(target) {
            self.now = due;
            match timer {
                TimerKind::EnemySpawn => {
                    self.spawn.reschedule();
                    spawner::spawn_enemy_wave(state, rng, &self.config);
                }
                TimerKind::EnemyDescent => {
                    self.descent.reschedule();
                    self.descend_enemies(state);
                }
                TimerKind::Projectile(id) => {
                    if let Some(task) = self.projectile_tasks.get_mut(&id) {
                        task.next_due += self.config.projectile_tick_ms.max(1);
                    }
                    self.tick_projectile(state, id);
                }
            }
        }
        self.now = target;
    }

    fn next_timer(&self, limit: u64) -> Option<(u64, TimerKind)> {
        let fixed = [
            (self.spawn.next_due, self.spawn.seq, TimerKind::EnemySpawn),
            (self.descent.next_due, self.descent.seq, TimerKind::EnemyDescent),
        ];
        let tasks = self
            .projectile_tasks
            .iter()
            .map(|(&id, task)| (task.next_due, task.seq, TimerKind::Projectile(id)));

        fixed
            .into_iter()
            .chain(tasks)
            .filter(|&(due, _, _)| due <= limit)
            .min_by_key(|&(due, seq, _)| (due, seq))
            .map(|(due, _, timer)| (due, timer))
    }

    // ── Callbacks ─────────────────────────────────────────────────────────────

    /// One descent step for every live enemy.  Enemies are not bounded; with
    /// `cull_offscreen` they are dropped once fully below the viewport.
    pub fn descend_enemies(&mut self, state: &mut GameState) {
        let step = self.config.enemy_descent_step;
        for enemy in state.list_enemies() {
            let next = Vector2::new(enemy.position.x, enemy.position.y + step);
            state.move_enemy(enemy.id, next);
            if self.config.cull_offscreen && next.y >= state.render_height() {
                state.remove_enemy(enemy.id);
            }
        }
    }

    /// One ascent step for a single projectile, followed by its hit test.
    ///
    /// Enemies are scanned in spawn order and the first overlap wins, so a
    /// projectile kills at most one enemy and then stops.
    pub fn tick_projectile(&mut self, state: &mut GameState, id: EntityId) -> ProjectileTick {
        let Some(projectile) = state.projectile(id).cloned() else {
            self.projectile_tasks.remove(&id);
            return ProjectileTick::Stale;
        };

        let next = Vector2::new(
            projectile.position.x,
            projectile.position.y - self.config.projectile_step,
        );
        state.move_projectile(id, next);

        let mut probe = projectile.rect();
        probe.y = next.y;
        if let Some(enemy) = geometry::first_hit(probe, state.enemies()) {
            self.destroy_projectile(state, id);
            state.remove_enemy(enemy);
            let score = state.increment_score();
            tracing::info!(projectile = id.0, enemy = enemy.0, score, "enemy destroyed");
            return ProjectileTick::Hit { enemy, score };
        }

        if self.config.cull_offscreen && next.y + projectile.height <= 0.0 {
            self.destroy_projectile(state, id);
            return ProjectileTick::Culled;
        }

        ProjectileTick::Advanced
    }
}
