use volley_shooter::config::GameConfig;
use volley_shooter::entities::*;
use volley_shooter::scheduler::*;
use volley_shooter::store::GameState;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Spawn cycle pushed far out so tests control every enemy.
fn quiet_config() -> GameConfig {
    GameConfig {
        enemy_spawn_interval_ms: 1_000_000,
        ..GameConfig::default()
    }
}

fn make_world(config: &GameConfig) -> (GameState, Scheduler) {
    let mut state = GameState::new(config, 800.0, 600.0);
    state.drain_events();
    (state, Scheduler::new(config))
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── clock ─────────────────────────────────────────────────────────────────────

#[test]
fn clock_accumulates_elapsed_time() {
    let config = quiet_config();
    let (mut s, mut sched) = make_world(&config);
    let mut rng = seeded_rng();
    sched.advance(33, &mut s, &mut rng);
    sched.advance(33, &mut s, &mut rng);
    assert_eq!(sched.now(), 66);
}

// ── enemy spawn cycle ─────────────────────────────────────────────────────────

#[test]
fn first_wave_arrives_after_one_interval() {
    let config = GameConfig::default();
    let (mut s, mut sched) = make_world(&config);
    let mut rng = seeded_rng();
    sched.advance(999, &mut s, &mut rng);
    assert!(s.enemies().is_empty());
    sched.advance(1, &mut s, &mut rng);
    assert_eq!(s.enemies().len(), 3);
    sched.advance(1_000, &mut s, &mut rng);
    assert_eq!(s.enemies().len(), 6);
}

#[test]
fn large_advance_fires_every_missed_wave() {
    let config = GameConfig::default();
    let (mut s, mut sched) = make_world(&config);
    sched.advance(5_000, &mut s, &mut seeded_rng());
    assert_eq!(s.enemies().len(), 15);
}

// ── enemy descent ─────────────────────────────────────────────────────────────

#[test]
fn enemies_step_down_every_hundred_ms() {
    let config = quiet_config();
    let (mut s, mut sched) = make_world(&config);
    let mut rng = seeded_rng();
    let id = s.add_enemy(Vector2::new(0.0, 0.0));
    sched.advance(99, &mut s, &mut rng);
    assert_eq!(s.enemy(id).unwrap().position.y, 0.0);
    sched.advance(1, &mut s, &mut rng);
    assert_eq!(s.enemy(id).unwrap().position.y, 20.0);
    sched.advance(1_000, &mut s, &mut rng);
    assert_eq!(s.enemy(id).unwrap().position.y, 220.0);
}

#[test]
fn enemies_are_not_removed_offscreen_by_default() {
    let config = quiet_config();
    let (mut s, mut sched) = make_world(&config);
    let id = s.add_enemy(Vector2::new(0.0, 500.0));
    sched.advance(10_000, &mut s, &mut seeded_rng());
    assert_eq!(s.enemy(id).unwrap().position.y, 2_500.0);
}

#[test]
fn enemies_below_viewport_are_culled_when_enabled() {
    let config = GameConfig {
        cull_offscreen: true,
        ..quiet_config()
    };
    let (mut s, mut sched) = make_world(&config);
    let mut rng = seeded_rng();
    let id = s.add_enemy(Vector2::new(0.0, 500.0));
    sched.advance(400, &mut s, &mut rng);
    assert_eq!(s.enemy(id).unwrap().position.y, 580.0);
    sched.advance(100, &mut s, &mut rng);
    assert!(s.enemy(id).is_none());
}

// ── projectile tasks ──────────────────────────────────────────────────────────

#[test]
fn burst_registers_one_task_per_projectile() {
    let config = quiet_config();
    let (mut s, mut sched) = make_world(&config);
    let ids = sched.fire_burst(&mut s);
    assert_eq!(ids.len(), 3);
    assert_eq!(sched.pending_projectile_tasks(), 3);
    assert!(ids.iter().all(|&id| sched.is_tracking(id)));
}

#[test]
fn projectile_rises_each_tick() {
    let config = quiet_config();
    let (mut s, mut sched) = make_world(&config);
    let id = s.add_projectile(Vector2::new(0.0, 500.0));
    sched.track_projectile(id);
    sched.advance(100, &mut s, &mut seeded_rng());
    // 10 ticks × 2 px
    assert_eq!(s.projectile(id).unwrap().position.y, 480.0);
}

#[test]
fn projectile_hit_removes_both_and_scores() {
    let config = quiet_config();
    let (mut s, mut sched) = make_world(&config);
    let enemy = s.add_enemy(Vector2::new(100.0, 400.0));
    let proj = s.add_projectile(Vector2::new(125.0, 500.0));
    sched.track_projectile(proj);

    let outcome = sched.tick_projectile(&mut s, proj);

    assert_eq!(outcome, ProjectileTick::Hit { enemy, score: 1 });
    assert!(s.list_enemies().is_empty());
    assert!(s.list_projectiles().is_empty());
    assert!(!sched.is_tracking(proj));
    assert_eq!(s.score(), 1);
}

#[test]
fn one_projectile_kills_at_most_one_enemy() {
    let config = quiet_config();
    let (mut s, mut sched) = make_world(&config);
    let first = s.add_enemy(Vector2::new(100.0, 400.0));
    let second = s.add_enemy(Vector2::new(120.0, 400.0));
    let proj = s.add_projectile(Vector2::new(125.0, 500.0));
    sched.track_projectile(proj);

    sched.advance(10, &mut s, &mut seeded_rng());

    assert!(s.enemy(first).is_none());
    assert!(s.enemy(second).is_some());
    assert_eq!(s.score(), 1);
}

#[test]
fn destroyed_projectile_task_never_fires_again() {
    let config = quiet_config();
    let (mut s, mut sched) = make_world(&config);
    let ids = sched.fire_burst(&mut s);
    sched.destroy_projectile(&mut s, ids[0]);
    assert!(!sched.is_tracking(ids[0]));
    s.drain_events();

    sched.advance(100, &mut s, &mut seeded_rng());

    let moved: Vec<EntityId> = s
        .drain_events()
        .into_iter()
        .filter_map(|ev| match ev {
            ShellEvent::Moved { id, .. } => Some(id),
            _ => None,
        })
        .collect();
    assert!(!moved.contains(&ids[0]));
    assert!(moved.contains(&ids[1]));
    assert!(s.projectile(ids[0]).is_none());
}

#[test]
fn stale_task_is_dropped() {
    let config = quiet_config();
    let (mut s, mut sched) = make_world(&config);
    let id = s.add_projectile(Vector2::new(0.0, 100.0));
    sched.track_projectile(id);
    s.remove_projectile(id);
    assert_eq!(sched.tick_projectile(&mut s, id), ProjectileTick::Stale);
    assert_eq!(sched.pending_projectile_tasks(), 0);
}

#[test]
fn projectiles_keep_flying_offscreen_by_default() {
    let config = quiet_config();
    let (mut s, mut sched) = make_world(&config);
    let id = s.add_projectile(Vector2::new(0.0, 0.0));
    sched.track_projectile(id);
    sched.advance(1_000, &mut s, &mut seeded_rng());
    assert_eq!(s.projectile(id).unwrap().position.y, -200.0);
    assert!(sched.is_tracking(id));
}

#[test]
fn projectiles_above_viewport_are_culled_when_enabled() {
    let config = GameConfig {
        cull_offscreen: true,
        ..quiet_config()
    };
    let (mut s, mut sched) = make_world(&config);
    let mut rng = seeded_rng();
    let id = s.add_projectile(Vector2::new(0.0, 0.0));
    sched.track_projectile(id);
    sched.advance(240, &mut s, &mut rng);
    assert_eq!(s.projectile(id).unwrap().position.y, -48.0);
    sched.advance(10, &mut s, &mut rng);
    assert!(s.projectile(id).is_none());
    assert!(!sched.is_tracking(id));
}

// ── end-to-end ────────────────────────────────────────────────────────────────

#[test]
fn burst_against_descending_enemy() {
    let config = quiet_config();
    let (mut s, mut sched) = make_world(&config);
    let mut rng = seeded_rng();
    let enemy = s.add_enemy(Vector2::new(100.0, 0.0));
    s.move_player(Vector2::new(100.0, 500.0));

    let ids = sched.fire_burst(&mut s);
    assert!(s
        .projectiles()
        .iter()
        .all(|p| p.position == Vector2::new(125.0, 500.0)));

    // t=1000: enemy at y=200 (bottom 300), projectiles at y=300 — touching only
    sched.advance(1_000, &mut s, &mut rng);
    assert_eq!(s.score(), 0);
    assert_eq!(s.enemy(enemy).unwrap().position.y, 200.0);
    assert_eq!(s.projectiles().len(), 3);

    // t=1010: the first projectile of the burst gets there first
    sched.advance(10, &mut s, &mut rng);
    assert_eq!(s.score(), 1);
    assert!(s.list_enemies().is_empty());
    let left: Vec<EntityId> = s.list_projectiles().iter().map(|p| p.id).collect();
    assert_eq!(left, vec![ids[1], ids[2]]);
    assert_eq!(sched.pending_projectile_tasks(), 2);

    // the survivors keep climbing
    sched.advance(100, &mut s, &mut rng);
    assert!(s.projectiles().iter().all(|p| p.position.y == 278.0));
    assert_eq!(s.score(), 1);
}

#[test]
fn firing_without_enemies_never_scores() {
    let config = quiet_config();
    let (mut s, mut sched) = make_world(&config);
    let mut rng = seeded_rng();
    for _ in 0..5 {
        sched.fire_burst(&mut s);
        sched.advance(1_000, &mut s, &mut rng);
    }
    assert_eq!(s.score(), 0);
    assert_eq!(s.projectiles().len(), 15);
}
