use volley_shooter::config::GameConfig;
use volley_shooter::entities::*;
use volley_shooter::store::*;

fn make_state() -> GameState {
    let mut s = GameState::new(&GameConfig::default(), 800.0, 600.0);
    s.drain_events();
    s
}

// ── construction ──────────────────────────────────────────────────────────────

#[test]
fn new_state_is_empty_with_centred_player() {
    let s = GameState::new(&GameConfig::default(), 800.0, 600.0);
    assert!(s.enemies().is_empty());
    assert!(s.projectiles().is_empty());
    assert_eq!(s.score(), 0);
    assert!(!s.is_game_over());
    // 800/2 - 100/2, 600 - 100
    assert_eq!(s.player().position, Vector2::new(350.0, 500.0));
    assert_eq!(s.player().kind, EntityKind::Player);
}

#[test]
fn new_state_announces_player() {
    let mut s = GameState::new(&GameConfig::default(), 800.0, 600.0);
    let events = s.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        ShellEvent::Spawned { kind: EntityKind::Player, .. }
    ));
}

// ── add / list ────────────────────────────────────────────────────────────────

#[test]
fn ids_are_unique_across_kinds() {
    let mut s = make_state();
    let a = s.add_enemy(Vector2::new(0.0, 0.0));
    let b = s.add_projectile(Vector2::new(0.0, 0.0));
    let c = s.add_enemy(Vector2::new(0.0, 0.0));
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
    assert_ne!(a, s.player().id);
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut s = make_state();
    let a = s.add_enemy(Vector2::new(0.0, 0.0));
    s.remove_enemy(a);
    let b = s.add_enemy(Vector2::new(0.0, 0.0));
    assert_ne!(a, b);
}

#[test]
fn entities_take_their_kind_size() {
    let mut s = make_state();
    let e = s.add_enemy(Vector2::new(1.0, 2.0));
    let p = s.add_projectile(Vector2::new(3.0, 4.0));
    let enemy = s.enemy(e).unwrap();
    assert_eq!((enemy.width, enemy.height), (100.0, 100.0));
    let proj = s.projectile(p).unwrap();
    assert_eq!((proj.width, proj.height), (50.0, 50.0));
    assert_eq!(proj.position, Vector2::new(3.0, 4.0));
}

#[test]
fn list_preserves_insertion_order() {
    let mut s = make_state();
    let ids: Vec<_> = (0..4)
        .map(|i| s.add_enemy(Vector2::new(i as f32, 0.0)))
        .collect();
    s.remove_enemy(ids[1]);
    let listed: Vec<_> = s.list_enemies().iter().map(|e| e.id).collect();
    assert_eq!(listed, vec![ids[0], ids[2], ids[3]]);
}

#[test]
fn list_is_a_snapshot() {
    let mut s = make_state();
    let id = s.add_projectile(Vector2::new(0.0, 0.0));
    let snapshot = s.list_projectiles();
    s.remove_projectile(id);
    assert_eq!(snapshot.len(), 1);
    assert!(s.list_projectiles().is_empty());
}

// ── remove ────────────────────────────────────────────────────────────────────

#[test]
fn removing_unknown_id_is_a_no_op() {
    let mut s = make_state();
    s.add_enemy(Vector2::new(0.0, 0.0));
    s.add_projectile(Vector2::new(0.0, 0.0));
    assert!(!s.remove_enemy(EntityId(999)));
    assert!(!s.remove_projectile(EntityId(999)));
    assert_eq!(s.enemies().len(), 1);
    assert_eq!(s.projectiles().len(), 1);
    // only the two spawns were published
    assert_eq!(s.drain_events().len(), 2);
}

#[test]
fn removal_is_idempotent() {
    let mut s = make_state();
    let id = s.add_enemy(Vector2::new(0.0, 0.0));
    assert!(s.remove_enemy(id));
    assert!(!s.remove_enemy(id));
    assert!(s.enemies().is_empty());
}

#[test]
fn enemy_and_projectile_ids_do_not_cross_remove() {
    let mut s = make_state();
    let e = s.add_enemy(Vector2::new(0.0, 0.0));
    assert!(!s.remove_projectile(e));
    assert_eq!(s.enemies().len(), 1);
}

// ── move ──────────────────────────────────────────────────────────────────────

#[test]
fn move_updates_position_and_publishes() {
    let mut s = make_state();
    let id = s.add_enemy(Vector2::new(0.0, 0.0));
    s.drain_events();
    s.move_enemy(id, Vector2::new(0.0, 20.0));
    assert_eq!(s.enemy(id).unwrap().position.y, 20.0);
    assert_eq!(
        s.drain_events(),
        vec![ShellEvent::Moved {
            kind: EntityKind::Enemy,
            id,
            position: Vector2::new(0.0, 20.0)
        }]
    );
}

#[test]
fn moving_unknown_id_is_silent() {
    let mut s = make_state();
    s.move_projectile(EntityId(42), Vector2::new(1.0, 1.0));
    assert!(s.drain_events().is_empty());
}

#[test]
fn move_player() {
    let mut s = make_state();
    s.move_player(Vector2::new(10.0, 20.0));
    assert_eq!(s.player().position, Vector2::new(10.0, 20.0));
}

// ── score & game over ─────────────────────────────────────────────────────────

#[test]
fn increment_score_returns_new_value() {
    let mut s = make_state();
    assert_eq!(s.increment_score(), 1);
    assert_eq!(s.increment_score(), 2);
    assert_eq!(s.score(), 2);
    assert_eq!(
        s.drain_events(),
        vec![ShellEvent::ScoreChanged(1), ShellEvent::ScoreChanged(2)]
    );
}

#[test]
fn game_over_latches_and_publishes_once() {
    let mut s = make_state();
    s.increment_score();
    s.drain_events();
    s.mark_game_over();
    s.mark_game_over();
    assert!(s.is_game_over());
    assert_eq!(s.drain_events(), vec![ShellEvent::GameOver { score: 1 }]);
}
