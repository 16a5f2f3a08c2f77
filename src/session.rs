//! One play session: `Init → Playing → Terminal`, and back to `Init` on reset.
//!
//! The session owns the [`GameState`], the [`Scheduler`] and the RNG.  The
//! host shell drives it with elapsed time and key events, and reads it back
//! through [`Session::state`] and [`Session::drain_events`].

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{EntityId, SessionPhase, ShellEvent};
use crate::game_over;
use crate::input::{self, Key, KeyAction};
use crate::scheduler::Scheduler;
use crate::store::GameState;

/// Emitted once when the player collides with an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub score: u32,
    pub enemy: EntityId,
}

pub struct Session<R: Rng> {
    config: GameConfig,
    render_width: f32,
    render_height: f32,
    state: GameState,
    scheduler: Scheduler,
    rng: R,
    phase: SessionPhase,
}

impl<R: Rng> Session<R> {
    /// Build a session in `Init`.  The viewport size is read once here.
    pub fn new(config: GameConfig, render_width: f32, render_height: f32, rng: R) -> Self {
        Self {
            state: GameState::new(&config, render_width, render_height),
            scheduler: Scheduler::new(&config),
            config,
            render_width,
            render_height,
            rng,
            phase: SessionPhase::Init,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view for rendering.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct store access for scripted scenarios and test harnesses.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// `Init → Playing`.  No-op in any other phase.
    pub fn start(&mut self) {
        if self.phase == SessionPhase::Init {
            self.phase = SessionPhase::Playing;
            tracing::info!(
                width = self.render_width,
                height = self.render_height,
                "session started"
            );
        }
    }

    /// Let `elapsed_ms` of game time pass.  Only runs while playing.
    pub fn advance(&mut self, elapsed_ms: u64) -> Option<GameOver> {
        if self.phase != SessionPhase::Playing {
            return None;
        }
        self.scheduler
            .advance(elapsed_ms, &mut self.state, &mut self.rng);
        if self.config.continuous_player_check {
            return self.check_player();
        }
        None
    }

    /// Process one key-down.  `None` stands for a key with no binding; it
    /// still triggers the contact check, like any other key event.
    ///
    /// Returns the game-over signal when this key event ended the session.
    pub fn handle_key(&mut self, key: Option<Key>) -> Option<GameOver> {
        if self.phase != SessionPhase::Playing {
            return None;
        }
        if let Some(key) = key {
            match input::apply_key(key, &mut self.state, &mut self.scheduler, &self.config) {
                KeyAction::Moved(p) => tracing::trace!(x = p.x, y = p.y, "player moved"),
                KeyAction::Fired(ids) => tracing::trace!(count = ids.len(), "player fired"),
            }
        }
        self.check_player()
    }

    fn check_player(&mut self) -> Option<GameOver> {
        let enemy = game_over::player_hit(&self.state)?;
        self.state.mark_game_over();
        self.phase = SessionPhase::Terminal;
        let score = self.state.score();
        tracing::info!(score, enemy = enemy.0, "game over");
        Some(GameOver { score, enemy })
    }

    /// Discard every entity, timer and the score, and return to `Init`.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config, self.render_width, self.render_height);
        self.scheduler = Scheduler::new(&self.config);
        self.phase = SessionPhase::Init;
        let initial = self.state.drain_events();
        self.state.publish(ShellEvent::SessionReset);
        for event in initial {
            self.state.publish(event);
        }
        tracing::info!("session reset");
    }

    /// Reset and immediately start playing again.
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    pub fn drain_events(&mut self) -> Vec<ShellEvent> {
        self.state.drain_events()
    }
}
