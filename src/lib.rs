//! Simulation core for a small vertical arcade shooter.
//!
//! Everything here is pure in-memory state driven by elapsed time and key
//! events.  Terminal I/O lives in the binary.

pub mod config;
pub mod constants;
pub mod entities;
pub mod game_over;
pub mod geometry;
pub mod input;
pub mod scheduler;
pub mod session;
pub mod spawner;
pub mod store;
