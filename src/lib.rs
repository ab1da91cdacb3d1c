//! Canvas Shooter - a single-screen arcade shooter
//!
//! Core modules:
//! - `compute`: pure per-tick game logic (motion, spawns, collisions)
//! - `session`: owns one run and applies input and ticks to it
//! - `scheduler`: frame driver the host plugs into
//! - `display`: terminal renderer for the bundled binary

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod motion;
pub mod power_up;
pub mod scheduler;
pub mod session;
pub mod spawner;

pub use config::{ConfigError, GameConfig};
pub use entities::{Bullet, Enemy, GameStatus, Item, Player, SessionState, Snapshot};
pub use geometry::{overlaps, Rect};
pub use input::{InputState, Key};
pub use power_up::PowerUpState;
pub use session::Session;
