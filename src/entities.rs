/// All game entity types: pure data, no logic.

use crate::geometry::{Bounded, Rect};
use crate::power_up::PowerUpState;

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A player bullet.  Velocity is stored per bullet so the angled outer shots
/// of a spread volley keep drifting sideways.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub dx: f32,
    pub dy: f32,
}

// ── Enemies & items ───────────────────────────────────────────────────────────

/// Falls at the shared `enemy_speed`; there is no per-enemy speed.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A power-up drop left behind by a destroyed enemy.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

macro_rules! impl_bounded {
    ($($ty:ty),*) => {
        $(impl Bounded for $ty {
            fn bounds(&self) -> Rect {
                Rect::new(self.x, self.y, self.width, self.height)
            }
        })*
    };
}

impl_bounded!(Player, Bullet, Enemy, Item);

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire state of one run.  Cloneable so the pure update functions in
/// `compute` can return a new copy without mutating the original; a restart
/// replaces it wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub player: Player,
    /// Spawn order is preserved; collision scans walk these in reverse.
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
    pub score: u32,
    pub status: GameStatus,
    /// Ticks since the last enemy spawn.
    pub enemy_spawn_timer: u32,
    pub power_up: PowerUpState,
}

impl SessionState {
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

/// Read-only view handed to the renderer after each tick.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub player: &'a Player,
    pub bullets: &'a [Bullet],
    pub enemies: &'a [Enemy],
    pub items: &'a [Item],
    pub score: u32,
    pub game_over: bool,
    pub power_up_active: bool,
}

impl<'a> From<&'a SessionState> for Snapshot<'a> {
    fn from(state: &'a SessionState) -> Self {
        Snapshot {
            player: &state.player,
            bullets: &state.bullets,
            enemies: &state.enemies,
            items: &state.items,
            score: state.score,
            game_over: state.is_game_over(),
            power_up_active: state.power_up.is_active(),
        }
    }
}
