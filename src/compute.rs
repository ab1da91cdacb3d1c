/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `SessionState` (plus the session's `GameConfig` and, where needed, an RNG
/// handle) and returns a brand-new `SessionState`.  Side effects are limited
/// to the injected RNG.

use log::{debug, info, trace};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Bullet, GameStatus, Player, SessionState};
use crate::geometry::collide;
use crate::input::InputState;
use crate::motion::{advance_bullets, advance_enemies, advance_items, move_player};
use crate::power_up::PowerUpState;
use crate::spawner::{roll_item_drop, tick_enemy_spawner};

// ── Constructors ─────────────────────────────────────────────────────────────

/// The player centred horizontally near the bottom edge.
pub fn init_player(config: &GameConfig) -> Player {
    Player {
        x: config.canvas_width / 2.0 - config.player_width / 2.0,
        y: config.canvas_height - config.player_bottom_offset,
        width: config.player_width,
        height: config.player_height,
        speed: config.player_speed,
    }
}

/// Build the initial state of a run.
pub fn init_state(config: &GameConfig) -> SessionState {
    SessionState {
        player: init_player(config),
        bullets: Vec::new(),
        enemies: Vec::new(),
        items: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        enemy_spawn_timer: 0,
        power_up: PowerUpState::Inactive,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Fire from the centre of the ship: one straight bullet normally, a
/// three-way spread while the power-up is active.  No-op once the game is over.
pub fn player_shoot(state: &SessionState, config: &GameConfig) -> SessionState {
    if state.is_game_over() {
        return state.clone();
    }

    let p = &state.player;
    let x = p.x + p.width / 2.0 - config.bullet_width / 2.0;
    let dy = -config.bullet_speed;
    let spread: &[f32] = if state.power_up.is_active() {
        &[-config.spread_dx, 0.0, config.spread_dx]
    } else {
        &[0.0]
    };

    let mut bullets = state.bullets.clone();
    bullets.extend(spread.iter().map(|&dx| Bullet {
        x,
        y: p.y,
        width: config.bullet_width,
        height: config.bullet_height,
        dx,
        dy,
    }));
    SessionState {
        bullets,
        ..state.clone()
    }
}

// ── Collision resolution ─────────────────────────────────────────────────────

/// Resolve all collisions for one tick, in order: bullets ↔ enemies, enemies ↔
/// player, items ↔ player.
///
/// Bullets are scanned from the newest down; for each bullet the enemies are
/// also scanned newest-first and the first live hit wins, so one bullet
/// destroys at most one enemy.  Items dropped by this tick's kills are
/// already eligible for pickup.
pub fn resolve_collisions(
    state: &SessionState,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> SessionState {
    // ── 1. Bullets ↔ enemies ─────────────────────────────────────────────────
    let mut bullet_alive = vec![true; state.bullets.len()];
    let mut enemy_alive = vec![true; state.enemies.len()];
    let mut items = state.items.clone();
    let mut kills: u32 = 0;

    for bi in (0..state.bullets.len()).rev() {
        let bullet = &state.bullets[bi];
        let hit = (0..state.enemies.len())
            .rev()
            .find(|&ei| enemy_alive[ei] && collide(bullet, &state.enemies[ei]));

        if let Some(ei) = hit {
            let enemy = &state.enemies[ei];
            if let Some(item) = roll_item_drop(enemy, config, rng) {
                items.push(item);
            }
            bullet_alive[bi] = false;
            enemy_alive[ei] = false;
            kills += 1;
            debug!("enemy destroyed at ({:.1}, {:.1})", enemy.x, enemy.y);
        }
    }

    let bullets: Vec<_> = state
        .bullets
        .iter()
        .zip(&bullet_alive)
        .filter(|&(_, &alive)| alive)
        .map(|(b, _)| b.clone())
        .collect();
    let enemies: Vec<_> = state
        .enemies
        .iter()
        .zip(&enemy_alive)
        .filter(|&(_, &alive)| alive)
        .map(|(e, _)| e.clone())
        .collect();
    let score = state
        .score
        .saturating_add(kills.saturating_mul(config.score_per_enemy));

    // ── 2. Enemies ↔ player ──────────────────────────────────────────────────
    let status = if enemies.iter().any(|e| collide(&state.player, e)) {
        info!("player hit, game over with score {score}");
        GameStatus::GameOver
    } else {
        state.status.clone()
    };

    // ── 3. Items ↔ player ────────────────────────────────────────────────────
    let before = items.len();
    let items: Vec<_> = items
        .into_iter()
        .filter(|i| !collide(&state.player, i))
        .collect();
    let power_up = if items.len() < before {
        debug!("picked up {} item(s)", before - items.len());
        PowerUpState::activate(config.power_up_duration)
    } else {
        state.power_up
    };

    SessionState {
        bullets,
        enemies,
        items,
        score,
        status,
        power_up,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure, RNG is injected) ───────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Once the game is over the state is returned unchanged until a restart.
pub fn tick(
    state: &SessionState,
    input: &InputState,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> SessionState {
    if state.is_game_over() {
        return state.clone();
    }

    // ── 1. Player ────────────────────────────────────────────────────────────
    let player = move_player(&state.player, input, config);

    // ── 2. Bullets ───────────────────────────────────────────────────────────
    let bullets = advance_bullets(&state.bullets, config);

    // ── 3. Spawn, then move enemies ──────────────────────────────────────────
    let (enemy_spawn_timer, spawned) = tick_enemy_spawner(state.enemy_spawn_timer, config, rng);
    let mut enemies = state.enemies.clone();
    enemies.extend(spawned);
    let enemies = advance_enemies(&enemies, config);

    // ── 4. Items ─────────────────────────────────────────────────────────────
    let items = advance_items(&state.items, config);

    // ── 5. Power-up decay ────────────────────────────────────────────────────
    let power_up = state.power_up.tick();

    trace!(
        "tick: {} bullets, {} enemies, {} items",
        bullets.len(),
        enemies.len(),
        items.len()
    );

    // ── 6. Collisions ────────────────────────────────────────────────────────
    let moved = SessionState {
        player,
        bullets,
        enemies,
        items,
        enemy_spawn_timer,
        power_up,
        ..state.clone()
    };
    resolve_collisions(&moved, config, rng)
}
