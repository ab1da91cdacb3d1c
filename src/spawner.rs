/// Enemy and item spawners.  All randomness comes through the injected `rng`.

use log::debug;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Enemy, Item};

/// Advance the spawn timer by one tick.  Returns the new timer value and, when
/// the interval elapses, a freshly spawned enemy just above the visible area.
pub fn tick_enemy_spawner(
    timer: u32,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> (u32, Option<Enemy>) {
    let timer = timer + 1;
    if timer < config.enemy_spawn_interval {
        return (timer, None);
    }

    let max_x = config.canvas_width - config.enemy_width;
    let x = if max_x > 0.0 {
        rng.gen_range(0.0..max_x)
    } else {
        0.0
    };
    debug!("enemy spawned at x={x:.1}");
    let enemy = Enemy {
        x,
        y: -config.enemy_height,
        width: config.enemy_width,
        height: config.enemy_height,
    };
    (0, Some(enemy))
}

/// Roll the drop chance for one destroyed enemy; on success the item appears
/// at the enemy's top-left corner.
pub fn roll_item_drop(enemy: &Enemy, config: &GameConfig, rng: &mut impl Rng) -> Option<Item> {
    if !rng.gen_bool(config.item_drop_chance) {
        return None;
    }
    debug!("item dropped at ({:.1}, {:.1})", enemy.x, enemy.y);
    Some(Item {
        x: enemy.x,
        y: enemy.y,
        width: config.item_width,
        height: config.item_height,
    })
}
