/// Per-tick motion integration and off-screen culling.
///
/// Culling compacts each store with `filter_map`, which removes any number of
/// entities in one pass without skipping neighbours.

use crate::config::GameConfig;
use crate::entities::{Bullet, Enemy, Item, Player};
use crate::input::InputState;

/// Move the player according to the latched direction keys.  A step that
/// would leave `[0, canvas_width - width]` is refused outright rather than
/// clamped.
pub fn move_player(player: &Player, input: &InputState, config: &GameConfig) -> Player {
    let max_x = config.canvas_width - player.width;
    let mut x = player.x;

    if input.left {
        let next = x - player.speed;
        if next >= 0.0 {
            x = next;
        }
    }
    if input.right {
        let next = x + player.speed;
        if next <= max_x {
            x = next;
        }
    }

    Player { x, ..player.clone() }
}

pub fn advance_bullets(bullets: &[Bullet], config: &GameConfig) -> Vec<Bullet> {
    bullets
        .iter()
        .filter_map(|b| {
            let x = b.x + b.dx;
            let y = b.y + b.dy;
            if y < 0.0 || x < 0.0 || x > config.canvas_width {
                None
            } else {
                Some(Bullet { x, y, ..b.clone() })
            }
        })
        .collect()
}

pub fn advance_enemies(enemies: &[Enemy], config: &GameConfig) -> Vec<Enemy> {
    enemies
        .iter()
        .filter_map(|e| {
            let y = e.y + config.enemy_speed;
            (y <= config.canvas_height).then(|| Enemy { y, ..e.clone() })
        })
        .collect()
}

pub fn advance_items(items: &[Item], config: &GameConfig) -> Vec<Item> {
    items
        .iter()
        .filter_map(|i| {
            let y = i.y + config.item_speed;
            (y <= config.canvas_height).then(|| Item { y, ..i.clone() })
        })
        .collect()
}
