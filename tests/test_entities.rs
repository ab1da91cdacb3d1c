use canvas_shooter::compute::init_state;
use canvas_shooter::config::GameConfig;
use canvas_shooter::entities::*;
use canvas_shooter::geometry::{Bounded, Rect};
use canvas_shooter::power_up::PowerUpState;

#[test]
fn entity_bounds_match_fields() {
    let b = Bullet { x: 1.0, y: 2.0, width: 5.0, height: 15.0, dx: -2.0, dy: -7.0 };
    assert_eq!(b.bounds(), Rect::new(1.0, 2.0, 5.0, 15.0));

    let e = Enemy { x: 3.0, y: -50.0, width: 50.0, height: 50.0 };
    assert_eq!(e.bounds(), Rect::new(3.0, -50.0, 50.0, 50.0));

    let i = Item { x: 7.0, y: 8.0, width: 20.0, height: 20.0 };
    assert_eq!(i.bounds().right(), 27.0);
    assert_eq!(i.bounds().bottom(), 28.0);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(&GameConfig::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy { x: 5.0, y: 5.0, width: 50.0, height: 50.0 });

    assert_eq!(original.player.x, 295.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}

#[test]
fn snapshot_reflects_state() {
    let mut state = init_state(&GameConfig::default());
    state.score = 40;
    state.items.push(Item { x: 7.0, y: 8.0, width: 20.0, height: 20.0 });

    let snap = Snapshot::from(&state);
    assert_eq!(snap.score, 40);
    assert!(!snap.game_over);
    assert!(!snap.power_up_active);
    assert_eq!(snap.items.len(), 1);
    assert_eq!(snap.player, &state.player);

    state.status = GameStatus::GameOver;
    state.power_up = PowerUpState::activate(300);
    let snap = Snapshot::from(&state);
    assert!(snap.game_over);
    assert!(snap.power_up_active);
}
