use canvas_shooter::power_up::PowerUpState;

use proptest::prelude::*;

#[test]
fn inactive_stays_inactive() {
    assert_eq!(PowerUpState::Inactive.tick(), PowerUpState::Inactive);
    assert_eq!(PowerUpState::default(), PowerUpState::Inactive);
}

#[test]
fn active_counts_down_to_inactive() {
    let mut p = PowerUpState::activate(300);
    assert_eq!(p.remaining_ticks(), 300);
    for expected in (1..300).rev() {
        p = p.tick();
        assert_eq!(p, PowerUpState::Active { remaining_ticks: expected });
    }
    p = p.tick();
    assert_eq!(p, PowerUpState::Inactive);
    assert_eq!(p.remaining_ticks(), 0);
}

#[test]
fn activation_replaces_remaining_time() {
    let p = PowerUpState::Active { remaining_ticks: 7 };
    assert_eq!(p.tick().remaining_ticks(), 6);
    // Picking up another item does not add to what is left
    assert_eq!(PowerUpState::activate(300).remaining_ticks(), 300);
}

#[test]
fn zero_duration_never_activates() {
    assert_eq!(PowerUpState::activate(0), PowerUpState::Inactive);
}

#[derive(Clone, Debug)]
enum Op {
    Tick,
    Activate(u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Tick),
        1 => (0u32..400).prop_map(Op::Activate),
    ]
}

proptest! {
    #[test]
    fn active_iff_time_remaining(ops in prop::collection::vec(op(), 0..600)) {
        let mut p = PowerUpState::Inactive;
        for op in ops {
            p = match op {
                Op::Tick => p.tick(),
                Op::Activate(d) => PowerUpState::activate(d),
            };
            prop_assert_eq!(p.is_active(), p.remaining_ticks() > 0);
        }
    }
}
