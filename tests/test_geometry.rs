use canvas_shooter::geometry::{overlaps, Rect};

use proptest::prelude::*;

fn rect() -> impl Strategy<Value = Rect> {
    (-1000.0f32..1000.0, -1000.0f32..1000.0, 0.5f32..200.0, 0.5f32..200.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

#[test]
fn overlapping_boxes_collide() {
    let bullet = Rect::new(100.0, 100.0, 5.0, 15.0);
    let enemy = Rect::new(98.0, 105.0, 50.0, 50.0);
    assert!(overlaps(bullet, enemy));
}

#[test]
fn separated_boxes_do_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!overlaps(a, Rect::new(20.0, 0.0, 10.0, 10.0)));
    assert!(!overlaps(a, Rect::new(0.0, 20.0, 10.0, 10.0)));
}

#[test]
fn shared_corner_does_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!overlaps(a, Rect::new(10.0, 10.0, 10.0, 10.0)));
}

#[test]
fn containment_collides() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
    assert!(overlaps(outer, inner));
    assert!(overlaps(inner, outer));
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(overlaps(a, b), overlaps(b, a));
    }

    #[test]
    fn box_overlaps_itself(a in rect()) {
        prop_assert!(overlaps(a, a));
    }

    #[test]
    fn touching_right_edge_is_not_overlap(a in rect(), dy in -0.9f32..0.9, w in 0.5f32..200.0) {
        let b = Rect::new(a.right(), a.y + dy * a.height, w, a.height);
        prop_assert!(!overlaps(a, b));
        prop_assert!(!overlaps(b, a));
    }

    #[test]
    fn touching_bottom_edge_is_not_overlap(a in rect(), dx in -0.9f32..0.9, h in 0.5f32..200.0) {
        let b = Rect::new(a.x + dx * a.width, a.bottom(), a.width, h);
        prop_assert!(!overlaps(a, b));
        prop_assert!(!overlaps(b, a));
    }
}
