/// Axis-aligned bounding boxes and the overlap test used by every collision
/// check in the game.

/// A rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Anything with a collision box.
pub trait Bounded {
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// True iff the two boxes share interior area.  Comparisons are strict, so
/// boxes that only touch along an edge or at a corner do not overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// `overlaps` for any two bounded entities.
pub fn collide(a: &impl Bounded, b: &impl Bounded) -> bool {
    overlaps(a.bounds(), b.bounds())
}
