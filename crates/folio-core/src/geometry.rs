//! Plain geometry value types.

use std::ops::Add;

use crate::math::Vec2;

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Copy + Add<Output = T>> Rect<T> {
    /// Exclusive right edge.
    pub fn right(&self) -> T {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> T {
        self.y + self.height
    }
}

impl<T: Copy + Add<Output = T> + PartialOrd> Rect<T> {
    /// Whether the two rectangles share any interior area.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect<T>) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

impl Rect<f32> {
    /// Inclusive point containment.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Grow the rectangle by `amount` on every side.
    pub fn inflate(&self, amount: f32) -> Self {
        Rect {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }
}
