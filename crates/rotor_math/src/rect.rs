//! Axis-aligned rectangle.
//!
//! Built from a `Vec2` origin and a `Vec2` size. Containment uses
//! half-open intervals (inclusive low edge, exclusive high edge) so
//! tiled rects never double-count a shared edge.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::scalar;
use crate::vec::Vec2;

/// Axis-aligned rectangle: top-left position plus size.
///
/// `size` components are conventionally non-negative; negative sizes
/// are not rejected but invert the geometric meaning of `contains`
/// and `intersects`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub pos: Vec2,
    /// Extent. Positive x grows right, positive y grows down.
    pub size: Vec2,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        pos: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Creates a rectangle of the given size at the origin.
    ///
    /// The local bounding box of an untransformed drawable.
    #[must_use]
    pub const fn from_size(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
        }
    }

    /// Returns true if the point is inside the rectangle.
    ///
    /// Inclusive on the left/top edges, exclusive on the right/bottom.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.x <= point.x
            && point.x < self.pos.x + self.size.x
            && self.pos.y <= point.y
            && point.y < self.pos.y + self.size.y
    }

    /// Returns true if the open interiors of two rectangles overlap.
    ///
    /// Rects touching only along an edge do NOT intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.pos.x + self.size.x > other.pos.x
            && other.pos.x + other.size.x > self.pos.x
            && self.pos.y + self.size.y > other.pos.y
            && other.pos.y + other.size.y > self.pos.y
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Returns the top-right corner.
    #[must_use]
    pub fn top_right(&self) -> Vec2 {
        self.pos + Vec2::new(self.size.x, 0.0)
    }

    /// Returns the bottom-left corner.
    #[must_use]
    pub fn bottom_left(&self) -> Vec2 {
        self.pos + Vec2::new(0.0, self.size.y)
    }

    /// Returns the bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Returns a rect of the same size with `pos` clamped so the rect
    /// fits inside `bound` where possible.
    ///
    /// When this rect is larger than `bound` on an axis, the clamp's
    /// low bound wins and the rect is pinned to `bound`'s near edge.
    #[must_use]
    pub fn clamp_to(&self, bound: &Self) -> Self {
        let pos = Vec2::new(
            scalar::clamp(
                self.pos.x,
                bound.pos.x,
                bound.pos.x + bound.size.x - self.size.x,
            ),
            scalar::clamp(
                self.pos.y,
                bound.pos.y,
                bound.pos.y + bound.size.y - self.size.y,
            ),
        );
        Self::new(pos, self.size)
    }
}
