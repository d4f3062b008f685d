//! 2D affine transform accumulator.
//!
//! A mutable 2x3 matrix that widgets rebuild per frame. Every
//! operation right-multiplies the accumulated matrix, which makes the
//! call site read like a stack of wrappers around the drawable: the
//! LAST call is the INNERMOST operation, applied to points first.
//!
//! The knob renderer leans on this law to pivot around an arbitrary
//! center: `translate(c); rotate(a); translate(-c)` rotates points
//! about `c`, not about the origin.

use rotor_math::Vec2;

/// 2x3 affine matrix, column-vector convention.
///
/// Coefficients `[a, b, c, d, e, f]` map a point as:
///
/// ```text
/// x' = a*x + c*y + e
/// y' = b*x + d*y + f
/// ```
///
/// [`scale`](Self::scale), [`translate`](Self::translate) and
/// [`rotate`](Self::rotate) each compute `M = M * Op` in place. Do not
/// change this to left-multiplication: it would invert the effective
/// operation order and break every center-pivot call site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    /// Coefficients `[a, b, c, d, e, f]`.
    m: [f32; 6],
}

impl Transform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Creates an identity transform.
    #[must_use]
    pub const fn new() -> Self {
        Self::IDENTITY
    }

    /// Resets the accumulated matrix to identity.
    pub fn identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Right-multiplies by a diagonal scale matrix.
    pub fn scale(&mut self, factor: Vec2) {
        self.m[0] *= factor.x;
        self.m[1] *= factor.x;
        self.m[2] *= factor.y;
        self.m[3] *= factor.y;
    }

    /// Right-multiplies by a translation matrix.
    pub fn translate(&mut self, offset: Vec2) {
        self.m[4] += self.m[0] * offset.x + self.m[2] * offset.y;
        self.m[5] += self.m[1] * offset.x + self.m[3] * offset.y;
    }

    /// Right-multiplies by a rotation matrix.
    ///
    /// `angle` is in radians, counter-clockwise positive in a
    /// y-up coordinate system (clockwise on screen with y-down, which
    /// matches how vector assets are authored).
    pub fn rotate(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let [a, b, c, d, ..] = self.m;
        self.m[0] = a * cos + c * sin;
        self.m[1] = b * cos + d * sin;
        self.m[2] = c * cos - a * sin;
        self.m[3] = d * cos - b * sin;
    }

    /// Right-multiplies by another transform: `self = self * other`.
    pub fn then(&mut self, other: &Self) {
        let [a1, b1, c1, d1, e1, f1] = self.m;
        let [a2, b2, c2, d2, e2, f2] = other.m;
        self.m = [
            a1 * a2 + c1 * b2,
            b1 * a2 + d1 * b2,
            a1 * c2 + c1 * d2,
            b1 * c2 + d1 * d2,
            a1 * e2 + c1 * f2 + e1,
            b1 * e2 + d1 * f2 + f1,
        ];
    }

    /// Transforms a point through the accumulated matrix.
    #[must_use]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            self.m[0] * point.x + self.m[2] * point.y + self.m[4],
            self.m[1] * point.x + self.m[3] * point.y + self.m[5],
        )
    }

    /// Returns the coefficients `[a, b, c, d, e, f]`.
    ///
    /// The layout backends expect when uploading the matrix.
    #[must_use]
    pub const fn coefficients(&self) -> [f32; 6] {
        self.m
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
