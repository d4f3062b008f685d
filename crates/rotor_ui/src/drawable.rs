//! Drawable asset seam.
//!
//! Asset parsing and caching live outside this crate. Widgets only
//! ever read one fact about an asset: its untransformed bounding size.

use rotor_math::Vec2;

/// A vector-graphics asset with an intrinsic bounding size.
///
/// The widget treats the asset opaquely; rasterization happens in the
/// render backend after the widget's transform is applied.
pub trait DrawableAsset {
    /// Returns the asset's native (untransformed) bounding size.
    ///
    /// Must not be zero on either axis: a zero-sized asset produces an
    /// infinite or NaN fit-to-box scale factor downstream.
    fn native_size(&self) -> Vec2;
}
