//! Rotatable-knob renderer.
//!
//! Maps a control value onto a rotation angle and rebuilds the
//! widget's affine transform lazily: value changes flip a dirty bit,
//! and the transform is recomputed at most once per render step no
//! matter how many changes were coalesced in between.

use serde::{Deserialize, Serialize};

use rotor_math::{remap, Rect, Vec2};

use crate::drawable::DrawableAsset;
use crate::transform::Transform2D;

/// Knob configuration: the value domain and its visual angle domain.
///
/// Loaded from TOML alongside the rest of the widget styling. Angles
/// are radians; the defaults sweep the classic ±135° arc over a
/// 0..1 value range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnobConfig {
    /// Value mapped to `min_angle`.
    pub min_value: f32,
    /// Value mapped to `max_angle`.
    pub max_value: f32,
    /// Angle (radians) at `min_value`.
    pub min_angle: f32,
    /// Angle (radians) at `max_value`.
    pub max_angle: f32,
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 1.0,
            min_angle: -0.75 * std::f32::consts::PI,
            max_angle: 0.75 * std::f32::consts::PI,
        }
    }
}

/// A rotatable control widget rendered from a static vector asset.
///
/// Two-state machine: **Clean** (transform reflects the current
/// value) and **Dirty** (a value change or asset assignment happened
/// since the last rebuild). [`step`](Self::step) is the only place the
/// transform is recomputed.
#[derive(Debug, Clone)]
pub struct KnobWidget {
    config: KnobConfig,
    /// Current control value. Mutated only through `set_value`.
    value: f32,
    /// Native bounding size of the assigned asset.
    asset_size: Vec2,
    /// On-screen box. Sized to the asset when it is assigned.
    rect: Rect,
    /// Accumulated transform, rebuilt on dirty render steps.
    transform: Transform2D,
    /// Transform is stale and must be rebuilt at the next step.
    dirty: bool,
    /// Total number of transform rebuilds (coalescing observability).
    rebuilds: u64,
}

impl KnobWidget {
    /// Creates a knob with the given value/angle mapping.
    ///
    /// No asset is assigned yet; the widget stays a zero-sized no-op
    /// until [`set_asset`](Self::set_asset) is called.
    #[must_use]
    pub fn new(config: KnobConfig) -> Self {
        debug_assert!(
            config.min_value != config.max_value,
            "knob configured with a degenerate value range"
        );
        Self {
            config,
            value: config.min_value,
            asset_size: Vec2::ZERO,
            rect: Rect::ZERO,
            transform: Transform2D::IDENTITY,
            dirty: false,
            rebuilds: 0,
        }
    }

    /// Assigns the drawable asset.
    ///
    /// Records the asset's native size, resizes the widget's box to
    /// match, and marks the transform dirty so the first render step
    /// computes an initial transform.
    pub fn set_asset(&mut self, asset: &impl DrawableAsset) {
        let size = asset.native_size();
        debug_assert!(
            size.x > 0.0 && size.y > 0.0,
            "zero-sized drawable asset assigned to knob"
        );
        self.asset_size = size;
        self.rect.size = size;
        self.dirty = true;
    }

    /// Stores a new control value and marks the transform dirty.
    ///
    /// Never recomputes eagerly: repeated calls before the next
    /// [`step`](Self::step) coalesce into a single rebuild.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.dirty = true;
    }

    /// Render-step entry point, invoked once per frame by the render
    /// pipeline. A no-op while the widget is Clean.
    ///
    /// When Dirty, rebuilds the transform: the asset is scaled to fill
    /// the widget's box, then rotated about its own center by the
    /// angle the current value maps to. Per the right-multiplication
    /// law of [`Transform2D`], the calls below apply to points in
    /// reverse order: translate to the origin, rotate, translate back,
    /// scale.
    pub fn step(&mut self) {
        if !self.dirty {
            return;
        }
        let angle = self.angle();
        self.transform.identity();
        // Scale asset to the widget's box
        self.transform.scale(self.rect.size / self.asset_size);
        // Rotate about the asset's own center, in asset-local
        // coordinates
        let center = Rect::from_size(self.asset_size).center();
        self.transform.translate(center);
        self.transform.rotate(angle);
        self.transform.translate(-center);
        self.dirty = false;
        self.rebuilds += 1;
        tracing::trace!(
            value = self.value,
            angle,
            rebuilds = self.rebuilds,
            "knob transform rebuilt"
        );
    }

    /// Returns the current control value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Returns the angle (radians) the current value maps to.
    ///
    /// Values outside the configured range extrapolate; clamping, if
    /// wanted, belongs to the value source upstream.
    #[must_use]
    pub fn angle(&self) -> f32 {
        remap(
            self.value,
            self.config.min_value,
            self.config.max_value,
            self.config.min_angle,
            self.config.max_angle,
        )
    }

    /// Returns the accumulated transform.
    ///
    /// Reflects the current value only after a [`step`](Self::step).
    #[must_use]
    pub const fn transform(&self) -> &Transform2D {
        &self.transform
    }

    /// Returns the widget's on-screen box.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns true if the transform is stale.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the total number of transform rebuilds performed.
    #[must_use]
    pub const fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}

impl Default for KnobWidget {
    fn default() -> Self {
        Self::new(KnobConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAsset(Vec2);

    impl DrawableAsset for FixedAsset {
        fn native_size(&self) -> Vec2 {
            self.0
        }
    }

    fn knob_with_asset() -> KnobWidget {
        let mut knob = KnobWidget::default();
        knob.set_asset(&FixedAsset(Vec2::new(30.0, 30.0)));
        knob
    }

    #[test]
    fn test_angle_mapping_endpoints_and_midpoint() {
        let mut knob = knob_with_asset();
        let max_angle = 0.75 * std::f32::consts::PI; // 135 degrees

        knob.set_value(0.0);
        assert!((knob.angle() - -max_angle).abs() < 1e-6);

        knob.set_value(0.5);
        assert!(knob.angle().abs() < 1e-6);

        knob.set_value(1.0);
        assert!((knob.angle() - max_angle).abs() < 1e-6);
    }

    #[test]
    fn test_angle_extrapolates_outside_range() {
        let mut knob = knob_with_asset();
        knob.set_value(2.0);
        let max_angle = 0.75 * std::f32::consts::PI;
        assert!((knob.angle() - 3.0 * max_angle).abs() < 1e-5);
    }

    #[test]
    fn test_set_asset_sizes_widget_and_marks_dirty() {
        let mut knob = KnobWidget::default();
        assert!(!knob.is_dirty());

        knob.set_asset(&FixedAsset(Vec2::new(30.0, 40.0)));
        assert!(knob.is_dirty());
        assert_eq!(knob.rect().size, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_value_changes_coalesce_into_one_rebuild() {
        let mut knob = knob_with_asset();
        knob.step();
        let baseline = knob.rebuild_count();

        knob.set_value(0.3);
        knob.set_value(0.7);
        assert!(knob.is_dirty());

        knob.step();
        assert_eq!(knob.rebuild_count(), baseline + 1);
        assert!(!knob.is_dirty());

        // Clean step is a pass-through.
        knob.step();
        assert_eq!(knob.rebuild_count(), baseline + 1);
    }

    #[test]
    fn test_transform_keeps_scaled_center_fixed() {
        let mut knob = knob_with_asset();
        knob.set_value(0.8);
        knob.step();

        // The asset's center must land on the box's center for any
        // value.
        let center = Rect::from_size(Vec2::new(30.0, 30.0)).center();
        let mapped = knob.transform().apply(center);
        assert!((mapped.x - 15.0).abs() < 1e-4);
        assert!((mapped.y - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_transform_fills_display_box_at_zero_angle() {
        let mut knob = knob_with_asset();
        // Stretch the display box to twice the asset size.
        knob.rect.size = Vec2::new(60.0, 60.0);
        knob.set_value(0.5); // maps to angle 0
        knob.step();

        let t = knob.transform();
        let corner = t.apply(Vec2::new(30.0, 30.0));
        assert!((corner.x - 60.0).abs() < 1e-4);
        assert!((corner.y - 60.0).abs() < 1e-4);
        let origin = t.apply(Vec2::ZERO);
        assert!(origin.x.abs() < 1e-4 && origin.y.abs() < 1e-4);
    }

    #[test]
    fn test_config_loads_from_toml() {
        let config: KnobConfig = toml::from_str(
            "min_value = -5.0\nmax_value = 5.0\nmin_angle = -1.0\nmax_angle = 1.0\n",
        )
        .expect("valid knob config");
        assert_eq!(config.min_value, -5.0);
        assert_eq!(config.max_angle, 1.0);

        // Missing fields fall back to the defaults.
        let partial: KnobConfig = toml::from_str("max_value = 10.0").expect("partial config");
        assert_eq!(partial.max_value, 10.0);
        assert_eq!(partial.min_value, 0.0);
    }
}
