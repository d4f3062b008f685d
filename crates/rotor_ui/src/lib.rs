//! # ROTOR UI Widgets
//!
//! Rotatable control widgets rendered from static vector assets:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     KNOB PIPELINE                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  Value Change → Dirty Bit → Render Step → Transform      │
//! │        ↓            ↓            ↓            ↓          │
//! │   No Rebuild    Coalesced    remap() to    scale+pivot   │
//! │                  Changes       angle        rotation     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! - Value changes are cheap: they flip a dirty bit and return.
//! - The transform is rebuilt lazily, at most once per render step,
//!   no matter how many changes landed in between.
//! - All geometry is plain owned data. Each knob owns its own matrix
//!   and dirty bit; concurrent knobs never contend.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod drawable;
pub mod knob;
pub mod transform;

pub use drawable::DrawableAsset;
pub use knob::{KnobConfig, KnobWidget};
pub use transform::Transform2D;
