//! # ROTOR Math Primitives
//!
//! The geometric foundation every other ROTOR crate builds on:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    ROTOR MATH                        │
//! ├──────────────────────────────────────────────────────┤
//! │  scalar  →  clamp / remap / lerp / shaping curves    │
//! │  vec     →  Vec2 (value-type 2D float vector)        │
//! │  rect    →  Rect (axis-aligned, pos + size)          │
//! │  rng     →  Rng  (seedable, mutex-guarded global)    │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! - Every type is `Copy`; operations return new values and never
//!   mutate the receiver.
//! - No function here allocates or returns `Result`. Degenerate inputs
//!   (inverted clamp bounds, zero-width remap ranges) follow documented
//!   tie-break rules or IEEE float semantics, with `debug_assert!` on
//!   the preconditions callers must uphold.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod rect;
pub mod rng;
pub mod scalar;
pub mod vec;

pub use rect::Rect;
pub use rng::{random_float, random_normal, random_u32, Rng};
pub use scalar::{chop, clamp, euc_mod, lerp, remap};
pub use vec::Vec2;
