//! A headless smooth-scroll engine.
//!
//! For binding the engine to a host (event subscriptions, frame scheduling, render sinks), see
//! the `smooth-scroll-adapter` crate.
//!
//! The engine keeps two offsets: `target`, moved instantly by wheel/touch/drag input and clamped
//! to `[0, limit]`, and `current`, which follows `target` by fixed-factor exponential smoothing
//! once per frame.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - container and viewport extents along the scroll axis
//! - whether the device is touch-capable
//! - input deltas and pointer coordinates
//! - a per-frame tick, applying the returned [`Render`] command
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod gesture;
mod math;
mod options;
mod scroller;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use gesture::Gesture;
pub use math::{clamp, lerp};
pub use options::{ScrollOptions, Speeds};
pub use scroller::{EPSILON, SMOOTHING, SmoothScroller};
pub use state::ScrollState;
pub use types::{Axis, Layout, Pointer, Render, RenderStrategy, Translate};
