//! A headless engine for seamless infinite-scroll carousels.
//!
//! For adapter-level utilities (region hosts, mutation batching, restart toggles), see the
//! `marquee-adapter` crate.
//!
//! This crate focuses on the core state and math behind a CSS-driven looping carousel: a
//! per-region state machine, clone planning for seamless wraparound, and animation durations
//! proportional to item count.
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - the observed original-item count per region
//! - application of clone plans (append/remove tagged copies)
//! - application of the computed animation spec to the real container
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod duration;
mod marquee;
mod options;
mod types;

#[cfg(test)]
mod tests;

pub use duration::{compute_duration_ms, scale_duration_ms};
pub use marquee::Marquee;
pub use options::{MarqueeOptions, OnChangeCallback};
pub use types::{AnimationSpec, ClonePlan, Phase};
