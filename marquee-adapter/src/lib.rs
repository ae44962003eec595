//! Adapter utilities for the `marquee` crate.
//!
//! The `marquee` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - The [`RegionHost`] trait: the narrow DOM read/write contract a page layer implements
//! - A multi-region [`Manager`] driving initialization, speed application, and forced resets
//! - Batched structural-change handling (the MutationObserver pattern, poll-driven)
//! - An animation-restart toggle sampled with adapter-supplied `now_ms` time
//!
//! This crate is intentionally framework-agnostic (no web-sys/DOM bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod manager;
mod restart;


pub use host::{CLONED_MARKER, MutationRecord, RegionHost};
pub use manager::{Manager, standard_regions};
pub use restart::{RESTART_DELAY_MS, RestartToggle};
