//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on windowing and navigation state. This crate
//! provides the glue most hosts end up writing anyway:
//!
//! - A serializable [`HostEvent`] vocabulary for layout, drag, scroll and key events
//! - A [`Controller`] that routes events to the carousel, and tracks the host's scroll offset and
//!   in-flight navigation animations
//!
//! This crate is intentionally framework-agnostic (no UIKit/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod event;


pub use controller::Controller;
pub use event::HostEvent;
