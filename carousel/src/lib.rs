//! A headless paging engine for horizontally swiped carousels.
//!
//! For host-event dispatch, see the `carousel-adapter` crate.
//!
//! This crate focuses on the part of a carousel that has actual state: which pages are
//! materialized as the user navigates (the current page plus one neighbor per side), how a raw
//! scroll offset maps to a page, and how explicit navigation (index jumps, arrow keys, page
//! indicator taps) turns into a window update plus a scroll command.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - the page width (viewport width) whenever layout changes
//! - scroll offsets while dragging, and drag / deceleration end events
//! - a scroll container that applies the returned [`ScrollCommand`]s
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod delegate;
mod options;
mod position;
mod provider;
mod state;
mod types;
mod window;


pub use carousel::Carousel;
pub use delegate::{CarouselDelegate, LifecycleLog};
pub use options::CarouselOptions;
pub use position::PagePosition;
pub use provider::{PageList, PageProvider};
pub use state::CarouselState;
pub use types::{
    KeyCommand, LifecycleEvent, LifecycleStage, PageFrame, PageIndicator, Phase, ScrollCommand,
};
pub use window::{LoadedPage, PageWindow};
