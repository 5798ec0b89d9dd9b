//! A headless swipeable carousel engine.
//!
//! For adapter-level utilities (pointer event routing, frame scheduling), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the core state machine needed to turn raw pointer input into a
//! rendered slide offset: drag tracking, threshold-based commit decisions, looping index
//! arithmetic, and eased position animation.
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - pointer-down/move/up X coordinates (mouse or first touch point)
//! - a measured slide width in pixels
//! - a monotonic millisecond clock and a "next frame" callback to drive transitions
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod easing;
mod options;
pub mod resolve;
mod state;
mod types;


pub use carousel::{Carousel, TransitionStep};
pub use easing::{EasingFn, ease_in_out_cubic, linear, smooth_step};
pub use options::{CarouselOptions, OnChangeCallback, OnClickCallback, SlideKeyFn};
pub use state::FrameSnapshot;
pub use types::{Direction, SlideKey, Slot, SlotKeyed};
