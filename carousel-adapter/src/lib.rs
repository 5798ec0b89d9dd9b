//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A unified pointer-event stream (mouse + touch + click)
//! - A "request next frame" scheduling abstraction with cancel tokens
//! - A controller wiring pointer events, the scheduler, and the engine together
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod event;
mod scheduler;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use event::{PointerEvent, first_touch_x};
pub use scheduler::{FrameScheduler, FrameToken, ManualScheduler};
