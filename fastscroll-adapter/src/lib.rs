//! Adapter utilities for the `fastscroll` crate.
//!
//! The `fastscroll` crate is UI-agnostic and focuses on the core math. This crate provides the
//! framework-neutral interaction layer commonly needed by adapters:
//!
//! - A [`FastScroller`] controller that turns list scroll events and track touches into handle
//!   placement, drag targets and bubble text
//! - A [`HideTimer`] for auto-hiding the scrollbar when the list goes idle
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod hide;


pub use controller::{
    DragUpdate, FastScrollCallback, FastScrollEvent, FastScroller, SharedSectionIndexer,
};
pub use hide::HideTimer;
