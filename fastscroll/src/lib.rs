//! Headless fast-scroll math for scrollable lists.
//!
//! For the interaction controller (touch handling, auto-hide), see the `fastscroll-adapter` crate.
//!
//! A fast scroller is a draggable handle laid over a list, optionally with a "bubble" that shows
//! the section (e.g. first letter) of the items under the handle. This crate provides the pieces
//! that are independent of any UI toolkit:
//! - scroll offset → handle position ([`PositionMapper::to_handle_position`])
//! - handle position → scroll offset / target item ([`PositionMapper::to_scroll_offset`],
//!   [`PositionMapper::target_index`])
//! - bubble text ([`PositionMapper::section_label_at`], [`SectionIndexer`])
//! - pixel placement of handle and bubble along the track ([`TrackGeometry`])
//!
//! A TUI/GUI layer is expected to provide:
//! - content length, viewport length and scroll offset of the list
//! - track/handle/bubble lengths
//! - an optional section indexer
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod indexer;
mod mapper;
mod options;
mod types;

#[cfg(test)]
mod tests;

pub use geometry::{DEFAULT_TRACK_SNAP_RANGE, TrackGeometry};
pub use indexer::{FirstLetterIndexer, SectionIndexer};
pub use mapper::PositionMapper;
pub use options::{DEFAULT_HIDE_DELAY_MS, FastScrollOptions};
pub use types::{HandlePosition, ScrollPhase, ScrollState};
