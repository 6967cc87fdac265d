use alloc::string::String;

use crate::{HandlePosition, ScrollState, SectionIndexer};

// `f32::floor`/`f32::round` need `std`; inputs here are already non-negative.
#[inline]
fn floor_index(value: f32) -> usize {
    value as usize
}

#[inline]
fn round_index(value: f32) -> usize {
    (value + 0.5) as usize
}

/// Converts between scroll offsets, normalized handle positions and list indexes.
///
/// The mapper is stateless apart from its layout direction, so it is cheap to copy into whatever
/// owns the scroll state. All inputs are clamped; nothing here fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionMapper {
    reverse_layout: bool,
}

impl PositionMapper {
    pub const fn new() -> Self {
        Self {
            reverse_layout: false,
        }
    }

    /// A mapper for lists laid out bottom-up (e.g. chat timelines).
    ///
    /// Only [`PositionMapper::target_index`] is affected: scroll offsets reported by a reversed
    /// container already run in the reversed direction.
    pub const fn reversed() -> Self {
        Self {
            reverse_layout: true,
        }
    }

    pub fn with_reverse_layout(mut self, reverse_layout: bool) -> Self {
        self.reverse_layout = reverse_layout;
        self
    }

    pub fn reverse_layout(&self) -> bool {
        self.reverse_layout
    }

    /// Maps the current scroll offset to a handle position.
    ///
    /// Returns [`HandlePosition::START`] when the content fits in the viewport.
    pub fn to_handle_position(&self, state: &ScrollState) -> HandlePosition {
        let range = state.max_scroll_offset();
        let divisor = if range > 0.0 { range } else { 1.0 };
        HandlePosition::new(state.scroll_offset() / divisor)
    }

    /// Maps a handle position back to a scroll offset, clamped to the valid scroll range.
    pub fn to_scroll_offset(&self, position: HandlePosition, state: &ScrollState) -> f32 {
        state.clamp_scroll_offset(position.get() * state.max_scroll_offset())
    }

    /// The item whose section label is shown for `position`:
    /// `floor(position * (item_count - 1))`.
    ///
    /// Returns `None` for an empty list.
    pub fn item_index_at(&self, position: HandlePosition, item_count: usize) -> Option<usize> {
        let last = item_count.checked_sub(1)?;
        Some(floor_index(position.get() * last as f32).min(last))
    }

    /// The bubble label for `position`.
    ///
    /// Returns an empty string when there is no indexer or the list is empty.
    pub fn section_label_at(
        &self,
        position: HandlePosition,
        item_count: usize,
        indexer: Option<&dyn SectionIndexer>,
    ) -> String {
        let Some(indexer) = indexer else {
            return String::new();
        };
        match self.item_index_at(position, item_count) {
            Some(index) => indexer.section_text(index),
            None => String::new(),
        }
    }

    /// The item to scroll to while the handle is dragged to `position`.
    ///
    /// Uses `round(position * item_count)`, mirrored for reversed layouts, clamped to a valid
    /// index. Returns `None` for an empty list.
    pub fn target_index(&self, position: HandlePosition, item_count: usize) -> Option<usize> {
        let last = item_count.checked_sub(1)?;
        let mut scrolled = round_index(position.get() * item_count as f32);
        if self.reverse_layout {
            scrolled = item_count.saturating_sub(scrolled);
        }
        let target = scrolled.min(last);
        ftrace!(
            position = position.get(),
            item_count,
            reverse = self.reverse_layout,
            target,
            "PositionMapper::target_index"
        );
        Some(target)
    }
}
