use crate::HandlePosition;
use crate::types::{finite_or_zero, non_negative};

/// Default distance from the track end within which a drag snaps to the end.
pub const DEFAULT_TRACK_SNAP_RANGE: f32 = 5.0;

/// Pixel geometry of the fast-scroll track along the scroll axis.
///
/// - `track_length`: length of the track (usually the list's viewport length minus margins)
/// - `handle_length`: length of the draggable handle
/// - `bubble_length`: length of the section bubble (0 when there is no bubble)
/// - `handle_cross_start`: cross-axis coordinate where the handle's touch target begins
/// - `snap_range`: a drag whose handle ends within this distance of the track end snaps to the end
///
/// Offsets returned by this type are the *start* (top/left) of the element, in track coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackGeometry {
    pub track_length: f32,
    pub handle_length: f32,
    pub bubble_length: f32,
    pub handle_cross_start: f32,
    pub snap_range: f32,
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self {
            track_length: 0.0,
            handle_length: 0.0,
            bubble_length: 0.0,
            handle_cross_start: 0.0,
            snap_range: DEFAULT_TRACK_SNAP_RANGE,
        }
    }
}

impl TrackGeometry {
    pub fn new(track_length: f32, handle_length: f32) -> Self {
        Self {
            track_length,
            handle_length,
            ..Self::default()
        }
        .sanitized()
    }

    pub fn with_bubble_length(mut self, bubble_length: f32) -> Self {
        self.bubble_length = bubble_length;
        self.sanitized()
    }

    pub fn with_handle_cross_start(mut self, handle_cross_start: f32) -> Self {
        self.handle_cross_start = handle_cross_start;
        self.sanitized()
    }

    pub fn with_snap_range(mut self, snap_range: f32) -> Self {
        self.snap_range = snap_range;
        self.sanitized()
    }

    /// Returns a copy with negative/non-finite lengths replaced by `0`.
    ///
    /// The public fields may be written directly; every query sanitizes again, so this is only
    /// needed when the caller wants to inspect the effective values.
    pub fn sanitized(self) -> Self {
        if !(self.track_length.is_finite()
            && self.handle_length.is_finite()
            && self.bubble_length.is_finite()
            && self.snap_range.is_finite())
        {
            fwarn!(geometry = ?self, "TrackGeometry: non-finite length replaced with 0");
        }
        Self {
            track_length: non_negative(self.track_length),
            handle_length: non_negative(self.handle_length),
            bubble_length: non_negative(self.bubble_length),
            handle_cross_start: finite_or_zero(self.handle_cross_start),
            snap_range: non_negative(self.snap_range),
        }
    }

    /// Whether a cross-axis touch coordinate lands on the handle's touch target.
    pub fn hits_handle(&self, cross: f32) -> bool {
        finite_or_zero(cross) >= finite_or_zero(self.handle_cross_start)
    }

    /// Start of the handle for a normalized position.
    pub fn handle_offset(&self, position: HandlePosition) -> f32 {
        let g = self.sanitized();
        g.handle_offset_at(position.get() * g.track_length)
    }

    /// Start of the bubble for a normalized position.
    pub fn bubble_offset(&self, position: HandlePosition) -> f32 {
        let g = self.sanitized();
        g.bubble_offset_at(position.get() * g.track_length)
    }

    /// Start of the handle when its center follows a touch at `touch` along the track.
    pub fn handle_offset_at(&self, touch: f32) -> f32 {
        let g = self.sanitized();
        let max = (g.track_length - g.handle_length).max(0.0);
        (finite_or_zero(touch) - g.handle_length / 2.0).clamp(0.0, max)
    }

    /// Start of the bubble for a touch at `touch`: the bubble sits just above the touch point and
    /// never covers the lower half of the handle at the track end.
    pub fn bubble_offset_at(&self, touch: f32) -> f32 {
        let g = self.sanitized();
        let max = (g.track_length - g.bubble_length - g.handle_length / 2.0).max(0.0);
        (finite_or_zero(touch) - g.bubble_length).clamp(0.0, max)
    }

    /// The drag position for a touch at `touch` along the track, with end snapping.
    ///
    /// Returns [`HandlePosition::START`] when the handle is pinned at the track start and
    /// [`HandlePosition::END`] when its end is within `snap_range` of the track end.
    pub fn position_at(&self, touch: f32) -> HandlePosition {
        let g = self.sanitized();
        if g.track_length <= 0.0 {
            return HandlePosition::START;
        }
        let handle_start = g.handle_offset_at(touch);
        if handle_start <= 0.0 {
            return HandlePosition::START;
        }
        if handle_start + g.handle_length >= g.track_length - g.snap_range {
            return HandlePosition::END;
        }
        HandlePosition::new(finite_or_zero(touch) / g.track_length)
    }
}
