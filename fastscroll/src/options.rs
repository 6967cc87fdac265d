use crate::geometry::DEFAULT_TRACK_SNAP_RANGE;

/// Default delay before an idle scrollbar is hidden.
pub const DEFAULT_HIDE_DELAY_MS: u64 = 1000;

/// Configuration for a fast scroller.
///
/// Rendering concerns (colors, drawables, animation curves) are deliberately absent; hosts style
/// the handle/bubble/track themselves and only ask this crate *where* and *when* to show them.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so it can be embedded
/// in an application's own config file.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FastScrollOptions {
    /// Enables/disables fast scrolling. When disabled, touches are rejected and the scrollbar
    /// stays hidden.
    pub enabled: bool,

    /// Hide the scrollbar when the list is idle and the handle is not held.
    pub hide_scrollbar: bool,

    /// Delay between the list going idle (or the handle being released) and the scrollbar hiding.
    pub hide_delay_ms: u64,

    /// Show the section bubble while the handle is dragged.
    pub show_bubble: bool,

    /// Keep the bubble visible after the handle is released.
    pub bubble_always_visible: bool,

    /// Hint for hosts: draw the track behind the handle.
    pub show_track: bool,

    /// The list is laid out bottom-up.
    pub reverse_layout: bool,

    /// See [`crate::TrackGeometry::snap_range`].
    pub track_snap_range: f32,
}

impl Default for FastScrollOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl FastScrollOptions {
    pub const fn new() -> Self {
        Self {
            enabled: true,
            hide_scrollbar: true,
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
            show_bubble: true,
            bubble_always_visible: false,
            show_track: false,
            reverse_layout: false,
            track_snap_range: DEFAULT_TRACK_SNAP_RANGE,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_hide_scrollbar(mut self, hide_scrollbar: bool) -> Self {
        self.hide_scrollbar = hide_scrollbar;
        self
    }

    pub fn with_hide_delay_ms(mut self, delay_ms: u64) -> Self {
        self.hide_delay_ms = delay_ms;
        self
    }

    /// Sets bubble visibility; `always` keeps it shown after the handle is released.
    pub fn with_bubble_visible(mut self, visible: bool, always: bool) -> Self {
        self.show_bubble = visible;
        self.bubble_always_visible = visible && always;
        self
    }

    pub fn with_track_visible(mut self, visible: bool) -> Self {
        self.show_track = visible;
        self
    }

    pub fn with_reverse_layout(mut self, reverse_layout: bool) -> Self {
        self.reverse_layout = reverse_layout;
        self
    }

    pub fn with_track_snap_range(mut self, snap_range: f32) -> Self {
        self.track_snap_range = snap_range;
        self
    }

    /// A [`crate::PositionMapper`] configured for these options.
    pub fn mapper(&self) -> crate::PositionMapper {
        crate::PositionMapper::new().with_reverse_layout(self.reverse_layout)
    }
}
