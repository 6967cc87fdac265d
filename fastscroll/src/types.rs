/// Replaces NaN, infinities and negatives with `0.0`.
#[inline]
pub(crate) fn non_negative(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Replaces NaN and infinities with `0.0`, keeping the sign of finite values.
#[inline]
pub(crate) fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

/// A snapshot of a scroll container along its scroll axis.
///
/// All lengths are in the host's units (pixels, rows, cells). The constructor enforces
/// `0 <= scroll_offset <= max_scroll_offset()`; negative or non-finite inputs are treated as `0`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; deserialized values
/// go through [`ScrollState::new`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawScrollState", into = "RawScrollState"))]
pub struct ScrollState {
    content_length: f32,
    viewport_length: f32,
    scroll_offset: f32,
}

/// Wire form of [`ScrollState`], unchecked.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawScrollState {
    content_length: f32,
    viewport_length: f32,
    scroll_offset: f32,
}

#[cfg(feature = "serde")]
impl From<RawScrollState> for ScrollState {
    fn from(raw: RawScrollState) -> Self {
        Self::new(raw.content_length, raw.viewport_length, raw.scroll_offset)
    }
}

#[cfg(feature = "serde")]
impl From<ScrollState> for RawScrollState {
    fn from(state: ScrollState) -> Self {
        Self {
            content_length: state.content_length,
            viewport_length: state.viewport_length,
            scroll_offset: state.scroll_offset,
        }
    }
}

impl ScrollState {
    pub fn new(content_length: f32, viewport_length: f32, scroll_offset: f32) -> Self {
        let content_length = non_negative(content_length);
        let viewport_length = non_negative(viewport_length);
        let max = (content_length - viewport_length).max(0.0);
        Self {
            content_length,
            viewport_length,
            scroll_offset: non_negative(scroll_offset).min(max),
        }
    }

    pub fn content_length(&self) -> f32 {
        self.content_length
    }

    pub fn viewport_length(&self) -> f32 {
        self.viewport_length
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// The largest valid scroll offset (`0` when the content fits in the viewport).
    pub fn max_scroll_offset(&self) -> f32 {
        (self.content_length - self.viewport_length).max(0.0)
    }

    /// Whether the content is strictly longer than the viewport.
    pub fn is_scrollable(&self) -> bool {
        self.content_length > self.viewport_length
    }

    pub fn clamp_scroll_offset(&self, offset: f32) -> f32 {
        non_negative(offset).min(self.max_scroll_offset())
    }

    /// Returns a copy scrolled to `offset` (clamped).
    pub fn with_scroll_offset(self, offset: f32) -> Self {
        Self {
            scroll_offset: self.clamp_scroll_offset(offset),
            ..self
        }
    }
}

/// A normalized handle position along the track, always in `[0, 1]`.
///
/// With `feature = "serde"`, this type (de)serializes as a plain number, clamped on the way in.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f32", into = "f32"))]
pub struct HandlePosition(f32);

impl HandlePosition {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Creates a position, clamping to `[0, 1]`. NaN maps to `0`.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl From<f32> for HandlePosition {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<HandlePosition> for f32 {
    fn from(position: HandlePosition) -> Self {
        position.0
    }
}

/// Scroll phase reported by the host list (not by the fast-scroll handle).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    /// The list is at rest.
    Idle,
    /// The user is dragging the list content.
    Dragging,
    /// The list is flinging or animating towards a final position.
    Settling,
}
