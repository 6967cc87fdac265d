use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use fastscroll::{
    FastScrollOptions, HandlePosition, PositionMapper, ScrollPhase, ScrollState, SectionIndexer,
    TrackGeometry,
};

use crate::HideTimer;

/// A section indexer shared with the host adapter.
pub type SharedSectionIndexer = Arc<dyn SectionIndexer + Send + Sync>;

/// A callback fired when the user starts or stops dragging the handle.
pub type FastScrollCallback = Arc<dyn Fn(FastScrollEvent) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FastScrollEvent {
    Start,
    Stop,
}

/// The result of processing a handle drag.
///
/// Adapters typically:
/// - move the handle/bubble to `handle_offset`/`bubble_offset`
/// - scroll the list to `target_index` (item-based lists) or `target_offset` (pixel-based)
/// - set the bubble text to `label`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragUpdate {
    pub position: HandlePosition,
    pub handle_offset: f32,
    pub bubble_offset: f32,
    pub target_index: Option<usize>,
    pub target_offset: f32,
    /// Section text of `target_index`; empty when the bubble is disabled or no indexer is set.
    pub label: String,
}

/// A framework-neutral fast-scroll controller.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_layout` / `set_item_count` when the list or track is laid out
/// - `on_scrolled` / `on_scroll_phase` when the list scrolls
/// - `on_touch_down` / `on_touch_move` / `on_touch_up` for input on the track
/// - `tick(now_ms)` each frame/timer tick (for auto-hiding the scrollbar)
///
/// and render from the getters (`scrollbar_visible`, `handle_offset`, `bubble_text`, ...).
#[derive(Clone)]
pub struct FastScroller {
    options: FastScrollOptions,
    mapper: PositionMapper,
    geometry: TrackGeometry,
    scroll: ScrollState,
    item_count: usize,
    indexer: Option<SharedSectionIndexer>,
    listener: Option<FastScrollCallback>,

    position: HandlePosition,
    drag_touch: Option<f32>,
    bubble_text: String,
    scrollbar_visible: bool,
    bubble_visible: bool,
    hide: HideTimer,
}

impl Default for FastScroller {
    fn default() -> Self {
        Self::new(FastScrollOptions::default())
    }
}

impl FastScroller {
    pub fn new(options: FastScrollOptions) -> Self {
        fdebug!(?options, "FastScroller::new");
        Self {
            mapper: options.mapper(),
            geometry: TrackGeometry::default().with_snap_range(options.track_snap_range),
            scroll: ScrollState::default(),
            item_count: 0,
            indexer: None,
            listener: None,
            position: HandlePosition::START,
            drag_touch: None,
            bubble_text: String::new(),
            scrollbar_visible: options.enabled && !options.hide_scrollbar,
            bubble_visible: false,
            hide: HideTimer::new(),
            options,
        }
    }

    pub fn options(&self) -> &FastScrollOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: FastScrollOptions) {
        let prev = self.options;
        self.options = options;
        self.mapper = options.mapper();
        self.geometry.snap_range = options.track_snap_range;
        fdebug!(?options, "FastScroller::set_options");

        if prev.enabled != options.enabled {
            self.apply_enabled();
            self.refresh_bubble_text();
            return;
        }
        if prev.hide_scrollbar != options.hide_scrollbar {
            self.hide.cancel();
            self.scrollbar_visible = options.enabled && !options.hide_scrollbar;
        }
        if !options.show_bubble || (!options.bubble_always_visible && !self.is_dragging()) {
            self.bubble_visible = false;
        }
        self.refresh_bubble_text();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut FastScrollOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        self.apply_enabled();
    }

    fn apply_enabled(&mut self) {
        fdebug!(enabled = self.options.enabled, "FastScroller::set_enabled");
        let was_dragging = self.is_dragging();
        self.drag_touch = None;
        self.hide.cancel();
        self.bubble_visible = false;
        self.scrollbar_visible = self.options.enabled && !self.options.hide_scrollbar;
        if self.options.enabled {
            self.position = self.mapper.to_handle_position(&self.scroll);
        } else if was_dragging {
            self.emit(FastScrollEvent::Stop);
        }
    }

    pub fn set_section_indexer(
        &mut self,
        indexer: Option<impl SectionIndexer + Send + Sync + 'static>,
    ) {
        self.indexer = indexer.map(|i| Arc::new(i) as _);
        self.refresh_bubble_text();
    }

    /// Shares an indexer the adapter already holds in an `Arc` (e.g. its data source).
    pub fn set_shared_section_indexer(&mut self, indexer: Option<SharedSectionIndexer>) {
        self.indexer = indexer;
        self.refresh_bubble_text();
    }

    pub fn clear_section_indexer(&mut self) {
        self.set_shared_section_indexer(None);
    }

    pub fn has_section_indexer(&self) -> bool {
        self.indexer.is_some()
    }

    pub fn set_listener(
        &mut self,
        listener: Option<impl Fn(FastScrollEvent) + Send + Sync + 'static>,
    ) {
        self.listener = listener.map(|f| Arc::new(f) as _);
    }

    fn emit(&self, event: FastScrollEvent) {
        fdebug!(?event, "FastScroller event");
        if let Some(cb) = &self.listener {
            cb(event);
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        if self.item_count == item_count {
            return;
        }
        self.item_count = item_count;
        self.refresh_bubble_text();
    }

    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    /// Applies new track geometry. The snap range always comes from the options.
    pub fn on_layout(&mut self, geometry: TrackGeometry) {
        let geometry = geometry
            .with_snap_range(self.options.track_snap_range)
            .sanitized();
        ftrace!(
            track = geometry.track_length,
            handle = geometry.handle_length,
            bubble = geometry.bubble_length,
            "FastScroller::on_layout"
        );
        self.geometry = geometry;
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    /// Call this when the list reports a new scroll offset or content size.
    ///
    /// The handle follows the list unless the user is holding it.
    pub fn on_scrolled(&mut self, state: ScrollState) {
        self.scroll = state;
        if !self.options.enabled || self.is_dragging() {
            return;
        }
        self.position = self.mapper.to_handle_position(&state);
        ftrace!(
            offset = state.scroll_offset(),
            position = self.position.get(),
            "FastScroller::on_scrolled"
        );
        if self.bubble_visible {
            self.refresh_bubble_text();
        }
    }

    /// Call this when the list's own scroll phase changes (not the handle's).
    pub fn on_scroll_phase(&mut self, phase: ScrollPhase, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        match phase {
            ScrollPhase::Dragging => {
                self.hide.cancel();
                if !self.scrollbar_visible {
                    self.show_scrollbar();
                }
            }
            ScrollPhase::Idle => {
                if self.options.hide_scrollbar && !self.is_dragging() {
                    self.hide.schedule(now_ms, self.options.hide_delay_ms);
                }
            }
            ScrollPhase::Settling => {}
        }
    }

    fn show_scrollbar(&mut self) {
        if self.scroll.is_scrollable() {
            fdebug!("FastScroller: show scrollbar");
            self.scrollbar_visible = true;
        }
    }

    /// Handles a touch down on the fast-scroll area.
    ///
    /// `main` is the coordinate along the track, `cross` the coordinate across it. The down point
    /// already moves the handle, so a tap jumps the list like a drag does.
    ///
    /// Returns `None` when the touch is not for the scroller (disabled, or outside the handle's hit
    /// area); the adapter should then let the event fall through to the list.
    pub fn on_touch_down(&mut self, main: f32, cross: f32) -> Option<DragUpdate> {
        if !self.options.enabled || !self.geometry.hits_handle(cross) {
            return None;
        }
        ftrace!(main, cross, "FastScroller::on_touch_down");

        self.drag_touch = Some(main);
        self.hide.cancel();
        if !self.scrollbar_visible {
            self.show_scrollbar();
        }
        if self.options.show_bubble && self.indexer.is_some() {
            self.bubble_visible = true;
        }
        self.emit(FastScrollEvent::Start);
        self.on_touch_move(main)
    }

    /// Handles a drag of the handle. Returns `None` when no drag is in progress.
    pub fn on_touch_move(&mut self, main: f32) -> Option<DragUpdate> {
        self.drag_touch?;
        self.drag_touch = Some(main);

        let position = self.geometry.position_at(main);
        self.position = position;
        self.refresh_bubble_text();

        let update = DragUpdate {
            position,
            handle_offset: self.geometry.handle_offset_at(main),
            bubble_offset: self.geometry.bubble_offset_at(main),
            target_index: self.mapper.target_index(position, self.item_count),
            target_offset: self.mapper.to_scroll_offset(position, &self.scroll),
            label: self.bubble_text.clone(),
        };
        ftrace!(
            main,
            position = position.get(),
            target_index = ?update.target_index,
            target_offset = update.target_offset,
            "FastScroller::on_touch_move"
        );
        Some(update)
    }

    /// Handles touch up/cancel. Ends the drag, schedules auto-hide and hides the bubble.
    pub fn on_touch_up(&mut self, now_ms: u64) {
        if self.drag_touch.take().is_none() {
            return;
        }
        ftrace!(now_ms, "FastScroller::on_touch_up");
        if self.options.hide_scrollbar {
            self.hide.schedule(now_ms, self.options.hide_delay_ms);
        }
        if !self.options.bubble_always_visible {
            self.bubble_visible = false;
        }
        self.emit(FastScrollEvent::Stop);
    }

    /// Advances the auto-hide timer.
    ///
    /// Returns `true` when visibility changed and the adapter should re-render.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.hide.fire(now_ms) {
            return false;
        }
        let changed = self.scrollbar_visible || self.bubble_visible;
        self.scrollbar_visible = false;
        self.bubble_visible = false;
        if changed {
            fdebug!(now_ms, "FastScroller: hide scrollbar");
        }
        changed
    }

    fn refresh_bubble_text(&mut self) {
        self.bubble_text = match self.indexer.as_deref() {
            Some(indexer) if self.options.show_bubble => {
                if self.is_dragging() {
                    // While held, the bubble names the item the list is sent to.
                    self.mapper
                        .target_index(self.position, self.item_count)
                        .map(|index| indexer.section_text(index))
                        .unwrap_or_default()
                } else {
                    self.mapper.section_label_at(
                        self.position,
                        self.item_count,
                        Some(indexer as &dyn SectionIndexer),
                    )
                }
            }
            _ => String::new(),
        };
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_touch.is_some()
    }

    pub fn is_hide_pending(&self) -> bool {
        self.hide.is_pending()
    }

    pub fn scrollbar_visible(&self) -> bool {
        self.scrollbar_visible
    }

    pub fn bubble_visible(&self) -> bool {
        self.bubble_visible
    }

    /// Whether the adapter should draw the track behind the handle.
    pub fn track_visible(&self) -> bool {
        self.options.show_track && self.scrollbar_visible
    }

    pub fn handle_position(&self) -> HandlePosition {
        self.position
    }

    /// Start of the handle along the track, following the finger while dragging.
    pub fn handle_offset(&self) -> f32 {
        match self.drag_touch {
            Some(touch) => self.geometry.handle_offset_at(touch),
            None => self.geometry.handle_offset(self.position),
        }
    }

    /// Start of the bubble along the track, following the finger while dragging.
    pub fn bubble_offset(&self) -> f32 {
        match self.drag_touch {
            Some(touch) => self.geometry.bubble_offset_at(touch),
            None => self.geometry.bubble_offset(self.position),
        }
    }

    /// The label for the current handle position (empty without an indexer or items).
    pub fn bubble_text(&self) -> &str {
        &self.bubble_text
    }

    /// The scroll offset that puts the handle at `position` (for programmatic scroll-to).
    pub fn scroll_offset_for(&self, position: HandlePosition) -> f32 {
        self.mapper.to_scroll_offset(position, &self.scroll)
    }
}

impl fmt::Debug for FastScroller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastScroller")
            .field("options", &self.options)
            .field("geometry", &self.geometry)
            .field("scroll", &self.scroll)
            .field("item_count", &self.item_count)
            .field("has_indexer", &self.indexer.is_some())
            .field("position", &self.position)
            .field("drag_touch", &self.drag_touch)
            .field("scrollbar_visible", &self.scrollbar_visible)
            .field("bubble_visible", &self.bubble_visible)
            .field("hide", &self.hide)
            .finish_non_exhaustive()
    }
}
