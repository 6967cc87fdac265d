use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    /// Uniform-ish float in `[0, 1)`.
    fn next_unit(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    fn gen_range_f32(&mut self, start: f32, end: f32) -> f32 {
        start + (end - start) * self.next_unit()
    }
}

fn letters() -> Vec<String> {
    ["a", "b", "c", "d", "e"]
        .iter()
        .map(|s| String::from(*s))
        .collect()
}

#[test]
fn scroll_state_clamps_offset_into_valid_range() {
    let s = ScrollState::new(100.0, 40.0, 90.0);
    assert_eq!(s.scroll_offset(), 60.0);
    assert_eq!(s.max_scroll_offset(), 60.0);
    assert!(s.is_scrollable());

    let s = ScrollState::new(100.0, 40.0, -5.0);
    assert_eq!(s.scroll_offset(), 0.0);

    let s = ScrollState::new(f32::NAN, 40.0, 10.0);
    assert_eq!(s.content_length(), 0.0);
    assert_eq!(s.scroll_offset(), 0.0);
    assert!(!s.is_scrollable());

    let s = ScrollState::new(100.0, 40.0, 10.0).with_scroll_offset(1_000.0);
    assert_eq!(s.scroll_offset(), 60.0);
}

#[test]
fn handle_position_clamps_and_rejects_nan() {
    assert_eq!(HandlePosition::new(f32::NAN), HandlePosition::START);
    assert_eq!(HandlePosition::new(-0.5), HandlePosition::START);
    assert_eq!(HandlePosition::new(2.0), HandlePosition::END);
    assert_eq!(HandlePosition::new(0.25).get(), 0.25);
    assert_eq!(f32::from(HandlePosition::new(0.75)), 0.75);
}

#[test]
fn handle_position_is_always_in_unit_interval() {
    let m = PositionMapper::new();
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..2_000 {
        let content = rng.gen_range_f32(0.0, 50_000.0);
        let viewport = rng.gen_range_f32(0.0, 2_000.0);
        let offset = rng.gen_range_f32(-1_000.0, 60_000.0);
        let p = m.to_handle_position(&ScrollState::new(content, viewport, offset));
        assert!((0.0..=1.0).contains(&p.get()), "p={p:?}");
    }
}

#[test]
fn handle_position_is_monotonic_in_scroll_offset() {
    let m = PositionMapper::new();
    let base = ScrollState::new(10_000.0, 500.0, 0.0);
    let mut last = HandlePosition::START;
    let mut offset = 0.0f32;
    while offset <= base.max_scroll_offset() {
        let p = m.to_handle_position(&base.with_scroll_offset(offset));
        assert!(p >= last);
        last = p;
        offset += 37.5;
    }
    assert_eq!(
        m.to_handle_position(&base.with_scroll_offset(base.max_scroll_offset())),
        HandlePosition::END
    );
}

#[test]
fn handle_position_round_trips_to_scroll_offset() {
    let m = PositionMapper::new();
    let mut rng = Lcg::new(42);
    for _ in 0..2_000 {
        let viewport = rng.gen_range_f32(1.0, 1_000.0);
        let content = viewport + rng.gen_range_f32(1.0, 100_000.0);
        let offset = rng.gen_range_f32(0.0, content - viewport);
        let s = ScrollState::new(content, viewport, offset);

        let back = m.to_scroll_offset(m.to_handle_position(&s), &s);
        let tolerance = s.max_scroll_offset() * 1e-5 + 1e-3;
        assert!(
            (back - s.scroll_offset()).abs() <= tolerance,
            "offset={} back={back} state={s:?}",
            s.scroll_offset()
        );
    }
}

#[test]
fn fractional_scroll_range_still_round_trips() {
    let m = PositionMapper::new();
    let s = ScrollState::new(10.5, 10.0, 0.25);
    let p = m.to_handle_position(&s);
    assert_eq!(p.get(), 0.5);
    assert_eq!(m.to_scroll_offset(p, &s), 0.25);
}

#[test]
fn content_that_fits_maps_to_start() {
    let m = PositionMapper::new();
    for offset in [0.0, 10.0, 1_000.0, -3.0] {
        assert_eq!(
            m.to_handle_position(&ScrollState::new(50.0, 100.0, offset)),
            HandlePosition::START
        );
        assert_eq!(
            m.to_handle_position(&ScrollState::new(100.0, 100.0, offset)),
            HandlePosition::START
        );
    }
    let empty = ScrollState::default();
    assert_eq!(m.to_handle_position(&empty), HandlePosition::START);
    assert_eq!(m.to_scroll_offset(HandlePosition::END, &empty), 0.0);
}

#[test]
fn to_scroll_offset_spans_full_range() {
    let m = PositionMapper::new();
    let s = ScrollState::new(1_000.0, 200.0, 0.0);
    assert_eq!(m.to_scroll_offset(HandlePosition::START, &s), 0.0);
    assert_eq!(m.to_scroll_offset(HandlePosition::new(0.5), &s), 400.0);
    assert_eq!(m.to_scroll_offset(HandlePosition::END, &s), 800.0);
}

#[test]
fn section_label_at_ends_matches_first_and_last_item() {
    let m = PositionMapper::new();
    let labels = letters();
    let n = labels.len();
    assert_eq!(
        m.section_label_at(HandlePosition::START, n, Some(&labels)),
        "a"
    );
    assert_eq!(m.section_label_at(HandlePosition::END, n, Some(&labels)), "e");
}

#[test]
fn section_label_at_floors_into_item_range() {
    let m = PositionMapper::new();
    let labels = letters();
    // floor(0.6 * 4) = 2
    assert_eq!(m.item_index_at(HandlePosition::new(0.6), 5), Some(2));
    assert_eq!(
        m.section_label_at(HandlePosition::new(0.6), 5, Some(&labels)),
        "c"
    );
    assert_eq!(
        m.section_label_at(HandlePosition::new(0.74), 5, Some(&labels)),
        "c"
    );
    assert_eq!(m.item_index_at(HandlePosition::new(0.9), 1), Some(0));
}

#[test]
fn section_label_is_empty_without_items_or_indexer() {
    let m = PositionMapper::new();
    let labels = letters();
    for p in [0.0, 0.3, 1.0] {
        let p = HandlePosition::new(p);
        assert_eq!(m.section_label_at(p, 0, Some(&labels)), "");
        assert_eq!(m.section_label_at(p, 5, None), "");
        assert_eq!(m.item_index_at(p, 0), None);
    }
}

#[test]
fn section_label_uses_indexer_even_past_its_own_length() {
    let m = PositionMapper::new();
    let labels = letters();
    // A label list shorter than the item count yields empty labels instead of panicking.
    assert_eq!(m.section_label_at(HandlePosition::END, 50, Some(&labels)), "");
}

#[test]
fn target_index_rounds_and_clamps() {
    let m = PositionMapper::new();
    assert_eq!(m.target_index(HandlePosition::START, 100), Some(0));
    assert_eq!(m.target_index(HandlePosition::new(0.004), 100), Some(0));
    assert_eq!(m.target_index(HandlePosition::new(0.5), 100), Some(50));
    assert_eq!(m.target_index(HandlePosition::END, 100), Some(99));
    assert_eq!(m.target_index(HandlePosition::new(0.5), 0), None);
}

#[test]
fn target_index_mirrors_for_reverse_layout() {
    let m = PositionMapper::reversed();
    assert!(m.reverse_layout());
    assert_eq!(m.target_index(HandlePosition::START, 100), Some(99));
    assert_eq!(m.target_index(HandlePosition::new(0.25), 100), Some(75));
    assert_eq!(m.target_index(HandlePosition::END, 100), Some(0));
    assert_eq!(
        PositionMapper::new().with_reverse_layout(true),
        PositionMapper::reversed()
    );
}

#[test]
fn geometry_places_handle_and_bubble_inside_track() {
    let g = TrackGeometry::new(100.0, 10.0).with_bubble_length(20.0);
    assert_eq!(g.handle_offset(HandlePosition::START), 0.0);
    assert_eq!(g.handle_offset(HandlePosition::new(0.5)), 45.0);
    assert_eq!(g.handle_offset(HandlePosition::END), 90.0);

    assert_eq!(g.bubble_offset_at(5.0), 0.0);
    assert_eq!(g.bubble_offset_at(50.0), 30.0);
    assert_eq!(g.bubble_offset_at(100.0), 75.0);
    assert_eq!(g.bubble_offset(HandlePosition::END), 75.0);

    assert_eq!(g.handle_offset_at(-40.0), 0.0);
    assert_eq!(g.handle_offset_at(400.0), 90.0);
}

#[test]
fn geometry_snaps_drag_to_track_ends() {
    let g = TrackGeometry::new(100.0, 10.0);
    assert_eq!(g.snap_range, DEFAULT_TRACK_SNAP_RANGE);

    assert_eq!(g.position_at(3.0), HandlePosition::START);
    assert_eq!(g.position_at(50.0).get(), 0.5);
    assert_eq!(g.position_at(88.0).get(), 0.88);
    // handle would end at 96, inside the 5px snap range
    assert_eq!(g.position_at(91.0), HandlePosition::END);
    assert_eq!(g.position_at(500.0), HandlePosition::END);

    let no_snap = g.with_snap_range(0.0);
    assert_eq!(no_snap.position_at(91.0).get(), 0.91);
}

#[test]
fn degenerate_geometry_maps_to_zero() {
    let g = TrackGeometry::default();
    assert_eq!(g.position_at(10.0), HandlePosition::START);
    assert_eq!(g.handle_offset(HandlePosition::END), 0.0);
    assert_eq!(g.bubble_offset(HandlePosition::END), 0.0);

    let g = TrackGeometry::new(f32::INFINITY, -3.0).sanitized();
    assert_eq!(g.track_length, 0.0);
    assert_eq!(g.handle_length, 0.0);

    // Handle longer than the track stays pinned at the start.
    let g = TrackGeometry::new(10.0, 40.0);
    assert_eq!(g.handle_offset(HandlePosition::END), 0.0);
}

#[test]
fn geometry_hit_test_uses_cross_axis_start() {
    let g = TrackGeometry::new(100.0, 10.0).with_handle_cross_start(12.0);
    assert!(!g.hits_handle(11.9));
    assert!(g.hits_handle(12.0));
    assert!(g.hits_handle(30.0));
}

#[test]
fn first_letter_indexer_labels_by_first_char() {
    let idx = FirstLetterIndexer::new(vec!["Apple", "banana", "", "Éclair"]);
    assert_eq!(idx.len(), 4);
    assert!(!idx.is_empty());
    assert_eq!(idx.section_text(0), "A");
    assert_eq!(idx.section_text(1), "b");
    assert_eq!(idx.section_text(2), "");
    assert_eq!(idx.section_text(3), "É");
    assert_eq!(idx.section_text(4), "");

    let m = PositionMapper::new();
    assert_eq!(
        m.section_label_at(HandlePosition::END, idx.len(), Some(&idx)),
        "É"
    );
}

#[test]
fn closure_and_slice_indexers() {
    let by_index = |i: usize| format!("#{i}");
    assert_eq!(by_index.section_text(7), "#7");

    let m = PositionMapper::new();
    assert_eq!(
        m.section_label_at(HandlePosition::new(0.5), 11, Some(&by_index)),
        "#5"
    );

    let labels = ["x", "y"];
    assert_eq!(labels[..].section_text(1), "y");
    assert_eq!(labels[..].section_text(2), "");
}

#[test]
fn options_defaults_and_builders() {
    let o = FastScrollOptions::default();
    assert!(o.enabled);
    assert!(o.hide_scrollbar);
    assert_eq!(o.hide_delay_ms, DEFAULT_HIDE_DELAY_MS);
    assert!(o.show_bubble);
    assert!(!o.bubble_always_visible);
    assert!(!o.show_track);
    assert!(!o.reverse_layout);
    assert_eq!(o.track_snap_range, DEFAULT_TRACK_SNAP_RANGE);
    assert_eq!(o.mapper(), PositionMapper::new());

    let o = FastScrollOptions::new()
        .with_bubble_visible(false, true)
        .with_reverse_layout(true)
        .with_hide_delay_ms(250)
        .with_track_visible(true);
    assert!(!o.show_bubble);
    assert!(!o.bubble_always_visible);
    assert!(o.show_track);
    assert_eq!(o.hide_delay_ms, 250);
    assert_eq!(o.mapper(), PositionMapper::reversed());

    let o = o.with_bubble_visible(true, true);
    assert!(o.show_bubble && o.bubble_always_visible);
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_values_are_clamped() {
    let p: HandlePosition = serde_json::from_str("5.0").unwrap();
    assert_eq!(p, HandlePosition::END);
    let p: HandlePosition = serde_json::from_str("-0.25").unwrap();
    assert_eq!(p, HandlePosition::START);

    let s: ScrollState = serde_json::from_str(
        r#"{"content_length":160.0,"viewport_length":100.0,"scroll_offset":-500.0}"#,
    )
    .unwrap();
    assert_eq!(s.scroll_offset(), 0.0);
    assert_eq!(s.max_scroll_offset(), 60.0);

    let s: ScrollState = serde_json::from_str(
        r#"{"content_length":160.0,"viewport_length":100.0,"scroll_offset":900.0}"#,
    )
    .unwrap();
    assert_eq!(s.scroll_offset(), 60.0);

    let json = serde_json::to_string(&ScrollState::new(160.0, 100.0, 30.0)).unwrap();
    assert_eq!(
        json,
        r#"{"content_length":160.0,"viewport_length":100.0,"scroll_offset":30.0}"#
    );
    assert_eq!(serde_json::to_string(&HandlePosition::new(0.5)).unwrap(), "0.5");
}
