use fastscroll::{FastScrollOptions, ScrollPhase, ScrollState, TrackGeometry};
use fastscroll_adapter::{DragUpdate, FastScrollEvent, FastScroller};

fn main() {
    // Example: a headless drag session.
    //
    // An adapter would:
    // - forward layout, scroll and touch events from its UI toolkit
    // - scroll the real list to `target_index` / `target_offset` from each drag update
    // - call tick(now_ms) in a frame loop / timer so the scrollbar can auto-hide
    // - render handle/bubble from the controller's getters
    let items: Vec<String> = (b'A'..=b'Z')
        .flat_map(|c| (0..40).map(move |i| format!("{}{i:02}", c as char)))
        .collect();
    let count = items.len();
    let labels: Vec<String> = items.iter().map(|s| s[..1].to_string()).collect();

    let mut c = FastScroller::new(FastScrollOptions::new().with_hide_delay_ms(600));
    c.on_layout(
        TrackGeometry::new(480.0, 40.0)
            .with_bubble_length(56.0)
            .with_handle_cross_start(8.0),
    );
    c.set_item_count(count);
    c.set_section_indexer(Some(labels));
    c.set_listener(Some(|e: FastScrollEvent| println!("listener: {e:?}")));

    let mut list = ScrollState::new(count as f32 * 32.0, 480.0, 0.0);
    c.on_scrolled(list);

    let mut now_ms = 0u64;
    let down = c.on_touch_down(30.0, 12.0).expect("touch lands on the handle");
    list = follow(&mut c, list, &down, now_ms);
    for touch in [120.0, 240.0, 360.0, 470.0] {
        now_ms += 16;
        if let Some(update) = c.on_touch_move(touch) {
            list = follow(&mut c, list, &update, now_ms);
        }
    }
    c.on_touch_up(now_ms);
    c.on_scroll_phase(ScrollPhase::Idle, now_ms);

    while c.scrollbar_visible() {
        now_ms += 100;
        if c.tick(now_ms) {
            println!("t={now_ms} scrollbar hidden");
        }
    }
}

/// Scrolls the "real" list to the drag target and reports it back, as an adapter would.
fn follow(
    c: &mut FastScroller,
    list: ScrollState,
    update: &DragUpdate,
    now_ms: u64,
) -> ScrollState {
    let list = list.with_scroll_offset(update.target_offset);
    c.on_scrolled(list);
    println!(
        "t={now_ms} item={:?} bubble={:?} handle_top={:.1}",
        update.target_index, update.label, update.handle_offset
    );
    list
}
