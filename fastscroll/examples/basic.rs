// Example: map a list's scroll offset to a handle, and a drag back to a scroll target.
use fastscroll::{HandlePosition, PositionMapper, ScrollState, TrackGeometry};

fn main() {
    let mapper = PositionMapper::new();
    let track = TrackGeometry::new(400.0, 48.0).with_bubble_length(64.0);

    // 10_000 rows of 24px in a 400px viewport.
    let state = ScrollState::new(10_000.0 * 24.0, 400.0, 60_000.0);
    let position = mapper.to_handle_position(&state);
    println!(
        "offset={} -> position={:.4} handle_top={:.1}",
        state.scroll_offset(),
        position.get(),
        track.handle_offset(position)
    );

    for touch in [0.0, 120.0, 200.0, 380.0] {
        let p = track.position_at(touch);
        println!(
            "touch={touch:>5} -> position={:.3} offset={:.1} item={:?}",
            p.get(),
            mapper.to_scroll_offset(p, &state),
            mapper.target_index(p, 10_000)
        );
    }

    let end = mapper.to_scroll_offset(HandlePosition::END, &state);
    println!("end offset={end} (max={})", state.max_scroll_offset());
}
