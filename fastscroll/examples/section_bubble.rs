// Example: bubble labels from a sorted list of names.
use fastscroll::{FirstLetterIndexer, HandlePosition, PositionMapper, SectionIndexer};

fn main() {
    let mut names = vec![
        "Zoe", "Alice", "Mallory", "Bob", "Carol", "Dave", "Eve", "Oscar", "Peggy", "Trent",
        "Victor", "Walter",
    ];
    names.sort_unstable();
    let indexer = FirstLetterIndexer::new(names);
    let mapper = PositionMapper::new();

    for step in 0..=4 {
        let p = HandlePosition::new(step as f32 / 4.0);
        let index = mapper.item_index_at(p, indexer.len());
        let label = mapper.section_label_at(p, indexer.len(), Some(&indexer));
        println!("position={:.2} item={index:?} bubble={label:?}", p.get());
    }

    // Any `Fn(usize) -> String` works as an indexer too.
    let by_page = |i: usize| format!("page {}", i / 50 + 1);
    println!("item 120 -> {}", by_page.section_text(120));
}
