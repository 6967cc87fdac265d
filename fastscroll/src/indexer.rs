use alloc::string::String;
use alloc::vec::Vec;

/// Maps a list position to the short label shown in the section bubble.
///
/// Implemented for:
/// - closures `Fn(usize) -> String`
/// - label lists (`[S]`, `Vec<S>` with `S: AsRef<str>`), one label per item
/// - [`FirstLetterIndexer`]
///
/// Out-of-range indexes should yield an empty label rather than panic.
pub trait SectionIndexer {
    fn section_text(&self, index: usize) -> String;
}

impl<F> SectionIndexer for F
where
    F: Fn(usize) -> String,
{
    fn section_text(&self, index: usize) -> String {
        self(index)
    }
}

impl<S: AsRef<str>> SectionIndexer for [S] {
    fn section_text(&self, index: usize) -> String {
        self.get(index)
            .map(|s| String::from(s.as_ref()))
            .unwrap_or_default()
    }
}

impl<S: AsRef<str>> SectionIndexer for Vec<S> {
    fn section_text(&self, index: usize) -> String {
        self.as_slice().section_text(index)
    }
}

/// Labels each item with the first character of its text.
///
/// Useful for alphabetically sorted lists (contacts, file names, etc.).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FirstLetterIndexer<S> {
    items: Vec<S>,
}

impl<S: AsRef<str>> FirstLetterIndexer<S> {
    pub fn new(items: Vec<S>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[S] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn set_items(&mut self, items: Vec<S>) {
        self.items = items;
    }
}

impl<S: AsRef<str>> SectionIndexer for FirstLetterIndexer<S> {
    fn section_text(&self, index: usize) -> String {
        self.items
            .get(index)
            .and_then(|s| s.as_ref().chars().next())
            .map(String::from)
            .unwrap_or_default()
    }
}
