//! Title membership over the ordered entry list

use super::list::EntryList;
use crate::model::{Entry, TitleKey};

/// Title-based membership queries
///
/// Callers only go through this trait, so a hash-backed index can replace
/// the linear scan without touching them.
pub trait TitleIndex {
    /// Position of the entry with this title, if any
    fn position(&self, title: &str) -> Option<usize>;

    /// The entry with this title, if any
    fn find(&self, title: &str) -> Option<&Entry>;

    /// Case-insensitive exact match on title
    fn contains(&self, title: &str) -> bool {
        self.position(title).is_some()
    }
}

impl TitleIndex for EntryList {
    fn position(&self, title: &str) -> Option<usize> {
        let key = TitleKey::new(title);
        self.iter().position(|entry| key.matches(entry.title()))
    }

    fn find(&self, title: &str) -> Option<&Entry> {
        self.position(title).and_then(|index| self.get(index))
    }
}
