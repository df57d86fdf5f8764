//! Entries kept in descending added-at order

use super::search::TitleIndex;
use crate::error::PlaylistError;
use crate::model::Entry;
use std::cmp::Ordering;

/// Playlist entries, most recently added first
///
/// Owns every entry it holds. Titles are unique case-insensitively and no
/// two entries share an `added_at` instant.
#[derive(Debug, Clone, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` before the first entry added strictly earlier than it
    ///
    /// Appends when every existing entry is newer. Returns the position the
    /// entry landed at.
    pub fn insert_ordered(&mut self, entry: Entry) -> Result<usize, PlaylistError> {
        if self.contains(entry.title()) {
            return Err(PlaylistError::Duplicate {
                title: entry.title().to_string(),
            });
        }

        let mut position = self.entries.len();
        for (index, existing) in self.entries.iter().enumerate() {
            match existing.added_at().cmp(&entry.added_at()) {
                Ordering::Greater => continue,
                Ordering::Equal => {
                    // Same clock tick as an existing entry
                    return Err(PlaylistError::Duplicate {
                        title: entry.title().to_string(),
                    });
                }
                Ordering::Less => {
                    position = index;
                    break;
                }
            }
        }

        self.entries.insert(position, entry);
        Ok(position)
    }

    /// Remove the entry whose title matches, returning where it was
    pub fn remove_by_title(&mut self, title: &str) -> Result<(usize, Entry), PlaylistError> {
        let index = self
            .position(title)
            .ok_or_else(|| PlaylistError::NotFound {
                title: title.to_string(),
            })?;
        Ok((index, self.entries.remove(index)))
    }

    /// Entries in order, newest first
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
