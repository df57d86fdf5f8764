//! The seam between the playlist engine and the record store

use crate::model::Record;

/// Keyed lookup of canonical song/album records by title
///
/// Lookups are case-insensitive. `get` hands back an owned copy so the
/// playlist entry can outlive the catalogue record.
pub trait Catalogue {
    /// Does a record with this title exist
    fn exists(&self, title: &str) -> bool;

    /// Copy of the record for this title
    fn get(&self, title: &str) -> Option<Record>;
}
