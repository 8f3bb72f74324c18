//! Data model types for the gallery content store.

use serde::{Deserialize, Serialize};

/// One gallery entry, persisted as a single YAML record.
///
/// Entries are created once by the save pipeline and never mutated or
/// deleted by this system. Field order here matches the serialized record
/// layout; see [`crate::record::render_entry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    /// Store-root-relative photo paths in display order. The first is the
    /// primary photo.
    pub photos: Vec<String>,
    pub manufacturer: String,
    /// Calendar date as supplied by the operator, stored literally.
    pub date: String,
    pub scale: String,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub faction: Option<String>,
    /// Manual sort override for the gallery index.
    #[serde(default)]
    pub order: Option<i64>,
}

/// Distinct categorical values and known identifiers across the whole store.
///
/// Produced by [`crate::scan::scan`]. The four value lists are sorted
/// lexicographically; `slugs` keeps directory listing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryMetadata {
    pub manufacturers: Vec<String>,
    pub games: Vec<String>,
    pub factions: Vec<String>,
    pub scales: Vec<String>,
    pub slugs: Vec<String>,
}
