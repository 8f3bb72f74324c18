//! Metadata scan across all persisted entries.

use std::collections::BTreeSet;
use std::fs;

use serde::Deserialize;

use crate::record::list_entry_files;
use crate::store::GalleryStore;
use crate::types::EntryMetadata;

/// The four categorical fields the scan extracts. Everything else in a
/// record is ignored here, so a record that is incomplete in other ways
/// still contributes its values.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategoricalFields {
    manufacturer: Option<String>,
    game: Option<String>,
    faction: Option<String>,
    scale: Option<String>,
}

/// Collect distinct categorical values and known identifiers.
///
/// Read-only. A missing `entries/` directory yields the empty result. A
/// record that fails to parse still contributes its identifier (the file
/// occupies the name regardless) but no categorical values.
pub fn scan(store: &GalleryStore) -> EntryMetadata {
    let mut manufacturers = BTreeSet::new();
    let mut games = BTreeSet::new();
    let mut factions = BTreeSet::new();
    let mut scales = BTreeSet::new();
    let mut slugs = Vec::new();

    for path in list_entry_files(&store.entries_dir()) {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            slugs.push(stem.to_string());
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Skipping unreadable entry {}: {e}", path.display());
                continue;
            }
        };
        match serde_yml::from_str::<CategoricalFields>(&contents) {
            Ok(fields) => {
                for (set, value) in [
                    (&mut manufacturers, fields.manufacturer),
                    (&mut games, fields.game),
                    (&mut factions, fields.faction),
                    (&mut scales, fields.scale),
                ] {
                    if let Some(value) = value {
                        if !value.is_empty() {
                            set.insert(value);
                        }
                    }
                }
            }
            Err(e) => log::warn!("Skipping malformed entry {}: {e}", path.display()),
        }
    }

    EntryMetadata {
        manufacturers: manufacturers.into_iter().collect(),
        games: games.into_iter().collect(),
        factions: factions.into_iter().collect(),
        scales: scales.into_iter().collect(),
        slugs,
    }
}
