//! YAML record I/O for gallery entries.
//!
//! Records are parsed with a structured parser, but rendered by hand: the
//! persisted format fixes the field order and quoting, and omits absent
//! optional fields entirely.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::store::GalleryStore;
use crate::types::Entry;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
}

/// Load one entry record from a YAML file.
pub fn load_entry(path: &Path) -> Result<Entry, RecordError> {
    let contents = fs::read_to_string(path).map_err(|e| RecordError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yml::from_str(&contents).map_err(|e| RecordError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// All entry record files in a directory, sorted by filename.
///
/// A missing directory yields the empty list.
pub fn list_entry_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    files.sort();
    files
}

/// Render an entry in the persisted record layout.
///
/// Field order is fixed: title, photos, manufacturer, date, scale, then
/// game, faction, and order when present. Strings are double-quoted; date
/// and order are written as unquoted literals.
pub fn render_entry(entry: &Entry) -> String {
    let mut yaml = String::new();

    write_quoted(&mut yaml, "title", &entry.title);
    yaml.push_str("photos:\n");
    for photo in &entry.photos {
        yaml.push_str("  - ");
        yaml.push_str(&quoted(photo));
        yaml.push('\n');
    }
    write_quoted(&mut yaml, "manufacturer", &entry.manufacturer);
    yaml.push_str(&format!("date: {}\n", entry.date));
    write_quoted(&mut yaml, "scale", &entry.scale);

    if let Some(game) = &entry.game {
        write_quoted(&mut yaml, "game", game);
    }
    if let Some(faction) = &entry.faction {
        write_quoted(&mut yaml, "faction", faction);
    }
    if let Some(order) = entry.order {
        yaml.push_str(&format!("order: {order}\n"));
    }

    yaml
}

/// Write an entry record to its canonical location, creating `entries/` if
/// needed. Returns the written path.
pub fn write_entry(
    store: &GalleryStore,
    slug: &str,
    entry: &Entry,
) -> Result<PathBuf, std::io::Error> {
    fs::create_dir_all(store.entries_dir())?;
    let path = store.entry_path(slug);
    fs::write(&path, render_entry(entry))?;
    Ok(path)
}

fn write_quoted(yaml: &mut String, key: &str, value: &str) {
    yaml.push_str(key);
    yaml.push_str(": ");
    yaml.push_str(&quoted(value));
    yaml.push('\n');
}

fn quoted(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
