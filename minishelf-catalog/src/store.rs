//! Store layout: where entries, photos, and icons live under the gallery root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Extension for photo files. Uploads are written verbatim; the browser
/// editor already exports PNG.
pub const PHOTO_EXT: &str = "png";

/// Extension for newly written entry records.
pub const ENTRY_EXT: &str = "yaml";

/// Categories that can carry a presentation icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    Manufacturer,
    Game,
    Faction,
}

impl IconCategory {
    /// Subdirectory under `icons/` for this category.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Manufacturer => "manufacturers",
            Self::Game => "games",
            Self::Faction => "factions",
        }
    }
}

/// Filesystem layout of one gallery content store.
///
/// Expected structure:
/// ```text
/// root/
///   entries/
///     space-marine.yaml
///     ...
///   photos/
///     space-marine.png
///     space-marine-2.png
///     ...
///   icons/
///     manufacturers/
///       games-workshop.png
///     games/
///     factions/
/// ```
#[derive(Debug, Clone)]
pub struct GalleryStore {
    root: PathBuf,
}

impl GalleryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one YAML record per entry.
    pub fn entries_dir(&self) -> PathBuf {
        self.root.join("entries")
    }

    /// Directory holding uploaded photo files.
    pub fn photos_dir(&self) -> PathBuf {
        self.root.join("photos")
    }

    /// Canonical record location for an entry identifier.
    pub fn entry_path(&self, slug: &str) -> PathBuf {
        self.entries_dir().join(format!("{slug}.{ENTRY_EXT}"))
    }

    /// Filename for the photo at `position` in an entry's sequence.
    ///
    /// The primary photo takes the bare slug; later photos are numbered
    /// from 2.
    pub fn photo_filename(slug: &str, position: usize) -> String {
        if position == 0 {
            format!("{slug}.{PHOTO_EXT}")
        } else {
            format!("{slug}-{}.{PHOTO_EXT}", position + 1)
        }
    }

    pub fn photo_path(&self, filename: &str) -> PathBuf {
        self.photos_dir().join(filename)
    }

    /// Store-root-relative reference recorded in entry files.
    pub fn photo_ref(filename: &str) -> String {
        format!("photos/{filename}")
    }

    /// Store-root-relative icon location for a categorical value's slug.
    pub fn icon_ref(category: IconCategory, value_slug: &str) -> String {
        format!("icons/{}/{value_slug}.{PHOTO_EXT}", category.dir_name())
    }

    pub fn icon_path(&self, category: IconCategory, value_slug: &str) -> PathBuf {
        self.root.join(Self::icon_ref(category, value_slug))
    }
}
