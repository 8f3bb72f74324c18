//! The admin save pipeline: validate a submission, derive its identifier,
//! check both filename namespaces for collisions, then write photos and the
//! entry record.

use std::fs;
use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use thiserror::Error;

use crate::record::write_entry;
use crate::slug::slugify;
use crate::store::{GalleryStore, IconCategory};
use crate::types::Entry;

/// One form submission from the admin UI.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub title: String,
    pub manufacturer: String,
    pub date: String,
    pub scale: String,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub faction: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    /// Base64 photo payloads in display order, each optionally prefixed
    /// with a `data:image/...;base64,` header.
    pub photos: Vec<String>,
}

/// Errors from [`save`].
#[derive(Debug, Error)]
pub enum SaveError {
    /// Caller-supplied data failed a required-field or identifier check.
    /// Raised before any filesystem mutation.
    #[error("{0}")]
    Validation(String),

    /// The derived identifier or a target filename is already taken.
    /// Raised before any filesystem mutation.
    #[error("{0}")]
    Conflict(String),

    /// Write failure after the checks passed. Photos written before the
    /// failure stay on disk; nothing is rolled back.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Successful save outcome: the new identifier, every file written in
/// order, and any advisory warnings.
#[derive(Debug, Clone)]
pub struct SaveReceipt {
    pub slug: String,
    pub written: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

/// Persist one submission as a new entry.
///
/// Validation and both collision checks run before anything touches disk,
/// so every [`SaveError::Validation`] and [`SaveError::Conflict`] leaves
/// the store untouched. Photo payloads are all decoded up front for the
/// same reason. An I/O failure partway through the photo batch leaves the
/// already-written files on disk.
pub fn save(store: &GalleryStore, submission: &Submission) -> Result<SaveReceipt, SaveError> {
    let required = [
        &submission.title,
        &submission.manufacturer,
        &submission.date,
        &submission.scale,
    ];
    if required.iter().any(|f| f.trim().is_empty()) || submission.photos.is_empty() {
        return Err(SaveError::Validation("missing required fields".into()));
    }

    let slug = slugify(&submission.title);
    if slug.is_empty() {
        return Err(SaveError::Validation(format!(
            "title {:?} produces an empty identifier",
            submission.title
        )));
    }

    if store.entry_path(&slug).exists() {
        return Err(SaveError::Conflict(format!(
            "an entry named \"{slug}\" already exists"
        )));
    }

    // Pre-flight the whole photo batch so a late collision never leaves a
    // partial batch on disk.
    let filenames: Vec<String> = (0..submission.photos.len())
        .map(|position| GalleryStore::photo_filename(&slug, position))
        .collect();
    for filename in &filenames {
        if store.photo_path(filename).exists() {
            return Err(SaveError::Conflict(format!(
                "photo file \"{filename}\" already exists"
            )));
        }
    }

    let mut decoded = Vec::with_capacity(submission.photos.len());
    for (position, payload) in submission.photos.iter().enumerate() {
        let bytes = decode_photo(payload).map_err(|e| {
            SaveError::Validation(format!("photo {} is not valid base64: {e}", position + 1))
        })?;
        decoded.push(bytes);
    }

    // Payload bytes are written verbatim; re-encoding is the browser
    // editor's job.
    let mut written = Vec::with_capacity(decoded.len() + 1);
    fs::create_dir_all(store.photos_dir())?;
    for (filename, bytes) in filenames.iter().zip(&decoded) {
        let dest = store.photo_path(filename);
        fs::write(&dest, bytes)?;
        log::debug!("wrote {} ({} bytes)", dest.display(), bytes.len());
        written.push(dest);
    }

    let entry = Entry {
        title: submission.title.clone(),
        photos: filenames.iter().map(|f| GalleryStore::photo_ref(f)).collect(),
        manufacturer: submission.manufacturer.clone(),
        date: submission.date.clone(),
        scale: submission.scale.clone(),
        game: none_if_blank(&submission.game),
        faction: none_if_blank(&submission.faction),
        order: submission.order,
    };
    written.push(write_entry(store, &slug, &entry)?);

    let mut warnings = Vec::new();
    check_icon(store, IconCategory::Manufacturer, &entry.manufacturer, &mut warnings);
    if let Some(game) = &entry.game {
        check_icon(store, IconCategory::Game, game, &mut warnings);
    }
    if let Some(faction) = &entry.faction {
        check_icon(store, IconCategory::Faction, faction, &mut warnings);
    }

    log::info!("saved entry \"{slug}\" ({} files)", written.len());
    Ok(SaveReceipt {
        slug,
        written,
        warnings,
    })
}

/// Strip an optional data-URI header and decode the base64 payload.
fn decode_photo(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let raw = match payload.split_once(";base64,") {
        Some((header, rest)) if header.starts_with("data:") => rest,
        _ => payload,
    };
    BASE64.decode(raw.trim())
}

/// Optional form fields arrive as empty strings when left blank; treat
/// those as absent so the record omits them.
fn none_if_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Missing icons are advisory only; the gallery renders without them.
fn check_icon(
    store: &GalleryStore,
    category: IconCategory,
    value: &str,
    warnings: &mut Vec<String>,
) {
    let value_slug = slugify(value);
    if !store.icon_path(category, &value_slug).exists() {
        warnings.push(format!(
            "no icon for \"{value}\" (expected {})",
            GalleryStore::icon_ref(category, &value_slug)
        ));
    }
}
