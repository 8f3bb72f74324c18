//! Request handlers for the admin API.
//!
//! Handlers call the synchronous catalog functions directly; with a single
//! local operator there is nothing to gain from pushing store I/O onto a
//! blocking pool.

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use minishelf_catalog::{EntryMetadata, Submission, save, scan};
use serde::Serialize;

use crate::error::AdminError;
use crate::state::AppState;

/// The hand-written operator form page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Current dropdown choices and known identifiers for the form.
pub async fn metadata(State(store): State<AppState>) -> Json<EntryMetadata> {
    Json(scan(&store))
}

/// Response body for a successful save.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub message: String,
    pub identifier: String,
    pub written: Vec<String>,
    pub warnings: Vec<String>,
}

/// Save a new entry: photos first, then the record.
pub async fn save_entry(
    State(store): State<AppState>,
    Json(submission): Json<Submission>,
) -> Result<Json<SaveResponse>, AdminError> {
    let receipt = save(&store, &submission)?;
    Ok(Json(SaveResponse {
        message: format!(
            "saved \"{}\" ({} files written)",
            receipt.slug,
            receipt.written.len()
        ),
        identifier: receipt.slug,
        written: receipt
            .written
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        warnings: receipt.warnings,
    }))
}
