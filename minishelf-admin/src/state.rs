//! Shared application state type.

use std::sync::Arc;

use minishelf_catalog::GalleryStore;

/// State shared across all handlers: the content store this server
/// administers.
pub type AppState = Arc<GalleryStore>;
