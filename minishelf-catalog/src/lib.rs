//! Gallery content-store data model, record I/O, and the admin save pipeline.
//!
//! This crate defines the persistent data model for the miniature gallery
//! without any HTTP dependencies. Consumers can use these types directly for
//! serialization, display, or behind `minishelf-admin`'s web form.

pub mod record;
pub mod save;
pub mod scan;
pub mod slug;
pub mod store;
pub mod types;

pub use record::{RecordError, load_entry, render_entry, write_entry};
pub use save::{SaveError, SaveReceipt, Submission, save};
pub use scan::scan;
pub use slug::slugify;
pub use store::{GalleryStore, IconCategory};
pub use types::*;
