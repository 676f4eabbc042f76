//! Filesystem content for Recovery Journey.
//!
//! A content directory holds journey documents (either directly or under a
//! `journeys/` subdirectory) and the master toolkit catalog. This crate
//! locates and decodes them, and lists the journeys available to play.

/// Journey discovery for the selection screen.
pub mod discovery;
/// A [`rj_core::ContentProvider`] backed by a content directory.
pub mod directory;

pub use directory::{CATALOG_FILE, DirectoryProvider, JOURNEYS_DIR};
pub use discovery::{JourneySummary, discover_journeys};
