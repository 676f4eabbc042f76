//! Journey and catalog files read from a content directory.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use rj_core::{ContentProvider, CoreError, CoreResult, SceneGraph, ToolkitCatalog};

/// Subdirectory that journey documents are normally kept in.
pub const JOURNEYS_DIR: &str = "journeys";

/// File name of the master toolkit catalog.
pub const CATALOG_FILE: &str = "master_journey_toolkit.json";

/// Loads content from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    /// Create a provider rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The content root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths tried for `journey_id`, in order of preference.
    ///
    /// Both `journey1` and `journey_1` spellings are accepted for either id.
    pub fn journey_candidates(&self, journey_id: &str) -> Vec<PathBuf> {
        let journeys = self.root.join(JOURNEYS_DIR);
        let mut candidates = vec![
            journeys.join(format!("{journey_id}.json")),
            journeys.join(format!("{}.json", journey_id.replacen("journey", "journey_", 1))),
            journeys.join(format!("{}.json", journey_id.replacen("journey_", "journey", 1))),
            self.root.join(format!("{journey_id}.json")),
        ];
        let mut seen = HashSet::new();
        candidates.retain(|path| seen.insert(path.clone()));
        candidates
    }
}

impl ContentProvider for DirectoryProvider {
    fn load_journey(&self, journey_id: &str) -> CoreResult<SceneGraph> {
        for path in self.journey_candidates(journey_id) {
            match read_optional(&path)? {
                Some(text) => {
                    tracing::info!(journey = journey_id, path = %path.display(), "loading journey");
                    return SceneGraph::from_json_str(&text);
                }
                None => {
                    tracing::debug!(
                        path = %path.display(),
                        "journey file not found, trying next location"
                    );
                }
            }
        }

        Err(CoreError::JourneyNotFound(journey_id.to_string()))
    }

    fn load_catalog(&self) -> CoreResult<ToolkitCatalog> {
        let path = self.root.join(CATALOG_FILE);
        let text = read_optional(&path)?.ok_or_else(|| {
            CoreError::CatalogUnavailable(format!("{} not found", path.display()))
        })?;
        let catalog = ToolkitCatalog::from_json_str(&text)?;
        tracing::info!(tools = catalog.len(), "toolkit catalog loaded");
        Ok(catalog)
    }
}

/// Read a file, treating a missing file as `None`.
pub(crate) fn read_optional(path: &Path) -> CoreResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(CoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
