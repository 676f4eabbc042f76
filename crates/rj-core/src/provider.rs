//! Content provider seam.
//!
//! The engine never reads files itself. It asks a [`ContentProvider`] for a
//! journey's scene graph when a session starts and for the toolkit catalog
//! once at construction.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::scene_graph::SceneGraph;
use crate::toolkit::ToolkitCatalog;

/// Supplies journey documents and the toolkit catalog.
pub trait ContentProvider {
    /// Load the scene graph for `journey_id`.
    fn load_journey(&self, journey_id: &str) -> CoreResult<SceneGraph>;

    /// Load the master toolkit catalog.
    fn load_catalog(&self) -> CoreResult<ToolkitCatalog>;
}

impl<P: ContentProvider + ?Sized> ContentProvider for &P {
    fn load_journey(&self, journey_id: &str) -> CoreResult<SceneGraph> {
        (**self).load_journey(journey_id)
    }

    fn load_catalog(&self) -> CoreResult<ToolkitCatalog> {
        (**self).load_catalog()
    }
}

/// A provider backed by documents held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    journeys: HashMap<String, SceneGraph>,
    catalog: Option<ToolkitCatalog>,
}

impl MemoryProvider {
    /// Create a provider with no journeys and no catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a journey.
    pub fn with_journey(mut self, journey_id: impl Into<String>, graph: SceneGraph) -> Self {
        self.journeys.insert(journey_id.into(), graph);
        self
    }

    /// Set the catalog.
    pub fn with_catalog(mut self, catalog: ToolkitCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }
}

impl ContentProvider for MemoryProvider {
    fn load_journey(&self, journey_id: &str) -> CoreResult<SceneGraph> {
        self.journeys
            .get(journey_id)
            .cloned()
            .ok_or_else(|| CoreError::JourneyNotFound(journey_id.to_string()))
    }

    fn load_catalog(&self) -> CoreResult<ToolkitCatalog> {
        self.catalog
            .clone()
            .ok_or_else(|| CoreError::CatalogUnavailable("no catalog registered".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    #[test]
    fn memory_provider_lookup() {
        let graph = SceneGraph::new().with_scene("scene_001", Scene::new("A", ""));
        let provider = MemoryProvider::new().with_journey("journey1", graph);

        assert_eq!(provider.load_journey("journey1").unwrap().scene_count(), 1);
        assert!(matches!(
            provider.load_journey("journey9"),
            Err(CoreError::JourneyNotFound(id)) if id == "journey9"
        ));
    }

    #[test]
    fn memory_provider_without_catalog() {
        let provider = MemoryProvider::new();
        assert!(matches!(
            provider.load_catalog(),
            Err(CoreError::CatalogUnavailable(_))
        ));

        let provider = provider.with_catalog(ToolkitCatalog::new());
        assert!(provider.load_catalog().unwrap().is_empty());
    }

    #[test]
    fn provider_by_reference() {
        fn count<P: ContentProvider>(p: P) -> usize {
            p.load_journey("j").map(|g| g.scene_count()).unwrap_or(0)
        }
        let graph = SceneGraph::new().with_scene("s", Scene::default());
        let provider = MemoryProvider::new().with_journey("j", graph);
        assert_eq!(count(&provider), 1);
    }
}
