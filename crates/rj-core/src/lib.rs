//! Core content types for Recovery Journey.
//!
//! This crate defines the data model a journey is authored in: the scene
//! graph document, its scenes and choices, and the shared toolkit catalog.
//! It is independent of any storage; a [`ContentProvider`] supplies the
//! documents and the engine consumes them read-only.

/// Error types used throughout the crate.
pub mod error;
/// Content provider seam and an in-memory implementation.
pub mod provider;
/// Scenes, choices, and the per-scene toolkit selector.
pub mod scene;
/// The scene graph document for a single journey.
pub mod scene_graph;
/// Tool definitions and the master toolkit catalog.
pub mod toolkit;
/// Static validation of scene graph documents.
pub mod validate;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export provider types.
pub use provider::{ContentProvider, MemoryProvider};
/// Re-export scene types.
pub use scene::{Choice, ResourceLink, Scene, SceneToolkit};
/// Re-export scene graph types.
pub use scene_graph::{InitialValues, JourneyMetadata, SceneGraph};
/// Re-export toolkit types.
pub use toolkit::{ToolDefinition, ToolkitCatalog};
/// Re-export validation types.
pub use validate::{ContentIssue, Severity, validate_scene_graph};
