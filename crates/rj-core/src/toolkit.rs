//! Tool definitions and the master toolkit catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A coping tool the player can unlock and use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Display name.
    pub title: String,
    /// What the tool does.
    #[serde(default)]
    pub description: String,
    /// Resist spent when the tool is used.
    #[serde(default)]
    pub default_resist_cost: i32,
    /// Reduction of the use score when the tool is used.
    #[serde(default)]
    pub default_use_benefit: i32,
}

impl ToolDefinition {
    /// Create a new tool definition.
    pub fn new(title: impl Into<String>, resist_cost: i32, use_benefit: i32) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            default_resist_cost: resist_cost,
            default_use_benefit: use_benefit,
        }
    }
}

/// Every tool a journey may reference, keyed by tool id.
///
/// Loaded once per process and shared read-only between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitCatalog {
    /// Tool definitions keyed by id.
    #[serde(default)]
    pub tools: BTreeMap<String, ToolDefinition>,
}

impl ToolkitCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a catalog from JSON text of the form `{"tools": {...}}`.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|source| CoreError::Malformed {
            what: "toolkit catalog".to_string(),
            source,
        })
    }

    /// Add a tool under `id`.
    pub fn with_tool(mut self, id: impl Into<String>, tool: ToolDefinition) -> Self {
        self.tools.insert(id.into(), tool);
        self
    }

    /// Look up a tool by id.
    pub fn get(&self, id: &str) -> Option<&ToolDefinition> {
        self.tools.get(id)
    }

    /// Whether the catalog defines `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.tools.contains_key(id)
    }

    /// Number of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Iterate over `(id, definition)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ToolDefinition)> {
        self.tools.iter().map(|(id, tool)| (id.as_str(), tool))
    }
}
