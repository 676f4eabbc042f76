//! Configuration for a game session.

use rj_core::scene_graph::DEFAULT_ENTRY_SCENE;

/// How resource links attached to choices are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResourceDisplay {
    /// In a popup over the scene.
    #[default]
    Popup,
    /// Inline below the choices.
    Inline,
}

/// Configuration for a session. Survives restarts and exits.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Scene every journey starts in.
    pub entry_scene: String,
    /// Presentation of resource links.
    pub resource_display: ResourceDisplay,
    /// Whether to expose route ids and the scene path to the player.
    pub show_dev_tools: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            entry_scene: DEFAULT_ENTRY_SCENE.to_string(),
            resource_display: ResourceDisplay::Popup,
            show_dev_tools: false,
        }
    }
}

impl EngineConfig {
    /// Set the entry scene.
    pub fn with_entry_scene(mut self, scene_id: impl Into<String>) -> Self {
        self.entry_scene = scene_id.into();
        self
    }

    /// Set how resource links are shown.
    pub fn with_resource_display(mut self, display: ResourceDisplay) -> Self {
        self.resource_display = display;
        self
    }

    /// Enable or disable developer tools.
    pub fn with_dev_tools(mut self, enabled: bool) -> Self {
        self.show_dev_tools = enabled;
        self
    }
}
