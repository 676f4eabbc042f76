//! Scenes and the choices that connect them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Marker value of [`Scene::end`] that makes a scene a winning terminal.
pub const WIN_MARKER: &str = "win";

/// A single node of a journey's scene graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Heading shown above the narration.
    #[serde(default)]
    pub title: String,
    /// The narrative text for this scene.
    #[serde(default)]
    pub narration: String,
    /// Choices offered to the player, in display order.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Which unlocked tools the player may use while in this scene.
    #[serde(default)]
    pub toolkit: SceneToolkit,
    /// Terminal marker; only `"win"` is meaningful.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl Scene {
    /// Create a new scene with the given title and narration.
    pub fn new(title: impl Into<String>, narration: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            narration: narration.into(),
            ..Self::default()
        }
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Set the toolkit selector.
    pub fn with_toolkit(mut self, toolkit: SceneToolkit) -> Self {
        self.toolkit = toolkit;
        self
    }

    /// Mark this scene as a winning terminal.
    pub fn as_win(mut self) -> Self {
        self.end = Some(WIN_MARKER.to_string());
        self
    }

    /// Whether reaching this scene wins the journey.
    pub fn is_win(&self) -> bool {
        self.end.as_deref() == Some(WIN_MARKER)
    }
}

/// A link to an outside support resource attached to a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    /// Why the resource is relevant.
    #[serde(default)]
    pub description: String,
    /// Where the resource lives.
    pub url: String,
    /// Link text.
    #[serde(default)]
    pub text: String,
}

/// A single choice offered in a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// The text shown to the player.
    pub label: String,
    /// Scene to move to once the choice is confirmed.
    pub next_scene_id: String,
    /// Change applied to the resist score.
    #[serde(default)]
    pub resist_change: i32,
    /// Change applied to the use (urge) score.
    #[serde(default)]
    pub use_change: i32,
    /// Hours that pass when the choice is confirmed.
    #[serde(default)]
    pub time_advance: i64,
    /// Optional support resource shown when the choice is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_link: Option<ResourceLink>,
    /// Tool unlocked when the choice is confirmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_tool: Option<String>,
}

impl Choice {
    /// Create a new choice leading to `next_scene_id`.
    pub fn new(label: impl Into<String>, next_scene_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            next_scene_id: next_scene_id.into(),
            resist_change: 0,
            use_change: 0,
            time_advance: 0,
            resource_link: None,
            unlock_tool: None,
        }
    }

    /// Set the resist change.
    pub fn with_resist_change(mut self, delta: i32) -> Self {
        self.resist_change = delta;
        self
    }

    /// Set the use change.
    pub fn with_use_change(mut self, delta: i32) -> Self {
        self.use_change = delta;
        self
    }

    /// Set the time advance in hours.
    pub fn with_time_advance(mut self, hours: i64) -> Self {
        self.time_advance = hours;
        self
    }

    /// Attach a resource link.
    pub fn with_resource(mut self, link: ResourceLink) -> Self {
        self.resource_link = Some(link);
        self
    }

    /// Unlock a tool when confirmed.
    pub fn with_unlock(mut self, tool_id: impl Into<String>) -> Self {
        self.unlock_tool = Some(tool_id.into());
        self
    }
}

/// Which unlocked tools a scene exposes.
///
/// Authored as `false` (or absent), `true`, or a list of tool ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SceneToolkit {
    /// No tools.
    #[default]
    None,
    /// Every tool the player has unlocked.
    All,
    /// Only the listed tools, each still gated by prior unlock.
    Only(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawToolkit {
    Flag(bool),
    Ids(Vec<Value>),
}

impl<'de> Deserialize<'de> for SceneToolkit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawToolkit>::deserialize(deserializer)?;
        Ok(match raw {
            None | Some(RawToolkit::Flag(false)) => Self::None,
            Some(RawToolkit::Flag(true)) => Self::All,
            Some(RawToolkit::Ids(ids)) => Self::Only(string_ids(ids)),
        })
    }
}

/// Keep the string entries of an authored id list, dropping anything else.
pub(crate) fn string_ids(values: Vec<Value>) -> Vec<String> {
    values
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

impl Serialize for SceneToolkit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_bool(false),
            Self::All => serializer.serialize_bool(true),
            Self::Only(ids) => ids.serialize(serializer),
        }
    }
}
