//! The scene graph document for a single journey.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::scene::{Scene, string_ids};

/// Scene that every journey starts in unless configured otherwise.
pub const DEFAULT_ENTRY_SCENE: &str = "scene_001";

/// Per-journey overrides for the starting session values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialValues {
    /// Starting resist score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resist: Option<i32>,
    /// Starting use (urge) score.
    #[serde(default, rename = "use", skip_serializing_if = "Option::is_none")]
    pub urge: Option<i32>,
    /// Tools unlocked from the start. Anything but a list is ignored.
    #[serde(
        default,
        deserialize_with = "lenient_tool_ids",
        skip_serializing_if = "Option::is_none"
    )]
    pub unlocked_tools: Option<Vec<String>>,
}

fn lenient_tool_ids<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(ids)) => Some(string_ids(ids)),
        _ => None,
    })
}

/// Descriptive information shown when choosing a journey.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyMetadata {
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Card image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A journey: scenes keyed by id plus optional starting values.
///
/// Every key other than `initial_values` and `metadata` is a scene id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    /// Overrides for the starting stats and unlocked tools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_values: Option<InitialValues>,
    /// Display metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JourneyMetadata>,
    /// Scenes keyed by id.
    #[serde(flatten)]
    pub scenes: BTreeMap<String, Scene>,
}

impl SceneGraph {
    /// Create an empty scene graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a scene graph from JSON text.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|source| CoreError::Malformed {
            what: "scene graph".to_string(),
            source,
        })
    }

    /// Add a scene under `id`.
    pub fn with_scene(mut self, id: impl Into<String>, scene: Scene) -> Self {
        self.scenes.insert(id.into(), scene);
        self
    }

    /// Set the starting values.
    pub fn with_initial_values(mut self, values: InitialValues) -> Self {
        self.initial_values = Some(values);
        self
    }

    /// Look up a scene by id.
    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Whether a scene with this id exists.
    pub fn contains_scene(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }

    /// Number of scenes.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Title from the metadata block, if any.
    pub fn title(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.title.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Choice, SceneToolkit};

    const JOURNEY: &str = r#"{
        "initial_values": {"resist": 80, "use": 60, "unlocked_tools": ["breathing"]},
        "metadata": {"title": "Friday Night"},
        "scene_001": {
            "title": "The Invitation",
            "narration": "Your old friends are heading to the bar.",
            "toolkit": true,
            "choices": [
                {"label": "Go along", "next_scene_id": "scene_002", "resist_change": -30},
                {"label": "Stay in", "next_scene_id": "scene_003", "unlock_tool": "journal"}
            ]
        },
        "scene_002": {"title": "The Bar", "narration": "Loud.", "choices": []},
        "scene_003": {"title": "Home", "narration": "Quiet.", "end": "win", "choices": []}
    }"#;

    #[test]
    fn parse_document() {
        let graph = SceneGraph::from_json_str(JOURNEY).unwrap();

        assert_eq!(graph.scene_count(), 3);
        assert_eq!(graph.title(), Some("Friday Night"));

        let values = graph.initial_values.as_ref().unwrap();
        assert_eq!(values.resist, Some(80));
        assert_eq!(values.urge, Some(60));
        assert_eq!(values.unlocked_tools, Some(vec!["breathing".to_string()]));

        let entry = graph.scene(DEFAULT_ENTRY_SCENE).unwrap();
        assert_eq!(entry.choices.len(), 2);
        assert_eq!(entry.toolkit, SceneToolkit::All);
        assert_eq!(entry.choices[0].resist_change, -30);
        assert!(graph.scene("scene_003").unwrap().is_win());
    }

    #[test]
    fn unlocked_tools_tolerate_bad_entries() {
        let graph = SceneGraph::from_json_str(
            r#"{
                "initial_values": {"unlocked_tools": ["walk", 4, {"id": "x"}, "breathing"]},
                "scene_001": {"title": "Start"}
            }"#,
        )
        .unwrap();
        let values = graph.initial_values.unwrap();
        assert_eq!(
            values.unlocked_tools,
            Some(vec!["walk".to_string(), "breathing".to_string()])
        );

        let graph = SceneGraph::from_json_str(
            r#"{"initial_values": {"resist": 40, "unlocked_tools": "walk"}, "scene_001": {}}"#,
        )
        .unwrap();
        let values = graph.initial_values.unwrap();
        assert_eq!(values.resist, Some(40));
        assert!(values.unlocked_tools.is_none());
    }

    #[test]
    fn document_without_initial_values() {
        let graph =
            SceneGraph::from_json_str(r#"{"scene_001": {"title": "Start", "choices": []}}"#)
                .unwrap();
        assert!(graph.initial_values.is_none());
        assert!(graph.metadata.is_none());
        assert!(graph.contains_scene("scene_001"));
    }

    #[test]
    fn malformed_document() {
        let err = SceneGraph::from_json_str(r#"{"scene_001": {"choices": 7}}"#).unwrap_err();
        assert!(matches!(err, CoreError::Malformed { .. }));

        let err = SceneGraph::from_json_str("not json").unwrap_err();
        assert!(err.to_string().contains("scene graph"));
    }

    #[test]
    fn builder_round_trip() {
        let graph = SceneGraph::new()
            .with_initial_values(InitialValues {
                resist: Some(50),
                ..InitialValues::default()
            })
            .with_scene(
                "scene_001",
                crate::scene::Scene::new("Start", "").with_choice(Choice::new("On", "scene_002")),
            )
            .with_scene("scene_002", crate::scene::Scene::new("End", "").as_win());

        let json = serde_json::to_string(&graph).unwrap();
        let back = SceneGraph::from_json_str(&json).unwrap();
        assert_eq!(back, graph);
    }
}
