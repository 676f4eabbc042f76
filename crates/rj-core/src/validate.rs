//! Static validation of scene graph documents.
//!
//! The engine tolerates unknown tool ids at play time and only notices a
//! dangling scene reference when a player walks into it. This pass finds
//! both ahead of time, along with scenes that can never be reached.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use crate::scene::SceneToolkit;
use crate::scene_graph::SceneGraph;
use crate::toolkit::ToolkitCatalog;

/// Severity level for content issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The journey cannot be played correctly.
    Error,
    /// The journey plays, but probably not as intended.
    Warning,
}

/// A problem found in a scene graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIssue {
    /// How serious the issue is.
    pub severity: Severity,
    /// The scene the issue was found in, if scene-specific.
    pub scene_id: Option<String>,
    /// A human-readable description.
    pub message: String,
}

impl ContentIssue {
    fn error(scene_id: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            scene_id: scene_id.map(str::to_string),
            message: message.into(),
        }
    }

    fn warning(scene_id: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            scene_id: scene_id.map(str::to_string),
            message: message.into(),
        }
    }

    /// Whether this issue is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match &self.scene_id {
            Some(id) => write!(f, "{prefix}: {id}: {}", self.message),
            None => write!(f, "{prefix}: {}", self.message),
        }
    }
}

/// Validate a scene graph against the catalog, starting from `entry_scene`.
///
/// Issues are reported in scene id order.
pub fn validate_scene_graph(
    graph: &SceneGraph,
    catalog: &ToolkitCatalog,
    entry_scene: &str,
) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    if !graph.contains_scene(entry_scene) {
        issues.push(ContentIssue::error(
            None,
            format!("entry scene \"{entry_scene}\" does not exist"),
        ));
    }

    if let Some(values) = &graph.initial_values {
        let overrides = [("resist", values.resist), ("use", values.urge)];
        for (name, v) in overrides.into_iter().filter_map(|(n, v)| v.map(|v| (n, v))) {
            if !(0..=100).contains(&v) {
                issues.push(ContentIssue::warning(
                    None,
                    format!("initial {name} {v} is outside 0-100 and will be clamped"),
                ));
            }
        }
        for id in values.unlocked_tools.iter().flatten() {
            if !catalog.contains(id) {
                issues.push(ContentIssue::warning(
                    None,
                    format!("initially unlocked tool \"{id}\" is not in the catalog"),
                ));
            }
        }
    }

    for (scene_id, scene) in &graph.scenes {
        for choice in &scene.choices {
            if !graph.contains_scene(&choice.next_scene_id) {
                issues.push(ContentIssue::error(
                    Some(scene_id),
                    format!(
                        "choice \"{}\" leads to missing scene \"{}\"",
                        choice.label, choice.next_scene_id
                    ),
                ));
            }
            let unknown_unlock = choice
                .unlock_tool
                .as_deref()
                .filter(|tool| !catalog.contains(tool));
            if let Some(tool) = unknown_unlock {
                issues.push(ContentIssue::warning(
                    Some(scene_id),
                    format!(
                        "choice \"{}\" unlocks unknown tool \"{tool}\"",
                        choice.label
                    ),
                ));
            }
        }

        if let SceneToolkit::Only(ids) = &scene.toolkit {
            for id in ids.iter().filter(|id| !catalog.contains(id)) {
                issues.push(ContentIssue::warning(
                    Some(scene_id),
                    format!("toolkit lists unknown tool \"{id}\""),
                ));
            }
        }
    }

    if graph.contains_scene(entry_scene) {
        let reachable = reachable_from(graph, entry_scene);

        for scene_id in graph.scenes.keys() {
            if !reachable.contains(scene_id.as_str()) {
                issues.push(ContentIssue::warning(
                    Some(scene_id),
                    "scene is unreachable from the entry scene",
                ));
            }
        }

        let can_win = reachable
            .iter()
            .filter_map(|id| graph.scene(id))
            .any(|scene| scene.is_win());
        if !can_win {
            issues.push(ContentIssue::warning(
                None,
                "no winning scene is reachable from the entry scene",
            ));
        }
    }

    issues
}

fn reachable_from<'a>(graph: &'a SceneGraph, entry_scene: &'a str) -> BTreeSet<&'a str> {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::from([entry_scene]);

    while let Some(id) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        if let Some(scene) = graph.scene(id) {
            for choice in &scene.choices {
                if graph.contains_scene(&choice.next_scene_id) {
                    queue.push_back(choice.next_scene_id.as_str());
                }
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Choice, Scene};
    use crate::scene_graph::InitialValues;
    use crate::toolkit::ToolDefinition;

    fn catalog() -> ToolkitCatalog {
        ToolkitCatalog::new().with_tool("breathing", ToolDefinition::new("Box Breathing", 5, 15))
    }

    #[test]
    fn clean_journey_has_no_issues() {
        let graph = SceneGraph::new()
            .with_scene(
                "scene_001",
                Scene::new("Start", "")
                    .with_choice(Choice::new("On", "scene_002").with_unlock("breathing"))
                    .with_toolkit(SceneToolkit::Only(vec!["breathing".into()])),
            )
            .with_scene("scene_002", Scene::new("End", "").as_win());

        assert!(validate_scene_graph(&graph, &catalog(), "scene_001").is_empty());
    }

    #[test]
    fn missing_entry_scene() {
        let graph = SceneGraph::new().with_scene("intro", Scene::new("Start", "").as_win());
        let issues = validate_scene_graph(&graph, &catalog(), "scene_001");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(issues[0].message.contains("scene_001"));
    }

    #[test]
    fn dangling_reference_is_error() {
        let graph = SceneGraph::new().with_scene(
            "scene_001",
            Scene::new("Start", "")
                .as_win()
                .with_choice(Choice::new("Leave", "scene_404")),
        );
        let issues = validate_scene_graph(&graph, &catalog(), "scene_001");

        let errors: Vec<_> = issues.iter().filter(|i| i.is_error()).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].scene_id.as_deref(), Some("scene_001"));
        assert!(errors[0].message.contains("scene_404"));
    }

    #[test]
    fn unknown_tools_are_warnings() {
        let graph = SceneGraph::new()
            .with_initial_values(InitialValues {
                unlocked_tools: Some(vec!["ghost".into()]),
                ..InitialValues::default()
            })
            .with_scene(
                "scene_001",
                Scene::new("Start", "")
                    .with_choice(Choice::new("On", "scene_002").with_unlock("phantom"))
                    .with_toolkit(SceneToolkit::Only(vec!["spectre".into()])),
            )
            .with_scene("scene_002", Scene::new("End", "").as_win());

        let issues = validate_scene_graph(&graph, &catalog(), "scene_001");
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    }

    #[test]
    fn unreachable_and_unwinnable() {
        let graph = SceneGraph::new()
            .with_scene("scene_001", Scene::new("Start", ""))
            .with_scene("scene_009", Scene::new("Island", "").as_win());

        let issues = validate_scene_graph(&graph, &catalog(), "scene_001");
        let messages: Vec<_> = issues.iter().map(|i| i.to_string()).collect();
        assert!(messages.iter().any(|m| {
            m == "warning: scene_009: scene is unreachable from the entry scene"
        }));
        assert!(messages.iter().any(|m| {
            m == "warning: no winning scene is reachable from the entry scene"
        }));
    }

    #[test]
    fn out_of_range_initial_values() {
        let graph = SceneGraph::new()
            .with_initial_values(InitialValues {
                resist: Some(150),
                urge: Some(-5),
                unlocked_tools: None,
            })
            .with_scene("scene_001", Scene::new("Start", "").as_win());

        let issues = validate_scene_graph(&graph, &catalog(), "scene_001");
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("resist 150"));
        assert!(issues[1].message.contains("use -5"));
    }
}
