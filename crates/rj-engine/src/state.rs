//! Per-playthrough session state.

use std::sync::Arc;

use rj_core::{Choice, Scene, SceneGraph};

use crate::stats::Stats;
use crate::toolkit::{ToolInstance, UnlockedTools};

/// Everything that changes while a journey is played.
///
/// Created fresh when a journey starts or restarts and discarded on exit.
#[derive(Debug, Clone)]
pub struct SessionState {
    journey_id: String,
    graph: Arc<SceneGraph>,
    current_scene_id: String,
    pub(crate) stats: Stats,
    path: Vec<String>,
    pub(crate) unlocked: UnlockedTools,
    pub(crate) available: Vec<ToolInstance>,
    pub(crate) pending: Option<Choice>,
    pub(crate) newly_unlocked: Option<ToolInstance>,
}

impl SessionState {
    /// Create a state positioned at `entry_scene`, applying the journey's
    /// initial values.
    pub(crate) fn new(journey_id: &str, graph: Arc<SceneGraph>, entry_scene: &str) -> Self {
        let initial = graph.initial_values.as_ref();
        let stats = Stats::from_initial(initial);
        let unlocked = initial
            .and_then(|v| v.unlocked_tools.as_ref())
            .map(UnlockedTools::from_ids)
            .unwrap_or_default();

        Self {
            journey_id: journey_id.to_string(),
            graph,
            current_scene_id: entry_scene.to_string(),
            stats,
            path: vec![entry_scene.to_string()],
            unlocked,
            available: Vec::new(),
            pending: None,
            newly_unlocked: None,
        }
    }

    /// The journey being played.
    pub fn journey_id(&self) -> &str {
        &self.journey_id
    }

    /// The journey's scene graph.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// Id of the current scene.
    pub fn current_scene_id(&self) -> &str {
        &self.current_scene_id
    }

    /// The current scene, if it exists in the graph.
    pub fn current_scene(&self) -> Option<&Scene> {
        self.graph.scene(&self.current_scene_id)
    }

    /// Current stats.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Scenes visited, in order.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Tools unlocked this playthrough.
    pub fn unlocked_tools(&self) -> &UnlockedTools {
        &self.unlocked
    }

    /// Tools usable in the current scene.
    pub fn available_tools(&self) -> &[ToolInstance] {
        &self.available
    }

    /// The selected choice awaiting confirmation.
    pub fn pending_choice(&self) -> Option<&Choice> {
        self.pending.as_ref()
    }

    /// A tool unlocked but not yet acknowledged.
    pub fn newly_unlocked_tool(&self) -> Option<&ToolInstance> {
        self.newly_unlocked.as_ref()
    }

    /// Move to `scene_id` and record it in the path.
    pub(crate) fn enter(&mut self, scene_id: &str) {
        self.current_scene_id = scene_id.to_string();
        self.path.push(scene_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rj_core::InitialValues;

    #[test]
    fn new_state_applies_initial_values() {
        let graph = SceneGraph::new()
            .with_initial_values(InitialValues {
                resist: Some(60),
                urge: Some(30),
                unlocked_tools: Some(vec!["walk".into(), "walk".into(), "breathing".into()]),
            })
            .with_scene("scene_001", Scene::new("Start", ""));

        let state = SessionState::new("journey1", Arc::new(graph), "scene_001");

        assert_eq!(state.journey_id(), "journey1");
        assert_eq!(state.stats().resist.value(), 60);
        assert_eq!(state.stats().urge.value(), 30);
        assert_eq!(state.stats().time(), 0);
        assert_eq!(state.path(), ["scene_001"]);
        assert_eq!(
            state.unlocked_tools().iter().collect::<Vec<_>>(),
            vec!["walk", "breathing"]
        );
        assert!(state.pending_choice().is_none());
        assert!(state.newly_unlocked_tool().is_none());
        assert_eq!(state.current_scene().unwrap().title, "Start");
    }

    #[test]
    fn enter_appends_to_path() {
        let graph = SceneGraph::new()
            .with_scene("scene_001", Scene::new("Start", ""))
            .with_scene("scene_002", Scene::new("Next", ""));
        let mut state = SessionState::new("j", Arc::new(graph), "scene_001");

        state.enter("scene_002");
        assert_eq!(state.current_scene_id(), "scene_002");
        assert_eq!(state.path(), ["scene_001", "scene_002"]);
    }
}
