//! Toolkit unlock tracking.
//!
//! Choices can unlock tools from the master catalog. A scene decides which
//! of the unlocked tools are usable while the player is in it, and using a
//! tool trades resist for a lower urge.

use rj_core::{Choice, Scene, SceneToolkit, ToolDefinition, ToolkitCatalog};

use crate::error::{EngineError, EngineResult};

/// Tools unlocked during a playthrough, in unlock order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnlockedTools {
    ids: Vec<String>,
}

impl UnlockedTools {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from ids, keeping the first occurrence of each.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for id in ids {
            set.insert(id);
        }
        set
    }

    /// Add a tool. Returns false if it was already unlocked.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Whether a tool is unlocked.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|u| u == id)
    }

    /// Iterate in unlock order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of unlocked tools.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is unlocked.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// A usable tool, materialized from its catalog definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInstance {
    /// Catalog id.
    pub id: String,
    /// Display name.
    pub title: String,
    /// What the tool does.
    pub description: String,
    /// Resist spent on use.
    pub resist_cost: i32,
    /// Urge removed on use.
    pub use_benefit: i32,
}

impl ToolInstance {
    /// Build an instance from a catalog definition.
    pub fn from_definition(id: impl Into<String>, def: &ToolDefinition) -> Self {
        Self {
            id: id.into(),
            title: def.title.clone(),
            description: def.description.clone(),
            resist_cost: def.default_resist_cost,
            use_benefit: def.default_use_benefit,
        }
    }
}

/// Stat changes produced by using a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolUse {
    /// Change to resist.
    pub resist_delta: i32,
    /// Change to the use score.
    pub use_delta: i32,
}

/// Tools usable in `scene`.
///
/// An explicit list keeps its own order; `All` follows unlock order. Ids
/// that are not in the catalog or not yet unlocked are skipped.
pub fn compute_available(
    scene: &Scene,
    catalog: &ToolkitCatalog,
    unlocked: &UnlockedTools,
) -> Vec<ToolInstance> {
    let instantiate = |id: &str| {
        catalog
            .get(id)
            .map(|def| ToolInstance::from_definition(id, def))
    };

    match &scene.toolkit {
        SceneToolkit::None => Vec::new(),
        SceneToolkit::All => unlocked.iter().filter_map(instantiate).collect(),
        SceneToolkit::Only(ids) => ids
            .iter()
            .map(String::as_str)
            .filter(|id| unlocked.contains(id))
            .filter_map(instantiate)
            .collect(),
    }
}

/// Unlock the tool named by `choice`, if any.
///
/// Returns the tool when it was newly unlocked. Unknown and already
/// unlocked ids are ignored.
pub fn try_unlock(
    choice: &Choice,
    catalog: &ToolkitCatalog,
    unlocked: &mut UnlockedTools,
) -> Option<ToolInstance> {
    let id = choice.unlock_tool.as_deref()?;
    let def = catalog.get(id)?;
    if !unlocked.insert(id) {
        return None;
    }
    Some(ToolInstance::from_definition(id, def))
}

/// Check whether `tool` can be used with the current resist.
///
/// Resist must be strictly greater than the cost.
pub fn use_tool(tool: &ToolInstance, resist: i32) -> EngineResult<ToolUse> {
    if resist <= tool.resist_cost {
        return Err(EngineError::InsufficientResistance {
            tool: tool.title.clone(),
            resist,
            cost: tool.resist_cost,
        });
    }
    Ok(ToolUse {
        resist_delta: -tool.resist_cost,
        use_delta: -tool.use_benefit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ToolkitCatalog {
        ToolkitCatalog::new()
            .with_tool("breathing", ToolDefinition::new("Box Breathing", 5, 15))
            .with_tool("walk", ToolDefinition::new("Take a Walk", 10, 20))
            .with_tool("call", ToolDefinition::new("Call Your Sponsor", 20, 40))
    }

    fn scene(toolkit: SceneToolkit) -> Scene {
        Scene::new("Scene", "").with_toolkit(toolkit)
    }

    fn ids(tools: &[ToolInstance]) -> Vec<&str> {
        tools.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn unlocked_set_keeps_order_without_duplicates() {
        let mut set = UnlockedTools::from_ids(["walk", "breathing", "walk"]);
        assert_eq!(set.len(), 2);
        assert!(!set.insert("breathing"));
        assert!(set.insert("call"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["walk", "breathing", "call"]);
    }

    #[test]
    fn no_toolkit_means_no_tools() {
        let unlocked = UnlockedTools::from_ids(["walk"]);
        assert!(compute_available(&scene(SceneToolkit::None), &catalog(), &unlocked).is_empty());
    }

    #[test]
    fn all_follows_unlock_order() {
        let unlocked = UnlockedTools::from_ids(["walk", "ghost", "breathing"]);
        let tools = compute_available(&scene(SceneToolkit::All), &catalog(), &unlocked);
        assert_eq!(ids(&tools), vec!["walk", "breathing"]);
        assert_eq!(tools[0].resist_cost, 10);
        assert_eq!(tools[0].use_benefit, 20);
    }

    #[test]
    fn only_list_is_gated_by_unlock() {
        let unlocked = UnlockedTools::from_ids(["breathing", "walk", "call"]);
        let toolkit = SceneToolkit::Only(vec!["call".into(), "ghost".into(), "breathing".into()]);
        let tools = compute_available(&scene(toolkit), &catalog(), &unlocked);
        assert_eq!(ids(&tools), vec!["call", "breathing"]);

        let unlocked = UnlockedTools::from_ids(["breathing"]);
        let toolkit = SceneToolkit::Only(vec!["call".into(), "breathing".into()]);
        let tools = compute_available(&scene(toolkit), &catalog(), &unlocked);
        assert_eq!(ids(&tools), vec!["breathing"]);
    }

    #[test]
    fn unlock_once() {
        let mut unlocked = UnlockedTools::new();
        let choice = Choice::new("Breathe", "scene_002").with_unlock("breathing");

        let tool = try_unlock(&choice, &catalog(), &mut unlocked).unwrap();
        assert_eq!(tool.title, "Box Breathing");
        assert!(try_unlock(&choice, &catalog(), &mut unlocked).is_none());
        assert_eq!(unlocked.iter().filter(|id| *id == "breathing").count(), 1);
    }

    #[test]
    fn unlock_ignores_unknown_and_absent() {
        let mut unlocked = UnlockedTools::new();
        let unknown = Choice::new("Pray", "scene_002").with_unlock("ghost");
        assert!(try_unlock(&unknown, &catalog(), &mut unlocked).is_none());

        let plain = Choice::new("Wait", "scene_002");
        assert!(try_unlock(&plain, &catalog(), &mut unlocked).is_none());
        assert!(unlocked.is_empty());
    }

    #[test]
    fn use_requires_more_resist_than_cost() {
        let tool = ToolInstance::from_definition("walk", catalog().get("walk").unwrap());

        assert!(matches!(
            use_tool(&tool, 10),
            Err(EngineError::InsufficientResistance { resist: 10, cost: 10, .. })
        ));
        assert!(use_tool(&tool, 3).is_err());

        let deltas = use_tool(&tool, 11).unwrap();
        assert_eq!(deltas.resist_delta, -10);
        assert_eq!(deltas.use_delta, -20);
    }
}
