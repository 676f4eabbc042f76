use std::fmt;

use rj_core::{ResourceLink, Scene};

use crate::config::ResourceDisplay;
use crate::toolkit::ToolInstance;

/// Message shown when the player relapses.
pub const LOSS_MESSAGE: &str = "You've Relapsed. Your resistance has fallen to zero. \
    Recovery is a journey with setbacks. Would you like to try again?";

/// Message shown when the player reaches a winning scene.
pub const WIN_MESSAGE: &str = "Recovery Success. You've successfully navigated through this \
    part of your recovery journey. Would you like to play again?";

/// How a journey ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// A winning scene was reached.
    Win,
    /// Resist fell to zero.
    Loss,
    /// The journey content was unusable.
    Error,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Something the presentation layer should reflect.
///
/// Engine operations return these in the order they happened.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A scene became current.
    SceneRendered {
        /// Id of the scene.
        scene_id: String,
        /// The scene itself.
        scene: Scene,
        /// Scenes visited so far, including this one.
        path: Vec<String>,
        /// Tools usable in this scene.
        available_tools: Vec<ToolInstance>,
    },
    /// Resist, use, or time changed.
    StatsChanged {
        /// Resist score.
        resist: i32,
        /// Use score.
        urge: i32,
        /// Hours elapsed.
        time: i64,
    },
    /// A tool was unlocked and should be announced until acknowledged.
    ToolUnlocked {
        /// The new tool.
        tool: ToolInstance,
    },
    /// The selected choice carries a support resource.
    ResourceFeedbackRequested {
        /// The resource.
        link: ResourceLink,
        /// How to show it.
        display: ResourceDisplay,
    },
    /// A tool was used.
    ToolUsed {
        /// The tool.
        tool: ToolInstance,
        /// Resist after the tool's cost.
        resist: i32,
        /// Use after the tool's benefit.
        urge: i32,
    },
    /// The journey ended.
    OutcomeReached {
        /// How it ended.
        kind: OutcomeKind,
        /// Message for the player.
        message: String,
    },
}

impl GameEvent {
    /// Whether this event ends the journey.
    pub fn is_outcome(&self) -> bool {
        matches!(self, Self::OutcomeReached { .. })
    }
}
