//! Error types for the session engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while playing a journey.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Journey or catalog content could not be obtained.
    #[error("content unavailable: {0}")]
    ContentUnavailable(#[from] rj_core::CoreError),

    /// The journey has no scene to start in.
    #[error("entry scene not found: {0}")]
    EntrySceneMissing(String),

    /// A choice leads to a scene the journey does not define.
    #[error("scene \"{from}\" leads to missing scene \"{to}\"")]
    DanglingSceneReference {
        /// Scene the choice was made in.
        from: String,
        /// The missing destination.
        to: String,
    },

    /// The player cannot afford the tool.
    #[error("not enough resistance to use {tool} (resist {resist}, cost {cost})")]
    InsufficientResistance {
        /// Tool title.
        tool: String,
        /// Current resist score.
        resist: i32,
        /// Resist the tool costs.
        cost: i32,
    },

    /// The operation needs a journey in progress.
    #[error("no journey in progress")]
    NotPlaying,

    /// A choice was already selected and awaits confirmation.
    #[error("a choice is already awaiting confirmation")]
    ChoicePending,

    /// There is no selected choice to confirm.
    #[error("no choice awaiting confirmation")]
    NoPendingChoice,

    /// Choice index out of range for the current scene.
    #[error("invalid choice: {0}")]
    InvalidChoice(usize),

    /// Tool is not usable in the current scene.
    #[error("tool not available here: {0}")]
    ToolUnavailable(String),

    /// Restart requested before any journey was selected.
    #[error("no journey selected")]
    NoJourneySelected,
}
