//! Session engine for Recovery Journey.
//!
//! A [`GameSession`] plays one journey at a time: it tracks resist, use and
//! elapsed time, moves through the scene graph as choices are confirmed,
//! unlocks tools from the shared catalog, and decides when the journey is
//! won or lost. Operations return [`GameEvent`]s for the presentation layer
//! to render.

/// Session configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Events emitted to the presentation layer.
pub mod event;
/// The game session state machine.
pub mod session;
/// Per-playthrough state.
pub mod state;
/// Clamped scores and the elapsed-time clock.
pub mod stats;
/// Tool unlocking and usage.
pub mod toolkit;

pub use config::{EngineConfig, ResourceDisplay};
pub use error::{EngineError, EngineResult};
pub use event::{GameEvent, OutcomeKind};
pub use session::{GameSession, SessionStatus};
pub use state::SessionState;
pub use stats::{StatTrack, Stats};
pub use toolkit::{ToolInstance, UnlockedTools};
