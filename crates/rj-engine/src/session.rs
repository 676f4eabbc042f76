//! The game session state machine.
//!
//! A [`GameSession`] starts in [`SessionStatus::SelectingJourney`]. Starting
//! a journey loads its scene graph and moves to `Playing`; confirming
//! choices moves through the graph until the player wins, relapses, or the
//! content turns out to be broken. Restart replays the same journey from a
//! clean state and exit returns to journey selection.
//!
//! Every operation takes the session by `&mut self` and runs to completion,
//! so a journey load can never interleave with choice handling.

use std::sync::Arc;

use rj_core::{ContentProvider, ToolkitCatalog};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::event::{GameEvent, LOSS_MESSAGE, OutcomeKind, WIN_MESSAGE};
use crate::state::SessionState;
use crate::toolkit::{ToolInstance, compute_available, try_unlock, use_tool};

/// Message shown when a journey cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load game data. Please try again.";

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No journey is being played.
    SelectingJourney,
    /// A journey is in progress.
    Playing,
    /// The player reached a winning scene.
    Won,
    /// Resist fell to zero.
    Lost,
    /// The journey's content could not be used.
    Failed,
}

impl SessionStatus {
    /// Whether the journey has ended.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Failed)
    }
}

/// Plays journeys supplied by a [`ContentProvider`].
pub struct GameSession<P> {
    provider: P,
    catalog: Arc<ToolkitCatalog>,
    catalog_error: Option<String>,
    config: EngineConfig,
    status: SessionStatus,
    selected_journey: Option<String>,
    state: Option<SessionState>,
    failure: Option<String>,
}

impl<P: ContentProvider> GameSession<P> {
    /// Create a session, loading the toolkit catalog from `provider`.
    ///
    /// A catalog that cannot be loaded is replaced by an empty one; the
    /// error is kept in [`catalog_error`](Self::catalog_error).
    pub fn new(provider: P, config: EngineConfig) -> Self {
        let (catalog, catalog_error) = match provider.load_catalog() {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                tracing::warn!("toolkit unavailable, continuing without tools: {e}");
                (ToolkitCatalog::new(), Some(e.to_string()))
            }
        };
        let mut session = Self::with_catalog(provider, Arc::new(catalog), config);
        session.catalog_error = catalog_error;
        session
    }

    /// Create a session sharing an already loaded catalog.
    pub fn with_catalog(provider: P, catalog: Arc<ToolkitCatalog>, config: EngineConfig) -> Self {
        Self {
            provider,
            catalog,
            catalog_error: None,
            config,
            status: SessionStatus::SelectingJourney,
            selected_journey: None,
            state: None,
            failure: None,
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// State of the current playthrough, if any.
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The shared toolkit catalog.
    pub fn catalog(&self) -> &Arc<ToolkitCatalog> {
        &self.catalog
    }

    /// Why the catalog could not be loaded, if it could not.
    pub fn catalog_error(&self) -> Option<&str> {
        self.catalog_error.as_deref()
    }

    /// The most recently selected journey.
    pub fn selected_journey(&self) -> Option<&str> {
        self.selected_journey.as_deref()
    }

    /// Why the session failed, when [`status`](Self::status) is `Failed`.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Start `journey_id` from the beginning.
    ///
    /// Content problems do not return an error; the session moves to
    /// `Failed` and the returned events carry the outcome.
    pub fn start(&mut self, journey_id: &str) -> Vec<GameEvent> {
        self.selected_journey = Some(journey_id.to_string());
        self.state = None;
        self.failure = None;

        let graph = match self.provider.load_journey(journey_id) {
            Ok(graph) => Arc::new(graph),
            Err(e) => return self.fail(EngineError::from(e)),
        };

        let entry = self.config.entry_scene.clone();
        if !graph.contains_scene(&entry) {
            return self.fail(EngineError::EntrySceneMissing(entry));
        }

        tracing::info!(journey = journey_id, scenes = graph.scene_count(), "journey started");
        self.state = Some(SessionState::new(journey_id, graph, &entry));
        self.status = SessionStatus::Playing;

        let mut events = vec![self.stats_event()];
        events.extend(self.render_current());
        events
    }

    /// Select choice `index` of the current scene.
    ///
    /// Stats are untouched until the choice is confirmed.
    pub fn select_choice(&mut self, index: usize) -> EngineResult<Vec<GameEvent>> {
        if self.status != SessionStatus::Playing {
            return Err(EngineError::NotPlaying);
        }
        let display = self.config.resource_display;
        let state = self.state.as_mut().ok_or(EngineError::NotPlaying)?;
        if state.pending.is_some() {
            return Err(EngineError::ChoicePending);
        }

        let choice = state
            .current_scene()
            .and_then(|scene| scene.choices.get(index))
            .cloned()
            .ok_or(EngineError::InvalidChoice(index))?;

        tracing::debug!(
            scene = state.current_scene_id(),
            choice = %choice.label,
            "choice selected"
        );

        let events = choice
            .resource_link
            .clone()
            .map(|link| GameEvent::ResourceFeedbackRequested { link, display })
            .into_iter()
            .collect();
        state.pending = Some(choice);
        Ok(events)
    }

    /// Resolve the pending choice.
    pub fn confirm_pending(&mut self) -> EngineResult<Vec<GameEvent>> {
        let catalog = Arc::clone(&self.catalog);
        let state = self.state.as_mut().ok_or(EngineError::NoPendingChoice)?;
        let choice = state.pending.take().ok_or(EngineError::NoPendingChoice)?;

        if let Some(tool) = try_unlock(&choice, &catalog, &mut state.unlocked) {
            tracing::debug!(tool = %tool.id, "tool unlocked");
            state.newly_unlocked = Some(tool);
        }

        state.stats.resist.apply_delta(choice.resist_change);
        state.stats.urge.apply_delta(choice.use_change);
        state.stats.advance_time(choice.time_advance);

        let from = state.current_scene_id().to_string();
        let destination = state.graph().scene(&choice.next_scene_id).cloned();
        if destination.is_some() {
            state.enter(&choice.next_scene_id);
        }
        let relapsed = state.stats.is_relapsed();

        let mut events = vec![self.stats_event()];

        if relapsed {
            events.push(self.resolve(SessionStatus::Lost, OutcomeKind::Loss, LOSS_MESSAGE));
            return Ok(events);
        }

        match destination {
            None => {
                events.extend(self.fail(EngineError::DanglingSceneReference {
                    from,
                    to: choice.next_scene_id,
                }));
            }
            Some(scene) if scene.is_win() => {
                events.push(self.resolve(SessionStatus::Won, OutcomeKind::Win, WIN_MESSAGE));
            }
            Some(_) => {
                events.extend(self.render_current());
            }
        }

        Ok(events)
    }

    /// Use a tool available in the current scene.
    pub fn use_tool(&mut self, tool_id: &str) -> EngineResult<Vec<GameEvent>> {
        if self.status != SessionStatus::Playing {
            return Err(EngineError::NotPlaying);
        }
        let state = self.state.as_mut().ok_or(EngineError::NotPlaying)?;

        let tool = state
            .available
            .iter()
            .find(|t| t.id == tool_id)
            .cloned()
            .ok_or_else(|| EngineError::ToolUnavailable(tool_id.to_string()))?;

        let deltas = use_tool(&tool, state.stats.resist.value())?;
        let resist = state.stats.resist.apply_delta(deltas.resist_delta);
        let urge = state.stats.urge.apply_delta(deltas.use_delta);
        tracing::debug!(tool = %tool.id, "tool used");

        Ok(vec![
            self.stats_event(),
            GameEvent::ToolUsed { tool, resist, urge },
        ])
    }

    /// Acknowledge the unlock notification, returning the tool it was for.
    pub fn acknowledge_unlock(&mut self) -> Option<ToolInstance> {
        self.state.as_mut().and_then(|s| s.newly_unlocked.take())
    }

    /// Start the selected journey again from a clean state.
    pub fn restart(&mut self) -> EngineResult<Vec<GameEvent>> {
        let journey = self
            .selected_journey
            .clone()
            .ok_or(EngineError::NoJourneySelected)?;
        Ok(self.start(&journey))
    }

    /// Abandon the current journey and return to journey selection.
    pub fn exit(&mut self) {
        tracing::debug!("returning to journey selection");
        self.state = None;
        self.failure = None;
        self.status = SessionStatus::SelectingJourney;
    }

    fn fail(&mut self, error: EngineError) -> Vec<GameEvent> {
        tracing::warn!("journey failed: {error}");
        let message = match &error {
            EngineError::ContentUnavailable(_) => LOAD_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        };
        self.failure = Some(error.to_string());
        vec![self.resolve(SessionStatus::Failed, OutcomeKind::Error, &message)]
    }

    fn resolve(&mut self, status: SessionStatus, kind: OutcomeKind, message: &str) -> GameEvent {
        tracing::debug!(outcome = %kind, ?status, "journey resolved");
        self.status = status;
        GameEvent::OutcomeReached {
            kind,
            message: message.to_string(),
        }
    }

    fn stats_event(&self) -> GameEvent {
        let stats = self.state.as_ref().map(|s| s.stats().clone()).unwrap_or_default();
        GameEvent::StatsChanged {
            resist: stats.resist.value(),
            urge: stats.urge.value(),
            time: stats.time(),
        }
    }

    /// Recompute available tools for the current scene and describe it.
    fn render_current(&mut self) -> Vec<GameEvent> {
        let catalog = Arc::clone(&self.catalog);
        let Some(state) = self.state.as_mut() else {
            return Vec::new();
        };
        let Some(scene) = state.current_scene().cloned() else {
            return Vec::new();
        };

        state.available = compute_available(&scene, &catalog, &state.unlocked);

        let mut events = vec![GameEvent::SceneRendered {
            scene_id: state.current_scene_id().to_string(),
            scene,
            path: state.path().to_vec(),
            available_tools: state.available.clone(),
        }];
        if let Some(tool) = &state.newly_unlocked {
            events.push(GameEvent::ToolUnlocked { tool: tool.clone() });
        }
        events
    }
}
