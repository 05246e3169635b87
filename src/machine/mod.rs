//! The state machine engine.
//!
//! [`Fsm`] interprets a [`MachineConfig`]: it tracks the active state,
//! fires transitions on events and keeps a linear undo/redo history of
//! every state change.

mod error;

pub use error::{FsmError, FsmResult};

use crate::config::{MachineConfig, StatesConfig};
use crate::core::{EventId, History, StateId};
use tracing::{debug, warn};

/// Data-driven finite state machine with undo/redo.
///
/// # Example
///
/// ```rust
/// use rewind::{machine_config, Fsm};
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle" },
///     }
/// }
/// .unwrap();
///
/// let mut fsm = Fsm::new(config);
/// fsm.trigger("start").unwrap();
/// assert_eq!(fsm.state(), "running");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "idle");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: MachineConfig,
    active: StateId,
    history: History,
}

impl Fsm {
    /// Create a machine in its initial state.
    ///
    /// The configuration is not validated; an undefined initial state is
    /// accepted as is.
    pub fn new(config: MachineConfig) -> Self {
        let active = config.initial.clone();
        let history = History::new(config.initial.clone());
        Self {
            config,
            active,
            history,
        }
    }

    /// Create a machine from a state table and an initial state.
    pub fn from_parts(states: StatesConfig, initial: impl Into<StateId>) -> Self {
        Self::new(MachineConfig::new(initial, states))
    }

    /// The active state.
    pub fn state(&self) -> &StateId {
        &self.active
    }

    /// The initial state, fixed at construction.
    pub fn initial(&self) -> &StateId {
        &self.config.initial
    }

    /// Get the configuration this machine interprets (pure)
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Check if `state` is defined in the configuration (pure)
    pub fn is_defined(&self, state: &str) -> bool {
        self.config.states.contains(state)
    }

    /// Move to `target`, recording it in the history and discarding the
    /// redo path.
    pub fn change_state(&mut self, target: impl Into<StateId>) -> FsmResult<()> {
        let target = target.into();
        if !self.is_defined(target.as_str()) {
            warn!(from = %self.active, to = %target, "rejected change to unknown state");
            return Err(FsmError::UnknownState { state: target });
        }

        debug!(from = %self.active, to = %target, "state changed");
        self.active = target.clone();
        self.history.record(target);
        Ok(())
    }

    /// Fire `event` from the active state.
    ///
    /// Fails with [`FsmError::NoTransition`] when the active state has no
    /// entry for `event`, and with [`FsmError::UnknownState`] when the entry
    /// (or the active state itself) is not a defined state.
    pub fn trigger(&mut self, event: impl Into<EventId>) -> FsmResult<()> {
        let event = event.into();
        let definition = self
            .config
            .states
            .get(self.active.as_str())
            .ok_or_else(|| FsmError::UnknownState {
                state: self.active.clone(),
            })?;

        let Some(target) = definition.target(event.as_str()).cloned() else {
            warn!(state = %self.active, event = %event, "no transition for event");
            return Err(FsmError::NoTransition {
                state: self.active.clone(),
                event,
            });
        };

        debug!(state = %self.active, event = %event, "event triggered");
        self.change_state(target)
    }

    /// Return to the initial state.
    ///
    /// History and the undo buffer are left alone, so afterwards the newest
    /// history entry may differ from the active state and a following
    /// [`undo`](Self::undo) steps back through the pre-reset history.
    pub fn reset(&mut self) {
        debug!(from = %self.active, to = %self.config.initial, "reset");
        self.active = self.config.initial.clone();
    }

    /// All defined states in definition order.
    pub fn states(&self) -> Vec<&StateId> {
        self.config.states.ids().collect()
    }

    /// States whose transition table handles `event`, in definition order.
    pub fn states_with_event(&self, event: &str) -> Vec<&StateId> {
        self.config
            .states
            .iter()
            .filter(|(_, definition)| definition.handles(event))
            .map(|(id, _)| id)
            .collect()
    }

    /// Events the active state has transitions for.
    pub fn events(&self) -> Vec<&EventId> {
        self.config
            .states
            .get(self.active.as_str())
            .map(|definition| definition.transitions.keys().collect())
            .unwrap_or_default()
    }

    /// Step back one history entry. Returns `false` when only the initial
    /// entry is left.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                debug!(from = %self.active, to = %previous, "undo");
                self.active = previous.clone();
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone state. Returns `false` when there
    /// is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(restored) => {
                debug!(from = %self.active, to = %restored, "redo");
                self.active = restored.clone();
                true
            }
            None => false,
        }
    }

    /// Truncate history to the initial state. The active state and undo
    /// buffer are unchanged.
    pub fn clear_history(&mut self) {
        debug!(
            entries = self.history.len(),
            keep = %self.history.first(),
            "history cleared"
        );
        self.history.clear();
    }

    /// Visited states, oldest first; always starts with the initial state.
    pub fn history(&self) -> &[StateId] {
        self.history.entries()
    }

    /// States that [`redo`](Self::redo) can restore, most recent last.
    pub fn undo_buffer(&self) -> &[StateId] {
        self.history.undone()
    }

    /// Check if [`undo`](Self::undo) would succeed (pure)
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if [`redo`](Self::redo) would succeed (pure)
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl From<MachineConfig> for Fsm {
    fn from(config: MachineConfig) -> Self {
        Self::new(config)
    }
}
