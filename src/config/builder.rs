//! Fluent builder for machine configurations.

use super::error::BuildError;
use super::states::{StateDefinition, StatesConfig, TransitionTable};
use super::MachineConfig;
use crate::core::{EventId, StateId};

/// Builder for a single state's transition table.
#[derive(Debug, Default)]
pub struct TransitionsBuilder {
    table: TransitionTable,
}

impl TransitionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `event` to `target`. A later mapping for the same event wins.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.table.insert(event.into(), target.into());
        self
    }

    pub fn build(self) -> TransitionTable {
        self.table
    }
}

/// Builder for constructing machine configurations with a fluent API.
///
/// # Example
///
/// ```rust
/// use rewind::config::MachineConfigBuilder;
///
/// let config = MachineConfigBuilder::new()
///     .initial("idle")
///     .state("idle", |t| t.on("start", "running"))
///     .state("running", |t| t.on("stop", "idle"))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.states.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MachineConfigBuilder {
    initial: Option<StateId>,
    states: Vec<(StateId, StateDefinition)>,
}

impl MachineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state whose transitions are described by `transitions`.
    pub fn state<F>(mut self, id: impl Into<StateId>, transitions: F) -> Self
    where
        F: FnOnce(TransitionsBuilder) -> TransitionsBuilder,
    {
        let table = transitions(TransitionsBuilder::new()).build();
        self.states.push((id.into(), StateDefinition::new(table)));
        self
    }

    /// Add a state with no outgoing transitions.
    pub fn terminal(self, id: impl Into<StateId>) -> Self {
        self.state(id, |t| t)
    }

    /// Add a pre-built definition, including any extra fields it carries.
    pub fn definition(mut self, id: impl Into<StateId>, definition: StateDefinition) -> Self {
        self.states.push((id.into(), definition));
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state is missing or a state repeats.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut states = StatesConfig::new();
        for (id, definition) in self.states {
            states.insert(id, definition)?;
        }

        Ok(MachineConfig { initial, states })
    }
}
