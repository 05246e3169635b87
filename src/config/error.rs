//! Configuration errors.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors raised while assembling a configuration with the builder.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State '{0}' is defined more than once")]
    DuplicateState(StateId),
}

/// A single problem found by [`MachineConfig::validate`](super::MachineConfig::validate).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigIssue {
    #[error("initial state '{state}' is not defined")]
    UndefinedInitial { state: StateId },

    #[error("event '{event}' in state '{state}' targets undefined state '{target}'")]
    UndefinedTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },
}

/// Errors raised while loading or checking a machine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", join_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lists_every_issue() {
        let err = ConfigError::Invalid(vec![
            ConfigIssue::UndefinedInitial {
                state: "ghost".into(),
            },
            ConfigIssue::UndefinedTarget {
                state: "idle".into(),
                event: "go".into(),
                target: "nowhere".into(),
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Invalid configuration: initial state 'ghost' is not defined; \
             event 'go' in state 'idle' targets undefined state 'nowhere'"
        );
    }

    #[test]
    fn duplicate_state_names_the_state() {
        let err = BuildError::DuplicateState("idle".into());
        assert_eq!(err.to_string(), "State 'idle' is defined more than once");
    }
}
