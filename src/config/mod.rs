//! Typed machine configuration.
//!
//! A configuration names the initial state and defines every state with its
//! event-to-state transition table:
//!
//! ```json
//! {
//!   "initial": "idle",
//!   "states": {
//!     "idle":    { "transitions": { "start": "running" } },
//!     "running": { "transitions": { "stop": "idle" }, "label": "Busy" }
//!   }
//! }
//! ```
//!
//! Fields other than `transitions` are preserved on the
//! [`StateDefinition`] but ignored by the engine. Unrecognized top-level
//! options are ignored.
//!
//! Configurations can be loaded from JSON, assembled with
//! [`MachineConfigBuilder`], or written with the [`machine_config!`](crate::machine_config)
//! macro. Loading never checks that transitions point at defined states; call
//! [`MachineConfig::validate`] for that.

pub mod builder;
pub mod error;
pub mod macros;
pub mod states;

pub use builder::{MachineConfigBuilder, TransitionsBuilder};
pub use error::{BuildError, ConfigError, ConfigIssue};
pub use states::{StateDefinition, StatesConfig, TransitionTable};

use crate::core::StateId;
use serde::{Deserialize, Serialize};
use std::io::Read;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Initial state plus the closed set of state definitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub initial: StateId,
    pub states: StatesConfig,
}

impl MachineConfig {
    pub fn new(initial: impl Into<StateId>, states: StatesConfig) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    pub fn builder() -> MachineConfigBuilder {
        MachineConfigBuilder::new()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the initial state and every transition target are defined.
    ///
    /// Every problem is reported, not only the first.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = Vec::new();

        checks.push(if self.states.contains(self.initial.as_str()) {
            Validation::success(())
        } else {
            Validation::fail(ConfigIssue::UndefinedInitial {
                state: self.initial.clone(),
            })
        });

        for (state, definition) in self.states.iter() {
            for (event, target) in &definition.transitions {
                if !self.states.contains(target.as_str()) {
                    checks.push(Validation::fail(ConfigIssue::UndefinedTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a `Result`, for use with `?`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(issues) => {
                Err(ConfigError::Invalid(issues.iter().cloned().collect()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: &str = r#"{
        "initial": "idle",
        "states": {
            "idle": { "transitions": { "start": "running" } },
            "running": { "transitions": { "stop": "idle", "pause": "paused" } },
            "paused": { "transitions": { "resume": "running" }, "icon": "pause.svg" }
        },
        "unused_option": true
    }"#;

    #[test]
    fn loads_from_json_and_ignores_unknown_options() {
        let config = MachineConfig::from_json_str(PLAYER).unwrap();

        assert_eq!(config.initial, "idle");
        assert_eq!(config.states.len(), 3);
        assert_eq!(
            config.states.get("paused").unwrap().extra["icon"],
            "pause.svg"
        );
    }

    #[test]
    fn missing_initial_is_a_parse_error() {
        let result = MachineConfig::from_json_str(r#"{ "states": {} }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn loads_from_value_and_reader() {
        let value: serde_json::Value = serde_json::from_str(PLAYER).unwrap();
        let from_value = MachineConfig::from_json_value(value).unwrap();
        let from_reader = MachineConfig::from_reader(PLAYER.as_bytes()).unwrap();

        assert_eq!(from_value, from_reader);
    }

    #[test]
    fn from_value_keeps_definition_order() {
        let value = serde_json::json!({
            "initial": "zeta",
            "states": { "zeta": {}, "alpha": {}, "mid": {} }
        });

        let config = MachineConfig::from_json_value(value).unwrap();
        let ids: Vec<&str> = config.states.ids().map(StateId::as_str).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = MachineConfig::from_json_str(PLAYER).unwrap();
        let json = config.to_json_string().unwrap();

        assert_eq!(MachineConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn valid_config_passes_validation() {
        let config = MachineConfig::from_json_str(PLAYER).unwrap();

        assert!(matches!(config.validate(), Validation::Success(())));
        assert!(config.validated().is_ok());
    }

    #[test]
    fn validation_accumulates_all_issues() {
        let config = MachineConfig::builder()
            .initial("ghost")
            .state("idle", |t| t.on("start", "running").on("jump", "nowhere"))
            .state("running", |t| t.on("stop", "idle"))
            .build()
            .unwrap();

        match config.validate() {
            Validation::Failure(issues) => {
                assert_eq!(issues.len(), 2);
                assert!(issues
                    .iter()
                    .any(|i| matches!(i, ConfigIssue::UndefinedInitial { .. })));
                assert!(issues.iter().any(|i| matches!(
                    i,
                    ConfigIssue::UndefinedTarget { target, .. } if target == "nowhere"
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validated_reports_invalid_config() {
        let config = MachineConfig::builder()
            .initial("idle")
            .state("idle", |t| t.on("start", "running"))
            .build()
            .unwrap();

        match config.validated() {
            Err(ConfigError::Invalid(issues)) => assert_eq!(issues.len(), 1),
            other => panic!("Expected invalid config, got {other:?}"),
        }
    }
}
