//! Rewind: a data-driven finite state machine with undo/redo
//!
//! States and transitions come entirely from a [`MachineConfig`]. The engine
//! tracks one active state, moves between states on events and keeps a
//! linear history that can be stepped back and forth.
//!
//! # Core Concepts
//!
//! - **Configuration**: initial state plus per-state event-to-state tables
//! - **Engine**: [`Fsm`] applies transitions and owns the history
//! - **History**: visited states, seeded with the initial state, with an
//!   undo buffer for redo
//!
//! The engine is single-threaded and synchronous. Wrap an instance in a
//! mutex if it must be shared across threads.
//!
//! # Example
//!
//! ```rust
//! use rewind::{Fsm, FsmError, MachineConfig};
//!
//! let config = MachineConfig::from_json_str(r#"{
//!     "initial": "idle",
//!     "states": {
//!         "idle":    { "transitions": { "start": "running" } },
//!         "running": { "transitions": { "stop": "idle", "pause": "paused" } },
//!         "paused":  { "transitions": { "resume": "running" } }
//!     }
//! }"#).unwrap();
//!
//! let mut fsm = Fsm::new(config);
//! fsm.trigger("start").unwrap();
//! fsm.trigger("pause").unwrap();
//! assert_eq!(fsm.state(), "paused");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "running");
//!
//! let err = fsm.trigger("badevent").unwrap_err();
//! assert!(matches!(err, FsmError::NoTransition { .. }));
//! assert_eq!(fsm.state(), "running");
//! ```

pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use config::{ConfigError, MachineConfig, MachineConfigBuilder, StateDefinition, StatesConfig};
pub use crate::core::{EventId, History, StateId};
pub use machine::{Fsm, FsmError, FsmResult};
