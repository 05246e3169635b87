//! Core value types shared by the configuration and the engine.
//!
//! - String identifiers for states and events
//! - Linear history with an undo buffer

mod history;
mod state;

pub use history::History;
pub use state::{EventId, StateId};
