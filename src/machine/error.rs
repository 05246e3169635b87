//! Errors raised by the engine.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors that can occur when changing state.
///
/// The machine is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("Unknown state '{state}'")]
    UnknownState { state: StateId },

    #[error("No transition for event '{event}' in state '{state}'")]
    NoTransition { state: StateId, event: EventId },
}

pub type FsmResult<T> = Result<T, FsmError>;
