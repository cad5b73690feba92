//! Error types for the transition engine

use thiserror::Error;

use crate::domain::{Phase, TransitionEvent};

/// Failures of an effect or a viewport lock during setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    #[error("Viewport lock unavailable: {0}")]
    Viewport(String),

    #[error("Prefetch of {target} failed: {reason}")]
    Prefetch { target: String, reason: String },

    #[error("Effect failed: {0}")]
    Other(String),
}

/// Errors surfaced by a transition run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Navigation already in progress")]
    InProgress,

    #[error("Transition setup failed: {0}")]
    Setup(#[from] EffectError),

    #[error("No Tokio runtime available to schedule the transition")]
    NoRuntime,

    #[error("Transition cancelled")]
    Cancelled,

    #[error("Invalid transition: {event:?} while {from}")]
    InvalidTransition { from: Phase, event: TransitionEvent },
}
