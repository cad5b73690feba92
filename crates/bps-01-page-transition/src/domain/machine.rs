//! Transition table.
//!
//! ```text
//!            Start(d)            BeginExit             Settle
//!   ┌──────┐ ───────▶ ┌──────────┐ ───────▶ ┌─────────┐ ──────▶ ┌──────┐
//!   │ Idle │          │ Entering │          │ Exiting │         │ Idle │
//!   └──────┘          └──────────┘          └─────────┘         └──────┘
//!                     Tick, Midpoint        Tick (ignored), Finish
//!
//!   Cancel / Abort from any phase → Idle
//! ```
//!
//! | From     | Event     | To                                          |
//! |----------|-----------|---------------------------------------------|
//! | Idle     | Start(d)  | Entering, progress 0, direction d           |
//! | Entering | Tick(p)   | Entering, progress = max(progress, min(p, 40)) |
//! | Entering | Midpoint  | Entering, progress 50                       |
//! | Entering | BeginExit | Exiting, progress 70                        |
//! | Exiting  | Tick(_)   | unchanged                                   |
//! | Exiting  | Finish    | Exiting, progress 100                       |
//! | Exiting  | Settle    | Idle                                        |
//! | any      | Cancel    | Idle                                        |
//! | any      | Abort     | Idle                                        |
//!
//! Every other pair is rejected and leaves the state untouched.

use super::state::{
    Direction, Phase, TransitionState, ENTERING_PROGRESS_CAP, EXIT_PROGRESS, FINISHED_PROGRESS,
    MIDPOINT_PROGRESS,
};
use crate::error::TransitionError;

/// Input to the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    Start(Direction),
    /// The entering ticker reached this progress value.
    Tick(u8),
    Midpoint,
    BeginExit,
    Finish,
    Settle,
    Cancel,
    /// Setup failed after the run was admitted.
    Abort,
}

/// Apply `event` to `state`.
pub fn apply(
    state: TransitionState,
    event: TransitionEvent,
) -> Result<TransitionState, TransitionError> {
    use TransitionEvent::*;

    let next = match (state.phase, event) {
        (Phase::Idle, Start(direction)) => TransitionState {
            is_transitioning: true,
            direction,
            phase: Phase::Entering,
            progress: 0,
        },
        (Phase::Entering, Tick(p)) => TransitionState {
            progress: state.progress.max(p.min(ENTERING_PROGRESS_CAP)),
            ..state
        },
        (Phase::Entering, Midpoint) => TransitionState {
            progress: MIDPOINT_PROGRESS,
            ..state
        },
        (Phase::Entering, BeginExit) => TransitionState {
            phase: Phase::Exiting,
            progress: EXIT_PROGRESS,
            ..state
        },
        (Phase::Exiting, Tick(_)) => state,
        (Phase::Exiting, Finish) => TransitionState {
            progress: FINISHED_PROGRESS,
            ..state
        },
        (Phase::Exiting, Settle) | (_, Cancel) | (_, Abort) => TransitionState::IDLE,
        (from, event) => return Err(TransitionError::InvalidTransition { from, event }),
    };

    Ok(next)
}
