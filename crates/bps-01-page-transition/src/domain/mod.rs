//! Domain layer: transition state, the transition table, timing and options.
//!
//! Nothing here touches a clock or a runtime.

pub mod machine;
pub mod options;
pub mod state;
pub mod timing;

pub use machine::{apply, TransitionEvent};
pub use options::TransitionOptions;
pub use state::{
    Direction, Phase, TransitionState, ENTERING_PROGRESS_CAP, EXIT_PROGRESS, FINISHED_PROGRESS,
    MIDPOINT_PROGRESS,
};
pub use timing::TransitionTiming;
