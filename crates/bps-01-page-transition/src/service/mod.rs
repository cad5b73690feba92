//! Service layer: the engine, its task group, and the navigation wrapper.

pub mod engine;
pub mod navigation;
pub mod scheduler;

pub use engine::{RunId, TransitionCompletion, TransitionEngine};
pub use navigation::{NavigationEffect, NavigationOutcome, NavigationStart, PageNavigator};
pub use scheduler::ScheduledTasks;
