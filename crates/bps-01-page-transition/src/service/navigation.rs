//! Navigation Trigger Wrapper
//!
//! Turns `slide_up("/publications")` into a transition run whose midpoint
//! effect changes the current location.
//!
//! ## Guards
//!
//! | Target                    | Result      |
//! |---------------------------|-------------|
//! | empty                     | `Skipped`   |
//! | `"#"` placeholder         | `Skipped`   |
//! | equal to current location | `Skipped`   |
//! | anything else             | run starts  |
//!
//! A skipped call starts nothing: no callbacks, no state change.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::engine::{TransitionCompletion, TransitionEngine};
use crate::domain::{Direction, TransitionOptions};
use crate::error::{EffectError, TransitionError};
use crate::ports::{Navigator, TransitionEffect};

/// Placeholder link target that never navigates.
pub const PLACEHOLDER_TARGET: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Completed,
    Skipped,
}

/// Result of starting a navigation without waiting for it.
#[must_use]
pub enum NavigationStart {
    Started(TransitionCompletion),
    Skipped,
}

impl NavigationStart {
    /// Wait for the run, if one was started.
    pub async fn finish(self) -> Result<NavigationOutcome, TransitionError> {
        match self {
            NavigationStart::Started(completion) => {
                completion.await?;
                Ok(NavigationOutcome::Completed)
            }
            NavigationStart::Skipped => Ok(NavigationOutcome::Skipped),
        }
    }
}

/// Midpoint effect that moves a [`Navigator`] to `target`.
pub struct NavigationEffect {
    navigator: Arc<dyn Navigator>,
    target: String,
}

impl NavigationEffect {
    pub fn new(navigator: Arc<dyn Navigator>, target: impl Into<String>) -> Self {
        Self {
            navigator,
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl TransitionEffect for NavigationEffect {
    fn prepare(&mut self) -> Result<(), EffectError> {
        self.navigator.prefetch(&self.target)
    }

    fn fire(self: Box<Self>) {
        info!(target = %self.target, "[bps-01] Navigating");
        self.navigator.set_location(&self.target);
    }
}

/// Directional navigation on top of the shared engine.
#[derive(Clone)]
pub struct PageNavigator {
    engine: TransitionEngine,
    navigator: Arc<dyn Navigator>,
}

impl PageNavigator {
    pub fn new(engine: TransitionEngine, navigator: Arc<dyn Navigator>) -> Self {
        Self { engine, navigator }
    }

    pub fn engine(&self) -> &TransitionEngine {
        &self.engine
    }

    pub fn current_location(&self) -> String {
        self.navigator.current_location()
    }

    /// Whether navigating to `target` would be a no-op.
    pub fn should_skip(&self, target: &str) -> bool {
        let target = target.trim();
        target.is_empty()
            || target == PLACEHOLDER_TARGET
            || target == self.navigator.current_location()
    }

    /// Start a navigation and return without waiting for it to settle.
    pub fn begin(
        &self,
        target: &str,
        direction: Direction,
        options: TransitionOptions,
    ) -> Result<NavigationStart, TransitionError> {
        if self.should_skip(target) {
            debug!(target, "[bps-01] Navigation skipped");
            return Ok(NavigationStart::Skipped);
        }

        let effect: Box<dyn TransitionEffect> = Box::new(NavigationEffect::new(
            Arc::clone(&self.navigator),
            target.trim(),
        ));
        match self.engine.begin(direction, options, Some(effect)) {
            Ok(completion) => Ok(NavigationStart::Started(completion)),
            Err(err) => {
                warn!(target, %err, "[bps-01] Navigation not started");
                Err(err)
            }
        }
    }

    pub async fn navigate(
        &self,
        target: &str,
        direction: Direction,
        options: TransitionOptions,
    ) -> Result<NavigationOutcome, TransitionError> {
        self.begin(target, direction, options)?.finish().await
    }

    pub async fn slide_up(
        &self,
        target: &str,
        options: TransitionOptions,
    ) -> Result<NavigationOutcome, TransitionError> {
        self.navigate(target, Direction::Up, options).await
    }

    pub async fn slide_down(
        &self,
        target: &str,
        options: TransitionOptions,
    ) -> Result<NavigationOutcome, TransitionError> {
        self.navigate(target, Direction::Down, options).await
    }

    pub async fn slide_left(
        &self,
        target: &str,
        options: TransitionOptions,
    ) -> Result<NavigationOutcome, TransitionError> {
        self.navigate(target, Direction::Left, options).await
    }

    pub async fn slide_right(
        &self,
        target: &str,
        options: TransitionOptions,
    ) -> Result<NavigationOutcome, TransitionError> {
        self.navigate(target, Direction::Right, options).await
    }
}
