//! Per-run options.

use std::fmt;
use std::time::Duration;

use crate::error::TransitionError;

pub(crate) type Callback = Box<dyn FnOnce() + Send + 'static>;
pub(crate) type ErrorCallback = Box<dyn FnOnce(&TransitionError) + Send + 'static>;

/// Options for a single transition run.
///
/// ```ignore
/// let options = TransitionOptions::new()
///     .duration(Duration::from_millis(800))
///     .on_complete(|| tracing::info!("arrived"));
/// ```
pub struct TransitionOptions {
    /// Overrides the engine's default duration
    pub duration: Option<Duration>,
    /// Prepare the effect (prefetch the target) during setup
    pub preload: bool,
    pub(crate) on_start: Option<Callback>,
    pub(crate) on_complete: Option<Callback>,
    pub(crate) on_error: Option<ErrorCallback>,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration: None,
            preload: true,
            on_start: None,
            on_complete: None,
            on_error: None,
        }
    }
}

impl TransitionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    /// Runs right after the state enters the `Entering` phase.
    pub fn on_start(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    /// Runs after the state is back to idle, before the completion resolves.
    pub fn on_complete(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Runs when setup fails. Not called for `InProgress` or cancellation.
    pub fn on_error(mut self, f: impl FnOnce(&TransitionError) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for TransitionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionOptions")
            .field("duration", &self.duration)
            .field("preload", &self.preload)
            .field("on_start", &self.on_start.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
