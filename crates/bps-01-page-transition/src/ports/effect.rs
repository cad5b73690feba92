//! Midpoint side effect (Driven Port)

use crate::error::EffectError;

/// Work a run performs halfway through the overlay animation.
pub trait TransitionEffect: Send + 'static {
    /// Runs during setup when `preload` is set. A failure aborts the run.
    fn prepare(&mut self) -> Result<(), EffectError> {
        Ok(())
    }

    /// Runs once, at the midpoint of a run that was not cancelled.
    fn fire(self: Box<Self>);
}

/// Effect backed by a closure.
pub struct FnEffect<F>(Option<F>);

impl<F> FnEffect<F>
where
    F: FnOnce() + Send + 'static,
{
    pub fn new(f: F) -> Self {
        Self(Some(f))
    }

    pub fn boxed(f: F) -> Box<dyn TransitionEffect> {
        Box::new(Self::new(f))
    }
}

impl<F> TransitionEffect for FnEffect<F>
where
    F: FnOnce() + Send + 'static,
{
    fn fire(mut self: Box<Self>) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}
