//! Viewport lock (Driven Port)
//!
//! While a transition runs, the surface underneath must not scroll or react
//! to input. The lock is acquired during setup and released by dropping the
//! [`ViewportGuard`], which covers every exit path: settle, cancel, setup
//! failure and engine drop.

use std::fmt;
use std::sync::Arc;

use crate::error::EffectError;

pub trait ViewportLock: Send + Sync {
    fn acquire(&self) -> Result<(), EffectError>;

    /// Called exactly once per successful `acquire`.
    fn release(&self);
}

/// Lock that does nothing, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopViewport;

impl ViewportLock for NoopViewport {
    fn acquire(&self) -> Result<(), EffectError> {
        Ok(())
    }

    fn release(&self) {}
}

/// Scoped hold on a [`ViewportLock`].
#[must_use = "the viewport is released as soon as the guard is dropped"]
pub struct ViewportGuard {
    lock: Arc<dyn ViewportLock>,
}

impl ViewportGuard {
    pub fn acquire(lock: Arc<dyn ViewportLock>) -> Result<Self, EffectError> {
        lock.acquire()?;
        Ok(Self { lock })
    }
}

impl Drop for ViewportGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}

impl fmt::Debug for ViewportGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportGuard").finish_non_exhaustive()
    }
}
