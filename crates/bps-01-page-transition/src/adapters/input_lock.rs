//! Input lock for terminal front ends.
//!
//! While held, the event loop drops key presses instead of routing them to
//! the page underneath the overlay.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::error::EffectError;
use crate::ports::ViewportLock;

#[derive(Debug, Default)]
pub struct InputLock {
    locked: AtomicBool,
    acquisitions: AtomicU64,
}

impl InputLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }

    /// Total successful acquisitions since creation.
    pub fn acquisitions(&self) -> u64 {
        self.acquisitions.load(Ordering::SeqCst)
    }
}

impl ViewportLock for InputLock {
    fn acquire(&self) -> Result<(), EffectError> {
        self.locked
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| EffectError::Viewport("input is already locked".to_string()))?;
        self.acquisitions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn release(&self) {
        self.locked.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_is_exclusive() {
        let lock = InputLock::new();
        lock.acquire().unwrap();
        assert!(lock.is_locked());
        assert!(lock.acquire().is_err());

        lock.release();
        assert!(!lock.is_locked());
        lock.acquire().unwrap();
        assert_eq!(lock.acquisitions(), 2);
    }
}
