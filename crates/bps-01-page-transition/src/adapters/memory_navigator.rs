//! Navigator backed by memory, with a visit history.

use parking_lot::RwLock;

use crate::error::EffectError;
use crate::ports::Navigator;

#[derive(Debug)]
pub struct MemoryNavigator {
    location: RwLock<String>,
    history: RwLock<Vec<String>>,
    prefetched: RwLock<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            location: RwLock::new(initial.into()),
            history: RwLock::new(Vec::new()),
            prefetched: RwLock::new(Vec::new()),
        }
    }

    /// Every location set, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.read().clone()
    }

    pub fn prefetched(&self) -> Vec<String> {
        self.prefetched.read().clone()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn current_location(&self) -> String {
        self.location.read().clone()
    }

    fn set_location(&self, target: &str) {
        *self.location.write() = target.to_string();
        self.history.write().push(target.to_string());
    }

    fn prefetch(&self, target: &str) -> Result<(), EffectError> {
        self.prefetched.write().push(target.to_string());
        Ok(())
    }
}
