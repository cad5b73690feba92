//! Location primitives (Driven Port)

use crate::error::EffectError;

/// Whatever owns "the current page".
///
/// Implementations must not call back into the transition engine from
/// `prefetch`; it runs while the engine admits the run.
pub trait Navigator: Send + Sync {
    fn current_location(&self) -> String;

    fn set_location(&self, target: &str);

    /// Warm up `target` ahead of navigation.
    fn prefetch(&self, _target: &str) -> Result<(), EffectError> {
        Ok(())
    }
}
