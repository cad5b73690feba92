//! Ports: what the engine needs from its surroundings.
//!
//! - `ViewportLock`: scroll/input lock held for the lifetime of a run
//! - `TransitionEffect`: the side effect fired at the midpoint
//! - `Navigator`: "current location" and "set location" primitives

pub mod effect;
pub mod navigator;
pub mod viewport;

pub use effect::{FnEffect, TransitionEffect};
pub use navigator::Navigator;
pub use viewport::{NoopViewport, ViewportGuard, ViewportLock};
