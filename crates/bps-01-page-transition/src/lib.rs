//! # Page Transition Engine (bps-01)
//!
//! Animated, timer-driven page transitions for the publication admin, and the
//! directional navigation wrapper the header and list pages call.
//!
//! ## Architecture
//!
//! ```text
//!                ┌──────────────────────────────────────────────┐
//!  slide_up() ──▶│ PageNavigator                                │
//!                │   guards: "", "#", current location          │
//!                │        │                                     │
//!                │        ▼                                     │
//!                │ TransitionEngine ── watch ──▶ UI (progress)  │
//!                │   │ ticker   +2 / 16 ms       up to 40       │
//!                │   │ 0.4 d    Midpoint  → NavigationEffect    │
//!                │   │ 0.5 d    BeginExit → progress 70         │
//!                │   │ 1.0 d    Finish    → progress 100        │
//!                │   └ +100 ms  Settle    → idle, on_complete   │
//!                └──────────────────────────────────────────────┘
//!                       │                   │
//!                 ViewportLock          Navigator
//!                 (InputLock)        (MemoryNavigator)
//! ```
//!
//! ## State table
//!
//! | Phase      | `is_transitioning` | progress        |
//! |------------|--------------------|-----------------|
//! | `Idle`     | false              | 0               |
//! | `Entering` | true               | 0 ..= 50        |
//! | `Exiting`  | true               | 70 ..= 100      |
//!
//! Only one run may be in flight. A second `begin` fails with
//! [`TransitionError::InProgress`] and leaves the first untouched.
//!
//! ## Usage
//!
//! ```ignore
//! let engine = TransitionEngine::new(Arc::new(InputLock::new()));
//! let pages = PageNavigator::new(engine, navigator);
//! pages.slide_up("/publications/add", TransitionOptions::new()).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{InputLock, MemoryNavigator};
pub use domain::{
    apply, Direction, Phase, TransitionEvent, TransitionOptions, TransitionState,
    TransitionTiming,
};
pub use error::{EffectError, TransitionError};
pub use ports::{FnEffect, Navigator, NoopViewport, TransitionEffect, ViewportGuard, ViewportLock};
pub use service::{
    NavigationEffect, NavigationOutcome, NavigationStart, PageNavigator, RunId,
    TransitionCompletion, TransitionEngine,
};
