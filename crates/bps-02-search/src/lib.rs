//! # BPS-02 Search
//!
//! Case-insensitive search over the in-memory publication collection, and
//! the debounced autocomplete dropdown of the publication list.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure functions and state, no timers
//!   - `matches` / `suggest` / `filter_items`: substring matching on title or description
//!   - `sort_newest_first`: the list's release-date ordering
//!   - `highlight`: split text into matched and unmatched runs
//!   - `SuggestionQuery`: term, candidates, cursor and dropdown visibility
//!
//! - **Service Layer** (`service/`): timers
//!   - `DebouncedSuggester`: trailing-edge debounce around `suggest`
//!
//! ## Debounce Timeline
//!
//! ```text
//! keystroke:   s      se     sen
//!              │      │      │
//! time (ms):   0     100    200                 500
//!              └─X    └─X    └──── 300 ms ──────┤ recompute("sen")
//! ```
//!
//! Every keystroke cancels the pending computation and schedules a new one,
//! so a burst of typing results in a single recomputation.
//!
//! ## Ordering
//!
//! Suggestions keep the collection's order (newest first once the list is
//! sorted). Results are never re-ranked by match quality.

pub mod domain;
pub mod service;

pub use domain::{
    filter_items, highlight, matches, sort_newest_first, suggest, Searchable, Segment,
    SuggestionKey, SuggestionQuery, DEFAULT_SUGGESTION_CAP,
};
pub use service::{DebouncedSuggester, SuggesterConfig};
