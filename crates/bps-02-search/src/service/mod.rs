//! Service layer: debounced recomputation of suggestions.

pub mod debounce;

pub use debounce::{DebouncedSuggester, SuggesterConfig};
