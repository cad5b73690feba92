//! Domain layer: matching, ordering, highlighting and the dropdown state.

pub mod highlight;
pub mod matching;
pub mod query;

pub use highlight::{highlight, Segment};
pub use matching::{
    filter_items, matches, sort_newest_first, suggest, Searchable, DEFAULT_SUGGESTION_CAP,
};
pub use query::{SuggestionKey, SuggestionQuery};
