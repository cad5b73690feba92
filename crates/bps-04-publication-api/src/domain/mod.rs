//! Domain layer: collection rules, cover fallbacks and operator messages.

pub mod collection;
pub mod cover;
pub mod messages;

pub use collection::{prepend, remove_by_id, replace_by_id};
pub use cover::{placeholder_cover_url, CoverUpload, PLACEHOLDER_COVER_BASE};
