//! # Shared Types Crate
//!
//! Entities exchanged between the admin crates and the remote publication API.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the JSON shape of a publication (`id`, `title`,
//!   `releaseDate`, `description`, `coverUrl`) is defined once, here.
//! - **Drafts are values**: a [`PublicationDraft`] is owned by the form editing it
//!   and is handed to the API layer by reference, so a failed submit never loses
//!   the text the user typed.

pub mod draft;
pub mod entities;

pub use draft::{CoverSource, PublicationDraft};
pub use entities::*;
