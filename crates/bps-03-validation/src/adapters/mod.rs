//! Adapters: local filesystem lookups feeding the cover gate.

pub mod local_file;

pub use local_file::{inspect_file, mime_for_extension};
