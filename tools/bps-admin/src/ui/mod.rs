//! UI module - TUI rendering components.
//!
//! One renderer per screen, dispatched on the current route:
//! - `layout.rs`: Header, body and footer orchestration
//! - `home.rs`, `auth.rs`, `publications.rs`, `publication_form.rs`, `gallery.rs`: Screens
//! - `widgets/`: Overlays shared by every screen

mod auth;
mod gallery;
mod home;
mod layout;
mod publication_form;
mod publications;

pub mod widgets;

pub use layout::render;
