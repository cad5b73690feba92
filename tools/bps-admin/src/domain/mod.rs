//! Domain models for the admin client.

mod app;
mod format;
mod forms;
mod gallery;
mod route;
mod router;

pub use app::{App, AppState, Command, Key, Notice, NoticeKind, ViewMode};
pub use format::{format_date, truncate};
pub use forms::{AuthField, AuthForm, AuthMode, PublicationField, PublicationForm, TextInput};
pub use gallery::{GalleryItem, GalleryState, GALLERY_ITEMS};
pub use route::{direction_for, nav_item_for, NavItem, Route, NAV_ITEMS};
pub use router::RouteNavigator;
