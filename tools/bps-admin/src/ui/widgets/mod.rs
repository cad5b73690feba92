//! Overlays drawn on top of the current screen.

mod dialogs;
mod help_overlay;
mod transition_overlay;

pub use dialogs::{render_confirm_delete, render_notice};
pub use help_overlay::{centered_rect, render_help_overlay};
pub use transition_overlay::render_transition_overlay;
