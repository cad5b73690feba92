//! Service layer: the collection mirror, the auth session and the form
//! submission flow.

pub mod session;
pub mod store;
pub mod submit;

pub use session::AuthSession;
pub use store::{DeleteOutcome, PublicationStore};
pub use submit::PublicationSubmitter;
