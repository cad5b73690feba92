//! Cross-crate flows, all on the in-memory backend.
//!
//! | Module | Crates exercised |
//! |--------|------------------|
//! | `catalogue` | bps-02, bps-03, bps-04 |
//! | `navigation` | bps-01 |
//! | `admin` | bps-admin on top of all of the above |

pub mod admin;
pub mod catalogue;
pub mod navigation;
