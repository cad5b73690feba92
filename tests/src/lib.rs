//! # BPS Publication Admin Test Suite
//!
//! Flows that cross crate boundaries. Per-crate behaviour is tested next to
//! the code it covers.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion: search over large collections
//! └── src/integration/  # store + submitter + search, engine + navigator, admin app
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bps-tests
//!
//! # By area
//! cargo test -p bps-tests integration::catalogue
//! cargo test -p bps-tests integration::navigation
//! cargo test -p bps-tests integration::admin
//!
//! # Benchmarks
//! cargo bench -p bps-tests
//! ```

pub mod integration;
