//! BPS-Admin: BPS Provinsi Gorontalo publication admin
//!
//! A TUI client for browsing, searching and maintaining the publications of
//! BPS Provinsi Gorontalo. Every page change runs through the transition
//! engine, so input is locked while a page animates in.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  ui (ratatui)          renders App, one module per screen     │
//! ├───────────────────────────────────────────────────────────────┤
//! │  domain::App           key → Command, results → state         │
//! ├───────────────────────────────────────────────────────────────┤
//! │  services              Command → bps-01 / bps-02 / bps-04     │
//! ├───────────────────────────────────────────────────────────────┤
//! │  config                file → env → CLI, validated            │
//! └───────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod domain;
pub mod services;
pub mod ui;

pub use config::{AdminConfig, ConfigError};
pub use domain::{App, AppState, Command, Key, Route};
pub use services::{dispatch, Services, SharedApp};
