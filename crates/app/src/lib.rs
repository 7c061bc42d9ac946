//! # pkgtracker-app
//!
//! Application layer: dashboard use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven/outbound port** the adapters implement:
//!   - `TrackerApi`: the tracking server's REST API
//! - Define the **driving/inbound** use-cases:
//!   - `DashboardService`: load, refresh, add, delete, save settings, poll
//! - Present packages as table rows (`presenter`)
//! - Discard package lists that arrive out of order (`refresh`)
//!
//! ## Dependency rule
//! Depends on `pkgtracker-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod error;
pub mod ports;
pub mod presenter;
pub mod refresh;
pub mod services;
