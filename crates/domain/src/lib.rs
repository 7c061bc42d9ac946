//! # pkgtracker-domain
//!
//! Pure data model for the package tracker dashboard.
//!
//! ## Responsibilities
//! - Foundational types: package identifiers, lenient timestamps, form errors
//! - Define **Packages** (tracked shipments and their poll history)
//! - Define **Settings** (poll interval and MQTT broker connection)
//! - Convert between settings and the raw text of the settings form
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It never performs IO; the server API is a port in the `app` crate.

pub mod error;
pub mod id;
pub mod time;

pub mod form;
pub mod package;
pub mod poll;
pub mod settings;
