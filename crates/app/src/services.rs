//! Use-cases driven by the dashboard controls.
//!
//! The service is generic over its [`crate::ports::TrackerApi`] so the browser
//! adapter and the test fakes plug in the same way.

pub mod dashboard_service;

pub use dashboard_service::{DashboardService, Loaded, Polled};
