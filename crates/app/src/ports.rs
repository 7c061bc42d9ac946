//! Outbound ports. The dashboard reaches the tracking server only through
//! these traits; adapters live in their own crates.

pub mod tracker_api;

pub use tracker_api::{CONTENT_TYPE, Endpoint, TrackerApi, is_success};
