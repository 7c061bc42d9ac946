//! Tracker API port: the REST surface of the tracking server.
//!
//! The dashboard never talks to the network directly; it goes through an
//! implementation of [`TrackerApi`]. The browser adapter implements it with
//! `gloo-net`, tests implement it with in-memory fakes.
//!
//! Every call is a single attempt: no retry, no timeout.

use std::future::Future;

use pkgtracker_domain::id::PackageId;
use pkgtracker_domain::package::{NewPackage, Package};
use pkgtracker_domain::poll::PollAck;
use pkgtracker_domain::settings::Settings;

use crate::error::ApiError;

/// An endpoint of the tracking server, relative to the configured API base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `/api/settings` (GET, POST)
    Settings,
    /// `/api/packages` (GET, POST)
    Packages,
    /// `/api/packages/{id}` (DELETE)
    Package(&'a PackageId),
    /// `/api/trigger-poll` (POST)
    TriggerPoll,
}

impl Endpoint<'_> {
    /// Absolute path of the endpoint, with the package id escaped as a
    /// single path segment.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Settings => "/api/settings".to_string(),
            Self::Packages => "/api/packages".to_string(),
            Self::Package(id) => format!("/api/packages/{}", encode_path_segment(id.as_str())),
            Self::TriggerPoll => "/api/trigger-poll".to_string(),
        }
    }
}

/// Percent-encode the characters that would split or terminate a path segment.
fn encode_path_segment(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('#', "%23")
        .replace(' ', "%20")
}

/// Header sent with every request, bodiless ones included.
pub const CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

/// Whether a response status counts as success. Anything outside 2xx fails,
/// whatever the code.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Client side of the tracking server's REST API.
///
/// Futures are not required to be `Send`: the browser runs every request on
/// its single UI thread.
pub trait TrackerApi {
    /// `GET /api/settings`
    fn get_settings(&self) -> impl Future<Output = Result<Settings, ApiError>>;

    /// `POST /api/settings`. The acknowledgement body is not inspected.
    fn save_settings(&self, settings: &Settings) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /api/packages`
    fn list_packages(&self) -> impl Future<Output = Result<Vec<Package>, ApiError>>;

    /// `POST /api/packages`. The created package in the response is not
    /// inspected; the next refresh picks it up.
    fn add_package(&self, package: &NewPackage) -> impl Future<Output = Result<(), ApiError>>;

    /// `DELETE /api/packages/{id}`
    fn delete_package(&self, id: &PackageId) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /api/trigger-poll`
    fn trigger_poll(&self) -> impl Future<Output = Result<PollAck, ApiError>>;
}
