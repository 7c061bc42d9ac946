//! Dashboard service: the use-cases behind every control on the page.
//!
//! Each mutation is followed by a full re-fetch of the package list; the
//! table is never patched locally. A failed call returns early, so nothing
//! after it (clearing fields, re-rendering) happens.

use pkgtracker_domain::form::SettingsForm;
use pkgtracker_domain::id::PackageId;
use pkgtracker_domain::package::NewPackage;
use pkgtracker_domain::poll::PollAck;
use pkgtracker_domain::settings::Settings;

use crate::error::{ApiError, DashboardError};
use crate::ports::TrackerApi;
use crate::presenter::{Rfc3339Format, TimestampFormat, package_rows};
use crate::refresh::{Refresh, RefreshGenerations};

/// Result of the initial page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    /// Field values for the settings form.
    pub settings: SettingsForm,
    /// First rendering of the package table. Fails on its own so the
    /// settings above are still shown.
    pub packages: Result<Refresh, ApiError>,
}

/// Result of a manual poll.
#[derive(Debug, Clone, PartialEq)]
pub struct Polled {
    pub ack: PollAck,
    pub packages: Refresh,
}

/// Application service for the package dashboard.
#[derive(Debug, Clone)]
pub struct DashboardService<A, F = Rfc3339Format> {
    api: A,
    format: F,
    generations: RefreshGenerations,
}

impl<A: TrackerApi> DashboardService<A> {
    /// Create a service that renders timestamps as RFC 3339.
    pub fn new(api: A) -> Self {
        Self::with_format(api, Rfc3339Format)
    }
}

impl<A: TrackerApi, F: TimestampFormat> DashboardService<A, F> {
    /// Create a service with a custom "last update" formatter.
    pub fn with_format(api: A, format: F) -> Self {
        Self {
            api,
            format,
            generations: RefreshGenerations::new(),
        }
    }

    /// Access the underlying API client.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial page load: fetch settings, then render the package table.
    ///
    /// # Errors
    ///
    /// Returns the error of `GET /api/settings`; the table is not fetched
    /// then. A failing package list is reported in [`Loaded::packages`].
    pub async fn load(&self) -> Result<Loaded, ApiError> {
        tracing::debug!("loading settings");
        let settings = self.api.get_settings().await?;
        let settings = SettingsForm::from(&settings);
        let packages = self.refresh().await;
        Ok(Loaded { settings, packages })
    }

    /// Fetch the package list and turn it into table rows.
    ///
    /// # Errors
    ///
    /// Returns the error of `GET /api/packages`.
    pub async fn refresh(&self) -> Result<Refresh, ApiError> {
        let ticket = self.generations.begin();
        let packages = self.api.list_packages().await?;
        if !self.generations.settle(ticket) {
            tracing::warn!(count = packages.len(), "discarding stale package list");
            return Ok(Refresh::Stale);
        }
        tracing::debug!(count = packages.len(), "package list refreshed");
        Ok(Refresh::Current(package_rows(&packages, &self.format)))
    }

    /// Add a package, then refresh.
    ///
    /// `on_created` runs once the server has accepted the package and before
    /// the refresh starts; the add form clears its inputs there.
    ///
    /// # Errors
    ///
    /// Returns the error of the POST (neither `on_created` nor the refresh
    /// run) or of the refresh itself.
    pub async fn add_package(
        &self,
        package: &NewPackage,
        on_created: impl FnOnce(),
    ) -> Result<Refresh, ApiError> {
        tracing::debug!(carrier = %package.carrier, number = %package.number, "adding package");
        self.api.add_package(package).await?;
        on_created();
        self.refresh().await
    }

    /// Delete a package, then refresh.
    ///
    /// # Errors
    ///
    /// Returns the error of the DELETE (the refresh is skipped) or of the
    /// refresh itself.
    pub async fn delete_package(&self, id: &PackageId) -> Result<Refresh, ApiError> {
        tracing::debug!(package_id = %id, "deleting package");
        self.api.delete_package(id).await?;
        self.refresh().await
    }

    /// Parse the settings form and save it. The package table is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Form`] without sending anything when an
    /// integer field does not parse, or [`DashboardError::Api`] when the
    /// server rejects the request.
    pub async fn save_settings(&self, form: &SettingsForm) -> Result<Settings, DashboardError> {
        let settings = form.parse()?;
        tracing::debug!(
            poll_interval_minutes = settings.poll_interval_minutes,
            mqtt_host = %settings.mqtt.host,
            mqtt_port = settings.mqtt.port,
            "saving settings"
        );
        self.api.save_settings(&settings).await?;
        Ok(settings)
    }

    /// Ask the server to poll every carrier now, then refresh.
    ///
    /// # Errors
    ///
    /// Returns the error of the trigger (the refresh is skipped) or of the
    /// refresh itself.
    pub async fn trigger_poll(&self) -> Result<Polled, ApiError> {
        tracing::debug!("triggering poll");
        let ack = self.api.trigger_poll().await?;
        let packages = self.refresh().await?;
        Ok(Polled { ack, packages })
    }
}
