//! Dashboard context shared by every component on the page.

use leptos::prelude::*;
use pkgtracker_app::presenter::PackageRow;
use pkgtracker_app::refresh::Refresh;
use pkgtracker_app::services::DashboardService;

use crate::api::HttpTrackerApi;
use crate::time_format::LocaleFormat;

/// The dashboard use-cases wired to the browser adapters.
pub type Service = DashboardService<HttpTrackerApi, LocaleFormat>;

/// Reactive dashboard state provided through Leptos context.
#[derive(Clone)]
pub struct DashboardState {
    pub service: Service,
    /// Rows of the last current refresh; `None` until the first one lands.
    pub rows: RwSignal<Option<Vec<PackageRow>>>,
}

impl DashboardState {
    #[must_use]
    pub fn new(api: HttpTrackerApi) -> Self {
        Self {
            service: DashboardService::with_format(api, LocaleFormat),
            rows: RwSignal::new(None),
        }
    }

    /// Repaint the table with a refresh result. Stale results are dropped.
    pub fn apply(&self, refresh: Refresh) {
        match refresh.into_rows() {
            Some(rows) => self.rows.set(Some(rows)),
            None => leptos::logging::log!("ignoring out-of-date package list"),
        }
    }
}

/// Access the dashboard state from Leptos context.
///
/// Must be called below the component that provides it (see [`crate::App`]).
pub fn use_dashboard() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState not found in context")
}
