//! Browser dashboard for the package tracker.
//!
//! One page: the tracked-package table, an add form, the settings form and
//! a manual poll button. Every mutation goes through
//! [`pkgtracker_app::services::DashboardService`] and ends with a full
//! re-fetch of the package list.

use std::sync::Once;

use leptos::prelude::*;
use leptos::task::spawn_local;
use pkgtracker_domain::form::SettingsForm;

pub mod api;
mod components;
pub mod config;
pub mod state;
pub mod time_format;

use api::HttpTrackerApi;
use components::{
    AddPackageForm, PackageTable, PollButton, SettingsPanel, ToastContainer, use_toasts,
};
use state::DashboardState;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Route `log` records, and the `tracing` events the app crate emits, to the
/// browser console. Later calls are no-ops.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| wasm_logger::init(wasm_logger::Config::new(log::Level::Debug)));
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastContainer>
            <Dashboard/>
        </ToastContainer>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let state = DashboardState::new(HttpTrackerApi::new(config::from_document()));
    provide_context(state.clone());
    let toasts = use_toasts();
    let settings = RwSignal::new(SettingsForm::default());
    let settings_loaded = RwSignal::new(false);

    spawn_local(async move {
        match state.service.load().await {
            Ok(loaded) => {
                settings.set(loaded.settings);
                settings_loaded.set(true);
                match loaded.packages {
                    Ok(refresh) => state.apply(refresh),
                    Err(err) => toasts.error("Failed to load packages", &err),
                }
            }
            Err(err) => toasts.error("Failed to load settings", &err),
        }
    });

    view! {
        <main class="dashboard">
            <header>
                <h1>"Package tracker"</h1>
                <PollButton/>
            </header>
            <section class="card">
                <h2>"Packages"</h2>
                <AddPackageForm/>
                <PackageTable/>
            </section>
            <section class="card">
                <h2>"Settings"</h2>
                <SettingsPanel settings loaded=settings_loaded/>
            </section>
        </main>
    }
}
