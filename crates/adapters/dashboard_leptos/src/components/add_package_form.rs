//! Form for starting to track a new package.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pkgtracker_domain::package::{KNOWN_CARRIERS, NewPackage};

use crate::components::use_toasts;
use crate::state::use_dashboard;

/// The `#add-form` form: carrier, tracking number and optional label.
///
/// The number and label are cleared once the server accepts the package;
/// the carrier choice is kept for the next entry.
#[component]
pub fn AddPackageForm() -> impl IntoView {
    let state = use_dashboard();
    let toasts = use_toasts();

    let carrier = RwSignal::new(KNOWN_CARRIERS[0].0.to_string());
    let number = RwSignal::new(String::new());
    let label = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let package = NewPackage::new(
            carrier.get_untracked(),
            number.get_untracked(),
            label.get_untracked(),
        );
        pending.set(true);

        let state = state.clone();
        spawn_local(async move {
            let result = state
                .service
                .add_package(&package, || {
                    number.set(String::new());
                    label.set(String::new());
                })
                .await;
            pending.set(false);
            match result {
                Ok(refresh) => state.apply(refresh),
                Err(err) => toasts.error("Failed to add package", &err),
            }
        });
    };

    view! {
        <form id="add-form" class="add-form" on:submit=on_submit>
            <select
                id="carrier"
                prop:value=move || carrier.get()
                on:change=move |ev| carrier.set(event_target_value(&ev))
            >
                {KNOWN_CARRIERS
                    .iter()
                    .map(|(value, name)| view! { <option value=*value>{*name}</option> })
                    .collect_view()}
            </select>
            <input
                id="number"
                type="text"
                placeholder="Tracking number"
                prop:value=move || number.get()
                on:input=move |ev| number.set(event_target_value(&ev))
            />
            <input
                id="label"
                type="text"
                placeholder="Label (optional)"
                prop:value=move || label.get()
                on:input=move |ev| label.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Adding\u{2026}" } else { "Add" }}
            </button>
        </form>
    }
}
