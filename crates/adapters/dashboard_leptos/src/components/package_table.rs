//! Package table: one row per tracked package, with delete buttons.
//!
//! Deletion uses a single click listener on the table body. Each button
//! carries its package id in `data-del`, so rows can be replaced wholesale on
//! every refresh without rebinding anything.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pkgtracker_app::presenter::PackageRow;
use pkgtracker_domain::id::PackageId;
use wasm_bindgen::JsCast;

use crate::components::{LoadingRow, use_toasts};
use crate::state::use_dashboard;

const COLUMNS: u8 = 8;

/// Package id of the delete button under the click, if any.
fn delete_target(ev: &leptos::ev::MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest("button[data-del]").ok()??;
    button.get_attribute("data-del")
}

/// The table of tracked packages, bound to `#pkgs-body`.
#[component]
pub fn PackageTable() -> impl IntoView {
    let state = use_dashboard();
    let toasts = use_toasts();
    let rows = state.rows;
    let deleting = RwSignal::new(Vec::<String>::new());

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(id) = delete_target(&ev) else {
            return;
        };
        if deleting.with_untracked(|ids| ids.contains(&id)) {
            return;
        }
        deleting.update(|ids| ids.push(id.clone()));

        let state = state.clone();
        spawn_local(async move {
            let result = state.service.delete_package(&PackageId::from(id.as_str())).await;
            deleting.update(|ids| ids.retain(|d| d != &id));
            match result {
                Ok(refresh) => state.apply(refresh),
                Err(err) => toasts.error("Failed to delete package", &err),
            }
        });
    };

    view! {
        <table class="packages">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Carrier"</th>
                    <th>"Number"</th>
                    <th>"Label"</th>
                    <th>"Status"</th>
                    <th>"Summary"</th>
                    <th>"Last update"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody id="pkgs-body" on:click=on_click>
                {move || match rows.get() {
                    None => view! { <LoadingRow columns=COLUMNS message="Loading packages\u{2026}"/> }.into_any(),
                    Some(list) if list.is_empty() => view! {
                        <tr class="empty">
                            <td colspan=COLUMNS>"No packages tracked yet."</td>
                        </tr>
                    }.into_any(),
                    Some(list) => list
                        .into_iter()
                        .map(|row| view! { <PackageRowView row deleting/> })
                        .collect_view()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}

/// A single row in the package table.
#[component]
fn PackageRowView(
    /// The package to display.
    row: PackageRow,
    /// Ids whose delete request is still in flight.
    deleting: RwSignal<Vec<String>>,
) -> impl IntoView {
    let id = row.id.clone();
    let busy = move || deleting.with(|ids| ids.contains(&id));

    view! {
        <tr>
            <td><code>{row.id.clone()}</code></td>
            <td>{row.carrier}</td>
            <td><code>{row.number}</code></td>
            <td>{row.label}</td>
            <td>{row.detailed_status}</td>
            <td><b>{row.summary_status}</b></td>
            <td>{row.last_update}</td>
            <td>
                <button type="button" class="btn-delete" data-del=row.id disabled=busy>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
