//! Placeholder row shown inside a table body while its data loads.

use leptos::prelude::*;

/// A full-width table row with an animated spinner and a message.
#[component]
pub fn LoadingRow(
    /// Number of columns the row spans.
    columns: u8,
    /// Text shown next to the spinner.
    #[prop(default = "Loading\u{2026}".into(), into)]
    message: String,
) -> impl IntoView {
    view! {
        <tr class="loading">
            <td colspan=columns>
                <span class="spinner"></span>
                <span>{message}</span>
            </td>
        </tr>
    }
}
