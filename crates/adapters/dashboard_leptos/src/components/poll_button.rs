//! Manual poll trigger.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pkgtracker_app::presenter::TimestampFormat;

use crate::components::use_toasts;
use crate::state::use_dashboard;
use crate::time_format::LocaleFormat;

/// The `#poll-btn` button: poll every carrier now, then refresh the table.
#[component]
pub fn PollButton() -> impl IntoView {
    let state = use_dashboard();
    let toasts = use_toasts();
    let polling = RwSignal::new(false);
    let last_poll = RwSignal::new(None::<String>);

    let on_click = move |_| {
        if polling.get_untracked() {
            return;
        }
        polling.set(true);

        let state = state.clone();
        spawn_local(async move {
            let result = state.service.trigger_poll().await;
            polling.set(false);
            match result {
                Ok(polled) => {
                    if let Some(ts) = polled.ack.last_poll {
                        last_poll.set(Some(LocaleFormat.format(&ts)));
                    }
                    state.apply(polled.packages);
                }
                Err(err) => toasts.error("Failed to trigger poll", &err),
            }
        });
    };

    view! {
        <div class="poll">
            <button id="poll-btn" type="button" on:click=on_click disabled=move || polling.get()>
                {move || if polling.get() { "Polling\u{2026}" } else { "Poll now" }}
            </button>
            {move || last_poll.get().map(|ts| view! {
                <span class="hint">"Last poll: " {ts}</span>
            })}
        </div>
    }
}
