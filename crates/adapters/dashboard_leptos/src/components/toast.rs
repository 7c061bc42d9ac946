//! Toast notifications for failed requests.
//!
//! Every failed call is written to the browser console and shown as a toast
//! that closes itself after [`TOAST_TIMEOUT_MS`].

use std::fmt::Display;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long an error toast stays on screen.
pub const TOAST_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone)]
struct Toast {
    id: u32,
    text: String,
}

/// Handle for pushing and dismissing toasts.
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    /// Log `err` with its context and show it in a toast.
    pub fn error(&self, context: &str, err: &impl Display) {
        leptos::logging::error!("{context}: {err}");
        self.push(format!("{context}: {err}"));
    }

    fn push(&self, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.list.update(|list| list.push(Toast { id, text }));

        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            this.dismiss(id);
        });
    }

    fn dismiss(&self, id: u32) {
        self.list.update(|list| list.retain(|t| t.id != id));
    }
}

/// Access the toast handle from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts not found in context")
}

/// Provides toast context to its children and renders active toasts.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let toasts = Toasts {
        list: RwSignal::new(Vec::new()),
        next_id: RwSignal::new(0),
    };
    provide_context(toasts);

    view! {
        {children()}
        <div class="toast-container" role="status">
            <For each=move || toasts.list.get() key=|toast| toast.id let:toast>
                <div class="toast toast-error">
                    <button class="toast-dismiss" on:click=move |_| toasts.dismiss(toast.id)>
                        "\u{00D7}"
                    </button>
                    {toast.text}
                </div>
            </For>
        </div>
    }
}
