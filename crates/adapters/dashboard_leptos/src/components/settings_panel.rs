//! Settings form: poll interval and MQTT broker connection.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pkgtracker_domain::form::{SettingsField, SettingsForm};

use crate::components::use_toasts;
use crate::state::use_dashboard;

/// Blocking notice shown once the server has stored new settings.
const SAVED_NOTICE: &str = "Saved. MQTT discovery may take a moment to propagate.";

fn field_label(field: SettingsField) -> &'static str {
    match field {
        SettingsField::PollIntervalMinutes => "Poll interval (minutes)",
        SettingsField::MqttHost => "MQTT host",
        SettingsField::MqttPort => "MQTT port",
        SettingsField::MqttUsername => "MQTT username",
        SettingsField::MqttPassword => "MQTT password",
        SettingsField::MqttBaseTopic => "MQTT base topic",
    }
}

/// `type` and `inputmode` of a field's input.
///
/// Integer fields stay plain text so the typed value reaches the lenient
/// integer parser unchanged; a number input reports `"15min"` as empty.
fn input_kind(field: SettingsField) -> (&'static str, &'static str) {
    match field {
        SettingsField::MqttPassword => ("password", "text"),
        field if field.is_integer() => ("text", "numeric"),
        _ => ("text", "text"),
    }
}

/// The `#settings-form` form.
///
/// Saving does not touch the package table: settings only change how the
/// server polls and publishes.
#[component]
pub fn SettingsPanel(
    /// Field text, filled in by the initial load.
    settings: RwSignal<SettingsForm>,
    /// Set once the server's settings are in the form; saving is disabled
    /// before that.
    loaded: RwSignal<bool>,
) -> impl IntoView {
    let state = use_dashboard();
    let toasts = use_toasts();
    let saving = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() || !loaded.get_untracked() {
            return;
        }
        let form = settings.get_untracked();
        saving.set(true);

        let state = state.clone();
        spawn_local(async move {
            let result = state.service.save_settings(&form).await;
            saving.set(false);
            match result {
                Ok(_) => {
                    if let Err(err) = window().alert_with_message(SAVED_NOTICE) {
                        leptos::logging::warn!("failed to show notice: {err:?}");
                    }
                }
                Err(err) => toasts.error("Failed to save settings", &err),
            }
        });
    };

    view! {
        <form id="settings-form" class="settings-form" on:submit=on_submit>
            {SettingsField::ALL
                .into_iter()
                .map(|field| {
                    let (kind, inputmode) = input_kind(field);
                    view! {
                        <label for=field.id()>{field_label(field)}</label>
                        <input
                            id=field.id()
                            name=field.id()
                            type=kind
                            inputmode=inputmode
                            prop:value=move || settings.with(|form| field.value(form).to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                settings.update(|form| field.set_value(form, value));
                            }
                        />
                    }
                })
                .collect_view()}
            <button type="submit" disabled=move || saving.get() || !loaded.get()>
                {move || if saving.get() { "Saving\u{2026}" } else { "Save settings" }}
            </button>
        </form>
    }
}
