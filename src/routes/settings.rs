use dioxus::prelude::*;
use crate::stores::settings_store::{self, DEFAULT_ENDPOINT, SETTINGS};

#[component]
pub fn Settings() -> Element {
    let mut endpoint_input = use_signal(|| SETTINGS.read().endpoint.clone());
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut saved = use_signal(|| false);

    // Settings load after mount, keep the field in step with the store
    use_effect(move || {
        endpoint_input.set(SETTINGS.read().endpoint.clone());
    });

    let current = SETTINGS.read().endpoint.clone();
    let is_default = current == DEFAULT_ENDPOINT;

    let handle_save = move |evt: Event<FormData>| {
        evt.prevent_default();
        saved.set(false);

        let value = endpoint_input.read().clone();
        match settings_store::set_endpoint(&value) {
            Ok(()) => {
                error_msg.set(None);
                endpoint_input.set(settings_store::get_endpoint());
                saved.set(true);
            }
            Err(e) => {
                log::warn!("Rejected endpoint: {}", e);
                error_msg.set(Some(e));
            }
        }
    };

    let handle_reset = move |_| {
        settings_store::reset_endpoint();
        endpoint_input.set(DEFAULT_ENDPOINT.to_string());
        error_msg.set(None);
        saved.set(true);
    };

    rsx! {
        div {
            class: "w-full max-w-lg bg-card text-card-foreground rounded-2xl shadow-2xl p-10",
            h1 {
                class: "text-2xl font-bold mb-2",
                "Settings"
            }
            p {
                class: "text-muted-foreground mb-6 text-sm",
                "Shorten requests are sent to "
                code { class: "font-mono", "{current}" }
            }

            form {
                class: "flex flex-col gap-3",
                onsubmit: handle_save,
                label {
                    r#for: "endpoint",
                    class: "text-sm font-semibold",
                    "Shortener endpoint"
                }
                input {
                    id: "endpoint",
                    r#type: "url",
                    class: "px-4 py-3 rounded-lg border-2 border-border bg-background focus:border-primary outline-none transition font-mono text-sm",
                    placeholder: DEFAULT_ENDPOINT,
                    value: "{endpoint_input}",
                    oninput: move |evt| {
                        endpoint_input.set(evt.value());
                        saved.set(false);
                    },
                }

                if let Some(err) = error_msg.read().clone() {
                    p { class: "text-sm text-destructive", "{err}" }
                }
                if *saved.read() {
                    p { class: "text-sm text-green-600", "Saved" }
                }

                div {
                    class: "flex gap-2 mt-2",
                    button {
                        r#type: "submit",
                        class: "flex-1 py-2 rounded-lg bg-primary text-primary-foreground hover:bg-primary/90 transition",
                        "Save"
                    }
                    button {
                        r#type: "button",
                        class: if is_default {
                            "px-4 py-2 rounded-lg border border-border text-muted-foreground cursor-not-allowed"
                        } else {
                            "px-4 py-2 rounded-lg border border-border hover:bg-accent transition"
                        },
                        disabled: is_default,
                        onclick: handle_reset,
                        "Reset"
                    }
                }
            }
        }
    }
}
