use dioxus::prelude::*;
use crate::components::icons::{CheckIcon, CopyIcon};

/// Result panel: the shortened link in a read-only field plus a copy button
#[component]
pub fn ShortenedLink(
    /// Link returned by the shortener
    link: String,
    /// True right after a successful copy
    copied: bool,
    /// Copy handler
    on_copy: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "mt-8 p-5 rounded-xl bg-muted/50 border border-border text-left",
            h3 {
                class: "text-sm font-semibold text-muted-foreground mb-3",
                "Shortened URL"
            }
            div {
                class: "flex gap-2",
                input {
                    r#type: "text",
                    class: "flex-1 min-w-0 px-3 py-2 rounded-lg border border-border bg-background font-mono text-sm",
                    value: "{link}",
                    readonly: true,
                    // Select all on focus so the link can also be copied by hand
                    onfocus: move |_| {
                        #[cfg(target_arch = "wasm32")]
                        {
                            use wasm_bindgen::JsCast;
                            if let Some(input) = web_sys::window()
                                .and_then(|w| w.document())
                                .and_then(|d| d.active_element())
                                .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
                            {
                                input.select();
                            }
                        }
                    },
                }
                button {
                    class: if copied {
                        "px-4 py-2 rounded-lg bg-green-600 text-white transition flex items-center gap-2"
                    } else {
                        "px-4 py-2 rounded-lg bg-primary text-primary-foreground hover:bg-primary/90 transition flex items-center gap-2"
                    },
                    onclick: move |_| on_copy.call(()),
                    if copied {
                        CheckIcon { class: "w-4 h-4" }
                        span { "Copied!" }
                    } else {
                        CopyIcon { class: "w-4 h-4" }
                        span { "Copy" }
                    }
                }
            }
        }
    }
}
