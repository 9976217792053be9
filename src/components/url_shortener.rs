use dioxus::prelude::*;
use crate::components::icons::{AlertTriangleIcon, LinkIcon, LoaderIcon};
use crate::components::shortened_link::ShortenedLink;
use crate::hooks::use_shortener;

/// URL shortener card: URL + custom word inputs, submit button, and either
/// the error box or the shortened link
#[component]
pub fn UrlShortener() -> Element {
    let shortener = use_shortener();
    let mut url = shortener.url;
    let mut custom_word = shortener.custom_word;
    let busy = shortener.is_busy();
    let error = shortener.state.read().error().map(str::to_string);
    let link = shortener.state.read().data().cloned();

    rsx! {
        div {
            class: "w-full max-w-lg bg-card text-card-foreground rounded-2xl shadow-2xl p-10 text-center",

            h1 {
                class: "text-3xl font-bold mb-2 bg-gradient-to-br from-indigo-500 to-purple-700 bg-clip-text text-transparent",
                "URL Shortener"
            }
            p {
                class: "text-muted-foreground mb-8",
                "Transform long URLs into short, memorable links"
            }

            form {
                class: "flex flex-col gap-5 text-left",
                // Submit through the handler, never a page navigation
                onsubmit: move |evt| {
                    evt.prevent_default();
                    shortener.submit.call(());
                },

                div {
                    class: "flex flex-col gap-2",
                    label {
                        r#for: "original-url",
                        class: "text-sm font-semibold",
                        "Original URL"
                    }
                    input {
                        id: "original-url",
                        r#type: "url",
                        class: "px-4 py-3 rounded-lg border-2 border-border bg-background focus:border-primary outline-none transition",
                        placeholder: "https://example.com/very-long-url",
                        required: true,
                        value: "{url}",
                        oninput: move |evt| url.set(evt.value()),
                    }
                }

                div {
                    class: "flex flex-col gap-2",
                    label {
                        r#for: "custom-word",
                        class: "text-sm font-semibold",
                        "Custom Word (Optional)"
                    }
                    input {
                        id: "custom-word",
                        r#type: "text",
                        class: "px-4 py-3 rounded-lg border-2 border-border bg-background focus:border-primary outline-none transition",
                        placeholder: "mylink",
                        value: "{custom_word}",
                        oninput: move |evt| custom_word.set(evt.value()),
                    }
                }

                button {
                    r#type: "submit",
                    class: if busy {
                        "w-full py-3 rounded-lg bg-muted text-muted-foreground cursor-not-allowed flex items-center justify-center gap-2"
                    } else {
                        "w-full py-3 rounded-lg bg-gradient-to-br from-indigo-500 to-purple-700 text-white font-semibold hover:opacity-90 transition flex items-center justify-center gap-2"
                    },
                    disabled: busy,
                    if busy {
                        LoaderIcon { class: "w-4 h-4 animate-spin" }
                        span { "Shortening..." }
                    } else {
                        LinkIcon { class: "w-4 h-4" }
                        span { "Shorten URL" }
                    }
                }
            }

            if let Some(message) = error {
                div {
                    class: "mt-6 p-3 rounded-lg bg-destructive/10 border border-destructive/30 text-destructive text-sm flex items-center gap-2",
                    role: "alert",
                    AlertTriangleIcon { class: "w-4 h-4 flex-shrink-0" }
                    span { "{message}" }
                }
            }

            if let Some(link) = link {
                ShortenedLink {
                    link,
                    copied: *shortener.copied.read(),
                    on_copy: shortener.copy,
                }
            }
        }
    }
}
