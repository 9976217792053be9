use dioxus::prelude::*;
use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "w-full max-w-lg bg-card text-card-foreground rounded-2xl shadow-2xl p-10 text-center",
            h1 {
                class: "text-2xl font-bold mb-2",
                "Page not found"
            }
            p {
                class: "text-muted-foreground mb-6 break-all",
                "Nothing lives at {path}."
            }
            Link {
                to: Route::Home {},
                class: "px-4 py-2 rounded-lg bg-primary text-primary-foreground hover:bg-primary/90 transition",
                "Shorten a URL"
            }
        }
    }
}
