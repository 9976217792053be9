use dioxus::prelude::*;
use crate::components::UrlShortener;

#[component]
pub fn Home() -> Element {
    rsx! {
        UrlShortener {}
    }
}
