use dioxus::prelude::*;

pub mod home;
pub mod settings;
pub mod not_found;

use home::Home;
use settings::Settings;
use not_found::NotFound;

use crate::components::icons::{LinkIcon, SettingsIcon};

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/settings")]
        Settings {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    let current_route = use_route::<Route>();
    let is_settings_page = matches!(current_route, Route::Settings {});

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center p-5 bg-gradient-to-br from-indigo-500 to-purple-700",

            // Top-right toggle between the form and its settings
            nav {
                class: "fixed top-4 right-4",
                if is_settings_page {
                    Link {
                        to: Route::Home {},
                        class: "p-2 rounded-full bg-white/20 text-white hover:bg-white/30 transition flex",
                        LinkIcon { class: "w-5 h-5" }
                    }
                } else {
                    Link {
                        to: Route::Settings {},
                        class: "p-2 rounded-full bg-white/20 text-white hover:bg-white/30 transition flex",
                        SettingsIcon { class: "w-5 h-5" }
                    }
                }
            }

            Outlet::<Route> {}
        }
    }
}
