//! Dock destinations without content of their own yet.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::FloatingDock;

#[component]
fn SectionPage(title: &'static str, blurb: &'static str) -> Element {
    let navigator = use_navigator();

    rsx! {
        main { class: "section-page",
            header { class: "landing-header",
                h1 { class: "page-title", "{title}" }
                p { class: "tagline", "{blurb}" }
                button {
                    class: "btn-secondary",
                    onclick: move |_| {
                        navigator.push(Route::Landing {});
                    },
                    "Back to Home"
                }
            }
            FloatingDock {}
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        SectionPage {
            title: "Profile",
            blurb: "Your account details and saved addresses will appear here.",
        }
    }
}

#[component]
pub fn News() -> Element {
    rsx! {
        SectionPage {
            title: "News",
            blurb: "Promotions and service updates from providers near you.",
        }
    }
}

#[component]
pub fn Chats() -> Element {
    rsx! {
        SectionPage {
            title: "Chats",
            blurb: "Conversations with your providers will appear here.",
        }
    }
}
