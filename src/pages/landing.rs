//! Landing page - the customer's home screen.
//!
//! Feature showcase up top, performance strip below, and the floating dock
//! with the bookings drawer over everything.

use dioxus::prelude::*;

use crate::components::{FeatureShowcase, FloatingDock, PerformanceStrip};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    rsx! {
        main { class: "landing",
            header { class: "landing-header",
                h1 { class: "page-title", "Home services, handled." }
                p { class: "tagline",
                    "Book trusted providers, pay securely, and follow them to your door."
                }
            }

            FeatureShowcase {}
            PerformanceStrip {}

            FloatingDock {}
        }
    }
}
