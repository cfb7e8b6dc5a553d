//! Inline Lucide icons used by the dock and the showcase.

use dioxus::prelude::*;
use servicedock_core::showcase::FeatureIcon;

/// Icons drawn on the floating dock
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DockIcon {
    Home,
    Bookmark,
    Bell,
    User,
    Newspaper,
    Chat,
    Power,
    ChevronDown,
    Coffee,
}

pub fn render_dock_icon(icon: DockIcon) -> Element {
    match icon {
        DockIcon::Home => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
                path { d: "M9 22V12h6v10" }
            }
        },
        DockIcon::Bookmark => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z" }
            }
        },
        DockIcon::Bell => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" }
                path { d: "M10.3 21a1.94 1.94 0 0 0 3.4 0" }
            }
        },
        DockIcon::User => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "8", r: "5" }
                path { d: "M20 21a8 8 0 0 0-16 0" }
            }
        },
        DockIcon::Newspaper => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M4 22h16a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v16a2 2 0 0 1-2 2Zm0 0a2 2 0 0 1-2-2v-9c0-1.1.9-2 2-2h2" }
                path { d: "M18 14h-8" }
                path { d: "M15 18h-5" }
                path { d: "M10 6h8v4h-8V6Z" }
            }
        },
        DockIcon::Chat => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
                path { d: "M8 12h.01" }
                path { d: "M12 12h.01" }
                path { d: "M16 12h.01" }
            }
        },
        DockIcon::Power => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M12 2v10" }
                path { d: "M18.4 6.6a9 9 0 1 1-12.77.04" }
            }
        },
        DockIcon::ChevronDown => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "m6 9 6 6 6-6" }
            }
        },
        DockIcon::Coffee => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M17 8h1a4 4 0 1 1 0 8h-1" }
                path { d: "M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z" }
                line { x1: "6", x2: "6", y1: "2", y2: "4" }
                line { x1: "10", x2: "10", y1: "2", y2: "4" }
                line { x1: "14", x2: "14", y1: "2", y2: "4" }
            }
        },
    }
}

/// Glyph for a showcase card
pub fn feature_glyph(icon: FeatureIcon) -> &'static str {
    match icon {
        FeatureIcon::Calendar => "\u{1F4C5}",
        FeatureIcon::MapPin => "\u{1F4CD}",
        FeatureIcon::Wallet => "\u{1F4B3}",
        FeatureIcon::ShieldCheck => "\u{1F6E1}",
        FeatureIcon::Star => "\u{2B50}",
        FeatureIcon::Bell => "\u{1F514}",
    }
}
