//! Feature showcase with phone and laptop mock-ups.

use dioxus::prelude::*;
use servicedock_core::showcase::{RELOAD_DEBOUNCE, PERFORMANCE_STATS, SYSTEM_FEATURES};
use servicedock_core::ShowcaseState;

use super::icons::feature_glyph;

/// Feature list on the left, both device mock-ups on the right.
///
/// Picking a feature covers the devices with a spinner, then remounts both
/// videos once [`RELOAD_DEBOUNCE`] has passed so they start together.
#[component]
pub fn FeatureShowcase() -> Element {
    let mut state = use_signal(ShowcaseState::new);

    let mut select = move |index: usize| {
        let Some(ticket) = state.with_mut(|s| s.select(index)) else {
            return;
        };
        spawn(async move {
            tokio::time::sleep(RELOAD_DEBOUNCE).await;
            if !state.with_mut(|s| s.finish_reload(ticket)) {
                tracing::debug!("Showcase reload superseded");
            }
        });
    };

    let current = state.read().current();
    let feature = state.read().current_feature();
    let loading = state.read().is_loading();
    let playback = state.read().playback();

    rsx! {
        section { class: "showcase",
            div { class: "showcase-list",
                for (index, item) in SYSTEM_FEATURES.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: if index == current { "feature-card active" } else { "feature-card" },
                        onclick: move |_| select(index),
                        span { class: "feature-icon", "{feature_glyph(item.icon)}" }
                        div { class: "feature-text",
                            h3 { class: "feature-title", "{item.title}" }
                            p { class: "feature-description", "{item.description}" }
                        }
                    }
                }
            }

            div { class: "showcase-devices",
                if loading {
                    div { class: "showcase-loading",
                        div { class: "spinner" }
                    }
                } else {
                    div { class: "device device-phone",
                        video {
                            key: "phone-{playback}",
                            src: "{feature.video}",
                            autoplay: true,
                            muted: true,
                            r#loop: true,
                            playsinline: true,
                        }
                    }
                    div { class: "device device-laptop",
                        video {
                            key: "laptop-{playback}",
                            src: "{feature.video}",
                            autoplay: true,
                            muted: true,
                            r#loop: true,
                            playsinline: true,
                        }
                    }
                }
                p { class: "showcase-caption", "{feature.title}" }
            }
        }
    }
}

/// Headline numbers under the showcase
#[component]
pub fn PerformanceStrip() -> Element {
    rsx! {
        section { class: "performance-strip",
            for stat in PERFORMANCE_STATS.iter() {
                div { key: "{stat.label}", class: "performance-stat",
                    span { class: "performance-value", "{stat.value}" }
                    span { class: "performance-label", "{stat.label}" }
                    span { class: "performance-caption", "{stat.caption}" }
                }
            }
        }
    }
}
