//! Storefront hero banner.

use dioxus::prelude::*;

use crate::use_api;

#[derive(Clone, Debug, PartialEq)]
enum HeroState {
    Loading,
    Ready(api::Banner),
    Failed(&'static str),
}

#[component]
pub fn HeroSection(on_start: EventHandler<()>) -> Element {
    let client = use_api();
    let mut state = use_signal(|| HeroState::Loading);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            let next = match client.get_banner().await {
                Ok(banner) if banner.is_complete() => HeroState::Ready(banner),
                Ok(_) => HeroState::Failed("Incomplete data received"),
                Err(e) => {
                    tracing::error!("Error fetching banner: {}", e);
                    HeroState::Failed("Error fetching banner")
                }
            };
            state.set(next);
        }
    });

    match state() {
        HeroState::Loading => rsx! {
            div { "Loading..." }
        },
        HeroState::Failed(reason) => rsx! {
            div { "Error: {reason}" }
        },
        HeroState::Ready(banner) => rsx! {
            div {
                class: "container-fluid pb-4",
                section {
                    class: "banner-section img-fluid",
                    style: "background-image: url({banner.image})",
                    div {
                        class: "container",
                        h1 { class: "fw-bold pb-4", "{banner.title}" }
                        if let Some(description) = banner.description.as_deref() {
                            p { class: "lead my-4", "{description}" }
                        }
                        button {
                            class: "btn btn-lg mt-4 p-4",
                            aria_label: "Start designing custom merchandise",
                            onclick: move |_| on_start.call(()),
                            "Start Designing →"
                        }
                    }
                }
            }
        },
    }
}
