use dioxus::prelude::*;

/// A full-screen backdrop that centers its children in a card.
/// Clicking the backdrop triggers `on_close`; clicks inside the card do not.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default = "440px".to_string())] max_width: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop-custom",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card bg-white rounded-3 shadow-lg w-100 mx-3",
                style: "max-width: {max_width}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
