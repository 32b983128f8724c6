use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Modal asking the user to confirm a destructive action.
/// Cancelling, or clicking outside the card, calls `on_cancel`.
#[component]
pub fn ConfirmDialog(
    #[props(default = "Are you sure?".to_string())] title: String,
    #[props(default = "You won't be able to revert this!".to_string())] text: String,
    #[props(default = "Yes, delete it!".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "p-4 text-center",
                div { class: "notice-icon text-warning border-warning", "!" }
                h4 { class: "fw-bold mt-3", "{title}" }
                p { class: "text-muted mb-4", "{text}" }
                div {
                    class: "d-flex justify-content-center gap-2",
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                }
            }
        }
    }
}
