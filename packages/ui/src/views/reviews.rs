//! Customer reviews for moderation.

use api::{remove_by_id, Review};
use dioxus::prelude::*;

use crate::{show_notice, use_api, use_notice, ConfirmDialog, Notice};

/// Reviews page content; the admin layout supplies the sidebar.
#[component]
pub fn ReviewPage() -> Element {
    rsx! {
        div {
            class: "container-fluid py-4",
            h2 { class: "fw-bold col-11 mx-auto", "Customer Reviews" }
            ShowReview {}
        }
    }
}

#[component]
pub fn ShowReview() -> Element {
    let client = use_api();
    let mut notice = use_notice();

    let mut reviews = use_signal(Vec::<Review>::new);
    let mut loaded = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.list_reviews().await {
                    Ok(items) => reviews.set(items),
                    Err(e) => tracing::error!("Error fetching reviews: {}", e),
                }
                loaded.set(true);
            }
        }
    });

    let mut delete = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            pending_delete.set(None);
            spawn(async move {
                match client.delete_review(&id).await {
                    Ok(()) => {
                        remove_by_id(&mut *reviews.write(), &id);
                        show_notice(&mut notice, Notice::success("Deleted!", "Review has been deleted."));
                    }
                    Err(e) => {
                        tracing::error!("Error deleting review: {}", e);
                        show_notice(&mut notice, Notice::error("Error", "Failed to delete the review."));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "col-11 mx-auto mt-3",
            if !loaded() {
                p { class: "text-muted", "Loading..." }
            } else if reviews.read().is_empty() {
                p { "No reviews yet." }
            } else {
                div {
                    class: "list-group",
                    for review in reviews() {
                        ReviewItem {
                            key: "{review.id}",
                            review: review.clone(),
                            on_delete: move |id: String| pending_delete.set(Some(id)),
                        }
                    }
                }
            }
        }

        if let Some(id) = pending_delete() {
            ConfirmDialog {
                on_confirm: move |_| delete(id.clone()),
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn ReviewItem(review: Review, on_delete: EventHandler<String>) -> Element {
    let stars = review.stars() as usize;
    let rating = format!("{}{}", "★".repeat(stars), "☆".repeat(5 - stars));
    let id = review.id.clone();

    rsx! {
        div {
            class: "list-group-item bg-white",
            div {
                class: "d-flex justify-content-between align-items-start",
                div {
                    h6 { class: "mb-1 fw-bold", "{review.author()}" }
                    span { class: "review-stars", "{rating}" }
                    if let Some(date) = review.date() {
                        small { class: "text-muted ms-2", "{date}" }
                    }
                }
                button {
                    class: "btn btn-danger btn-sm",
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
            }
            p { class: "mb-0 mt-2", "{review.comment}" }
        }
    }
}
