//! Banner admin form.

use api::{BannerUpload, ImageFile};
use dioxus::prelude::*;

use crate::upload::read_images;
use crate::{use_api, Alert, NoticeKind};

#[component]
pub fn Banner() -> Element {
    let client = use_api();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut image = use_signal(|| Option::<ImageFile>::None);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let upload = BannerUpload {
            title: title(),
            description: description(),
            image: image(),
        };
        async move {
            if let Err(e) = upload.validate() {
                message.set(e.to_string());
                return;
            }
            submitting.set(true);
            match client.store_banner(upload).await {
                Ok(reply) => message.set(reply.message.unwrap_or_default()),
                Err(e) => {
                    tracing::error!("Error storing banner: {}", e);
                    message.set("Failed to store banner.".to_string());
                }
            }
            submitting.set(false);
        }
    };

    rsx! {
        div {
            class: "container-fluid mt-4 col-11 mx-auto",
            h2 { "Add or Update Banner" }
            form {
                onsubmit: handle_submit,
                div {
                    class: "mb-3",
                    label { class: "form-label", "Title:" }
                    input {
                        r#type: "text",
                        class: "form-control",
                        placeholder: "Enter banner title",
                        value: "{title}",
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }
                div {
                    class: "mb-3",
                    label { class: "form-label", "Description:" }
                    textarea {
                        class: "form-control",
                        placeholder: "Enter banner description",
                        value: "{description}",
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                }
                div {
                    class: "mb-3",
                    label { class: "form-label", "Image:" }
                    input {
                        r#type: "file",
                        class: "form-control",
                        accept: "image/*",
                        onchange: move |evt: FormEvent| async move {
                            let picked = read_images(evt.files()).await;
                            image.set(picked.into_iter().next());
                        },
                    }
                    small {
                        class: "form-text text-danger mt-2",
                        "Note: Please upload an image with 1200px width and 800px height."
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: submitting(),
                    "Submit Banner"
                }
            }

            Alert { kind: NoticeKind::Info, message: message(), class: "mt-3" }
        }
    }
}
