//! Blog editor: publish or update a post, list existing posts.

use api::{Blog, BlogDraft};
use dioxus::prelude::*;

use crate::{show_notice, use_api, use_notice, Alert, ConfirmDialog, Notice, NoticeKind};

#[component]
pub fn AddBlog() -> Element {
    let client = use_api();
    let mut notice = use_notice();

    let mut blogs = use_signal(Vec::<Blog>::new);
    let mut draft = use_signal(BlogDraft::default);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut pending_delete = use_signal(|| Option::<String>::None);
    let mut error = use_signal(String::new);

    let mut loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.list_blogs().await {
                    Ok(items) => blogs.set(items),
                    Err(e) => tracing::error!("Error fetching blogs: {}", e),
                }
            }
        }
    });

    let handle_submit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let body = draft();
            if let Err(e) = body.validate() {
                error.set(e.to_string());
                return;
            }
            error.set(String::new());
            let target = editing();
            spawn(async move {
                let result = match target.as_deref() {
                    Some(id) => client.update_blog(id, &body).await,
                    None => client.create_blog(&body).await,
                };
                match result {
                    Ok(()) => {
                        show_notice(
                            &mut notice,
                            Notice::success("Saved", "Blog Published/Updated Successfully!"),
                        );
                        draft.set(BlogDraft::default());
                        editing.set(None);
                        loader.restart();
                    }
                    Err(e) => {
                        tracing::error!("Error saving blog: {}", e);
                        show_notice(&mut notice, Notice::error("Error", "Something went wrong!"));
                    }
                }
            });
        }
    };

    let mut delete = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            pending_delete.set(None);
            spawn(async move {
                match client.delete_blog(&id).await {
                    Ok(()) => {
                        show_notice(&mut notice, Notice::success("Deleted", "Blog Deleted Successfully!"));
                        if editing().as_deref() == Some(id.as_str()) {
                            editing.set(None);
                            draft.set(BlogDraft::default());
                        }
                        loader.restart();
                    }
                    Err(e) => {
                        tracing::error!("Error deleting blog: {}", e);
                        show_notice(&mut notice, Notice::error("Error", "Something went wrong!"));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "container-fluid mt-4 col-11 mx-auto",
            div {
                class: "card shadow-lg p-4 rounded-4",
                h2 { class: "text-center fs-2 fw-bold mb-4 text-warning", "Add/Update Blog" }

                Alert { kind: NoticeKind::Error, message: error() }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-3",
                        label { r#for: "title", class: "form-label fw-semibold", "Blog Title" }
                        input {
                            r#type: "text",
                            id: "title",
                            class: "form-control form-control-lg",
                            placeholder: "Enter your blog title...",
                            required: true,
                            value: "{draft.read().title}",
                            oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                        }
                    }
                    div {
                        class: "mb-3",
                        label { r#for: "description", class: "form-label fw-semibold", "Blog Description" }
                        textarea {
                            id: "description",
                            class: "form-control font-monospace",
                            rows: "8",
                            placeholder: "<p>Write your post (HTML allowed)...</p>",
                            value: "{draft.read().description}",
                            oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                        }
                        if !draft.read().description.is_empty() {
                            div {
                                class: "form-control blog-preview mt-2",
                                dangerous_inner_html: "{draft.read().description}",
                            }
                        }
                    }
                    div {
                        class: "d-grid gap-2",
                        button {
                            r#type: "submit",
                            class: "btn btn-warning btn-lg",
                            if editing().is_some() { "Update Blog" } else { "Publish Blog" }
                        }
                        if editing().is_some() {
                            button {
                                r#type: "button",
                                class: "btn btn-outline-secondary",
                                onclick: move |_| {
                                    editing.set(None);
                                    draft.set(BlogDraft::default());
                                },
                                "Cancel editing"
                            }
                        }
                    }
                }
            }

            div {
                class: "mt-4",
                h3 { class: "text-center fs-3 fw-semibold text-warning", "Existing Blogs" }
                if blogs.read().is_empty() {
                    p { "No blogs available." }
                } else {
                    div {
                        class: "list-group mt-3",
                        for blog in blogs() {
                            BlogItem {
                                key: "{blog.id}",
                                blog: blog.clone(),
                                on_edit: move |blog: Blog| {
                                    draft.set(BlogDraft::from(&blog));
                                    editing.set(Some(blog.id));
                                },
                                on_delete: move |id: String| pending_delete.set(Some(id)),
                            }
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
fn BlogItem(blog: Blog, on_edit: EventHandler<Blog>, on_delete: EventHandler<String>) -> Element {
    let id = blog.id.clone();
    let edited = blog.clone();

    rsx! {
        div {
            class: "list-group-item d-flex justify-content-between align-items-center",
            div {
                h5 { class: "mb-1", "{blog.title}" }
                div { class: "mb-1", dangerous_inner_html: "{blog.description}" }
            }
            div {
                class: "flex-shrink-0",
                button {
                    class: "btn btn-warning btn-sm mx-2",
                    onclick: move |_| on_edit.call(edited.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-danger btn-sm",
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
            }
        }
    }
}
