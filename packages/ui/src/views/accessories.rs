//! Accessories dashboard: searchable table, add form, edit modal, delete.

use api::{filter_accessories, remove_by_id, Accessory, AccessoryUpdate, NewAccessory};
use dioxus::prelude::*;

use crate::upload::read_images;
use crate::{show_notice, use_api, use_config, use_notice, ConfirmDialog, Notice};
use super::ModalOverlay;

#[component]
pub fn Accessories() -> Element {
    let client = use_api();
    let config = use_config();
    let mut notice = use_notice();

    let mut accessories = use_signal(Vec::<Accessory>::new);
    let mut search = use_signal(String::new);
    let mut editing = use_signal(|| Option::<(String, AccessoryUpdate)>::None);
    let mut pending_delete = use_signal(|| Option::<String>::None);
    let mut add_form = use_signal(AddFormState::default);

    let mut loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.list_accessories().await {
                    Ok(items) => accessories.set(items),
                    Err(e) => tracing::error!("Error fetching accessories: {}", e),
                }
            }
        }
    });

    let create = {
        let client = client.clone();
        move |draft: NewAccessory| {
            let client = client.clone();
            spawn(async move {
                match client.create_accessory(draft).await {
                    Ok(()) => {
                        add_form.write().reset();
                        show_notice(&mut notice, Notice::success("Success", "Accessory added successfully."));
                        loader.restart();
                    }
                    Err(e) => {
                        tracing::error!("Error adding accessory: {}", e);
                        let text = e.user_message("Failed to add the accessory.");
                        show_notice(&mut notice, Notice::error("Error", &text));
                    }
                }
            });
        }
    };

    let update = {
        let client = client.clone();
        move |(id, form): (String, AccessoryUpdate)| {
            let client = client.clone();
            spawn(async move {
                match client.update_accessory(&id, &form).await {
                    Ok(()) => {
                        show_notice(&mut notice, Notice::success("Success", "Accessory updated successfully."));
                        loader.restart();
                        editing.set(None);
                    }
                    Err(e) => {
                        tracing::error!("Error updating accessory: {}", e);
                        let text = e.user_message("Failed to update the accessory.");
                        show_notice(&mut notice, Notice::error("Error", &text));
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
                match client.delete_accessory(&id).await {
                    Ok(()) => {
                        remove_by_id(&mut *accessories.write(), &id);
                        show_notice(&mut notice, Notice::success("Deleted!", "Accessory has been deleted."));
                    }
                    Err(e) => {
                        tracing::error!("Error deleting accessory: {}", e);
                        show_notice(&mut notice, Notice::error("Error", "Failed to delete the accessory."));
                    }
                }
            });
        }
    };

    let filtered = filter_accessories(&accessories.read(), &search());

    rsx! {
        div {
            class: "container-fluid mt-4",
            div {
                class: "d-flex justify-content-between align-items-center col-11 mx-auto",
                h2 { class: "fw-bold mt-4", "Accessories Dashboard" }
            }

            div {
                class: "col-md-11 mx-auto mt-3",
                input {
                    r#type: "text",
                    class: "form-control",
                    placeholder: "Search by name or category...",
                    value: "{search}",
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
            }

            div {
                class: "col-md-11 mx-auto mt-4",
                AddAccessoryForm { form: add_form, on_submit: create }
            }

            div {
                class: "row mt-4 col-12 mx-auto",
                div {
                    class: "col-md-11 mx-auto",
                    div {
                        class: "bg-white shadow-sm rounded p-3",
                        h5 { class: "fw-bold mb-3", "Accessory List" }
                        table {
                            class: "table table-bordered table-striped",
                            thead {
                                class: "table-light",
                                tr {
                                    th { "ID" }
                                    th { "Image" }
                                    th { "Name" }
                                    th { "Category" }
                                    th { "Price" }
                                    th { "Color" }
                                    th { "Quantity" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                if filtered.is_empty() {
                                    tr {
                                        td { colspan: "8", class: "text-center", "No accessories found" }
                                    }
                                }
                                for item in filtered {
                                    AccessoryRow {
                                        key: "{item.id}",
                                        item: item.clone(),
                                        uploads_base_url: config.uploads_base_url.clone(),
                                        on_edit: move |item: Accessory| editing.set(Some((item.id.clone(), item.to_update()))),
                                        on_delete: move |id: String| pending_delete.set(Some(id)),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some((id, form)) = editing() {
            EditAccessoryModal {
                id,
                initial: form,
                on_save: update,
                on_cancel: move |_| editing.set(None),
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
fn AccessoryRow(
    item: Accessory,
    uploads_base_url: String,
    on_edit: EventHandler<Accessory>,
    on_delete: EventHandler<String>,
) -> Element {
    let images = item.image_urls(&uploads_base_url);
    let swatches = item.swatches();
    let id = item.id.clone();
    let edited = item.clone();

    rsx! {
        tr {
            td { "{item.id}" }
            td {
                if images.is_empty() {
                    "No Image"
                }
                for src in images.iter() {
                    img {
                        key: "{src}",
                        src: "{src}",
                        alt: "accessory",
                        class: "accessory-thumb rounded me-1",
                    }
                }
            }
            td { "{item.name}" }
            td { "{item.category}" }
            td { "₹{item.price}" }
            td {
                for color in swatches {
                    span {
                        key: "{color}",
                        class: "color-swatch",
                        style: "background-color: {color}",
                        title: "{color}",
                    }
                }
            }
            td { "{item.quantity}" }
            td {
                button {
                    class: "btn btn-warning btn-sm me-2",
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

/// Add-form state owned by the dashboard. The draft survives a failed request
/// and is only reset once the backend accepts it.
#[derive(Debug, Clone, Default, PartialEq)]
struct AddFormState {
    draft: NewAccessory,
    /// Bumped on reset so the file input remounts and drops its selection.
    generation: u32,
}

impl AddFormState {
    fn reset(&mut self) {
        self.draft = NewAccessory::default();
        self.generation = self.generation.wrapping_add(1);
    }
}

#[component]
fn AddAccessoryForm(mut form: Signal<AddFormState>, on_submit: EventHandler<NewAccessory>) -> Element {
    let mut error = use_signal(String::new);
    let generation = form.read().generation;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let accessory = form.read().draft.clone();
        if let Err(e) = accessory.validate() {
            error.set(e.to_string());
            return;
        }
        error.set(String::new());
        on_submit.call(accessory);
    };

    rsx! {
        div {
            class: "bg-white shadow-sm rounded p-3",
            h5 { class: "fw-bold mb-3", "Add Accessory" }
            crate::Alert { kind: crate::NoticeKind::Error, message: error() }
            form {
                class: "row g-2",
                onsubmit: handle_submit,
                div {
                    class: "col-md-4",
                    input {
                        class: "form-control",
                        placeholder: "Name",
                        value: "{form.read().draft.name}",
                        oninput: move |evt: FormEvent| form.write().draft.name = evt.value(),
                    }
                }
                div {
                    class: "col-md-4",
                    input {
                        class: "form-control",
                        placeholder: "Category",
                        value: "{form.read().draft.category}",
                        oninput: move |evt: FormEvent| form.write().draft.category = evt.value(),
                    }
                }
                div {
                    class: "col-md-4",
                    input {
                        class: "form-control",
                        placeholder: "Color",
                        value: "{form.read().draft.color}",
                        oninput: move |evt: FormEvent| form.write().draft.color = evt.value(),
                    }
                }
                div {
                    class: "col-md-3",
                    input {
                        r#type: "number",
                        class: "form-control",
                        placeholder: "Price",
                        value: "{form.read().draft.price}",
                        oninput: move |evt: FormEvent| form.write().draft.price = evt.value(),
                    }
                }
                div {
                    class: "col-md-3",
                    input {
                        r#type: "number",
                        class: "form-control",
                        placeholder: "Quantity",
                        value: "{form.read().draft.quantity}",
                        oninput: move |evt: FormEvent| form.write().draft.quantity = evt.value(),
                    }
                }
                div {
                    class: "col-md-6",
                    for generation in std::iter::once(generation) {
                        input {
                            key: "{generation}",
                            r#type: "file",
                            class: "form-control",
                            accept: "image/*",
                            multiple: true,
                            onchange: move |evt: FormEvent| async move {
                                let images = read_images(evt.files()).await;
                                form.write().draft.images = images;
                            },
                        }
                    }
                }
                div {
                    class: "col-12",
                    textarea {
                        class: "form-control",
                        placeholder: "Description",
                        value: "{form.read().draft.description}",
                        oninput: move |evt: FormEvent| form.write().draft.description = evt.value(),
                    }
                }
                div {
                    class: "col-12",
                    button { r#type: "submit", class: "btn btn-success", "Add Accessory" }
                }
            }
        }
    }
}

#[component]
fn EditAccessoryModal(
    id: String,
    initial: AccessoryUpdate,
    on_save: EventHandler<(String, AccessoryUpdate)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(move || initial);

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            max_width: "500px",
            div {
                class: "p-3",
                div {
                    class: "d-flex justify-content-between align-items-center border-bottom pb-2",
                    h5 { class: "m-0", "Edit Accessory" }
                    button {
                        r#type: "button",
                        class: "btn-close",
                        onclick: move |_| on_cancel.call(()),
                    }
                }
                div {
                    class: "py-3",
                    div {
                        class: "mb-2",
                        label { class: "form-label", "Name" }
                        input {
                            r#type: "text",
                            class: "form-control",
                            value: "{form.read().name}",
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                    }
                    div {
                        class: "mb-2",
                        label { class: "form-label", "Price" }
                        input {
                            r#type: "number",
                            class: "form-control",
                            value: "{form.read().price}",
                            oninput: move |evt: FormEvent| form.write().price = evt.value(),
                        }
                    }
                    div {
                        class: "mb-2",
                        label { class: "form-label", "Original Price" }
                        input {
                            r#type: "number",
                            class: "form-control",
                            value: "{form.read().original_price}",
                            oninput: move |evt: FormEvent| form.write().original_price = evt.value(),
                        }
                    }
                    div {
                        class: "mb-2",
                        label { class: "form-label", "Quantity" }
                        input {
                            r#type: "number",
                            class: "form-control",
                            value: "{form.read().quantity}",
                            oninput: move |evt: FormEvent| form.write().quantity = evt.value(),
                        }
                    }
                }
                div {
                    class: "d-flex justify-content-end gap-2 border-top pt-2",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-warning",
                        onclick: move |_| on_save.call((id.clone(), form())),
                        "Update"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ImageFile;

    fn filled() -> AddFormState {
        AddFormState {
            draft: NewAccessory {
                name: "Leather Strap".into(),
                category: "Straps".into(),
                price: "499".into(),
                quantity: "3".into(),
                images: vec![ImageFile::new("strap.jpg", b"jpegdata".to_vec())],
                ..Default::default()
            },
            generation: 0,
        }
    }

    #[test]
    fn test_reset_clears_draft_and_remounts_file_input() {
        let mut state = filled();
        state.reset();
        assert_eq!(state.draft, NewAccessory::default());
        assert!(state.draft.images.is_empty());
        assert_eq!(state.generation, 1);
        state.reset();
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn test_draft_is_kept_until_reset() {
        let state = filled();
        let submitted = state.draft.clone();
        assert!(submitted.validate().is_ok());
        // Submitting only reads the draft; a failed request leaves it intact.
        assert_eq!(state.draft, submitted);
        assert_eq!(state.draft.images.len(), 1);
        assert_eq!(state.generation, 0);
    }
}
