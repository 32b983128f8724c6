//! Modal success/error notices and inline alerts.
//!
//! [`NoticeHost`] owns a `Signal<Option<Notice>>` in context and renders the
//! current notice as a modal card with an OK button. Pages raise one with
//! [`show_notice`]; only the latest notice is shown.

use dioxus::prelude::*;

use crate::views::ModalOverlay;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    /// Bootstrap contextual class suffix.
    pub fn bootstrap(self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "danger",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NoticeKind::Info => "ℹ",
            NoticeKind::Success => "✔",
            NoticeKind::Warning => "!",
            NoticeKind::Error => "✖",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: &str, text: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            text: text.to_string(),
        }
    }

    pub fn success(title: &str, text: &str) -> Self {
        Self::new(NoticeKind::Success, title, text)
    }

    pub fn error(title: &str, text: &str) -> Self {
        Self::new(NoticeKind::Error, title, text)
    }
}

pub fn use_notice() -> Signal<Option<Notice>> {
    use_context::<Signal<Option<Notice>>>()
}

pub fn show_notice(notice: &mut Signal<Option<Notice>>, value: Notice) {
    match value.kind {
        NoticeKind::Error => tracing::warn!("{}: {}", value.title, value.text),
        _ => tracing::info!("{}: {}", value.title, value.text),
    }
    notice.set(Some(value));
}

/// Provides the notice signal and renders the active notice above `children`.
#[component]
pub fn NoticeHost(children: Element) -> Element {
    let mut notice = use_context_provider(|| Signal::new(Option::<Notice>::None));

    rsx! {
        {children}

        if let Some(current) = notice() {
            ModalOverlay {
                on_close: move |_| notice.set(None),
                div {
                    class: "p-4 text-center",
                    div {
                        class: "notice-icon text-{current.kind.bootstrap()} border-{current.kind.bootstrap()}",
                        "{current.kind.icon()}"
                    }
                    h4 { class: "fw-bold mt-3", "{current.title}" }
                    p { class: "text-muted mb-4", "{current.text}" }
                    button {
                        class: "btn btn-primary px-4",
                        onclick: move |_| notice.set(None),
                        "OK"
                    }
                }
            }
        }
    }
}

/// Inline bootstrap alert; renders nothing for an empty message.
#[component]
pub fn Alert(
    kind: NoticeKind,
    message: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    if message.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "alert alert-{kind.bootstrap()} {class}",
            role: "alert",
            "{message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_maps_to_bootstrap_context() {
        assert_eq!(NoticeKind::Error.bootstrap(), "danger");
        assert_eq!(NoticeKind::Success.bootstrap(), "success");
        assert_eq!(NoticeKind::Info.bootstrap(), "info");
    }

    #[test]
    fn test_constructors() {
        let notice = Notice::error("Error", "Failed to delete the accessory.");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Failed to delete the accessory.");
        assert_eq!(Notice::success("Deleted!", "x").kind, NoticeKind::Success);
    }
}
