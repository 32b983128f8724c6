use dioxus::prelude::*;

use crate::{use_auth, LogoutButton};

const ADMIN_CSS: Asset = asset!("/assets/admin.css");

/// Pages reachable from the admin sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminPage {
    Accessories,
    Blogs,
    Banner,
    Reviews,
}

impl AdminPage {
    pub const ALL: [AdminPage; 4] = [
        AdminPage::Accessories,
        AdminPage::Blogs,
        AdminPage::Banner,
        AdminPage::Reviews,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminPage::Accessories => "Accessories",
            AdminPage::Blogs => "Blogs",
            AdminPage::Banner => "Banner",
            AdminPage::Reviews => "Reviews",
        }
    }
}

#[component]
pub fn AdminSidebar(
    #[props(!optional)] active: Option<AdminPage>,
    on_navigate: EventHandler<AdminPage>,
    on_logout: EventHandler<()>,
) -> Element {
    let auth = use_auth();

    rsx! {
        document::Stylesheet { href: ADMIN_CSS }

        nav {
            class: "admin-sidebar d-flex flex-column h-100 p-3",
            h5 { class: "fw-bold mb-4", "Admin" }

            ul {
                class: "nav nav-pills flex-column gap-1",
                for page in AdminPage::ALL {
                    li {
                        key: "{page.label()}",
                        class: "nav-item",
                        button {
                            class: if active == Some(page) { "nav-link active w-100 text-start" } else { "nav-link w-100 text-start" },
                            onclick: move |_| on_navigate.call(page),
                            "{page.label()}"
                        }
                    }
                }
            }

            div {
                class: "mt-auto pt-3 border-top",
                if auth().is_authenticated() {
                    LogoutButton {
                        class: "btn btn-outline-secondary w-100",
                        on_logout: move |_| on_logout.call(()),
                    }
                } else {
                    span { class: "small text-muted", "Not signed in" }
                }
            }
        }
    }
}

/// Sidebar (fixed 250px) beside the page content.
#[component]
pub fn AdminShell(
    #[props(!optional)] active: Option<AdminPage>,
    on_navigate: EventHandler<AdminPage>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "d-flex min-vh-100",
            div {
                class: "sidebar-container border-end",
                style: "width: 250px; flex-shrink: 0;",
                AdminSidebar { active, on_navigate, on_logout }
            }
            div {
                class: "flex-grow-1 bg-light",
                {children}
            }
        }
    }
}
