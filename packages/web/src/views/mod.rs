//! Route components: thin wrappers that wire the shared pages to the router.

use dioxus::prelude::*;
use ui::{AdminPage, AdminShell};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::HeroSection {
            on_start: move |_| {
                nav.push(Route::Process {});
            },
        }
    }
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::Login {
            on_success: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}

/// Landing spot of the hero's call to action.
#[component]
pub fn Process() -> Element {
    rsx! {
        div {
            class: "container py-5 text-center",
            h2 { class: "fw-bold", "Design your merchandise" }
            p { class: "text-muted", "Pick a product, upload your artwork and we will take it from there." }
            Link { to: Route::Home {}, class: "btn btn-brand", "Back to home" }
        }
    }
}

fn route_for(page: AdminPage) -> Route {
    match page {
        AdminPage::Accessories => Route::Accessories {},
        AdminPage::Blogs => Route::Blogs {},
        AdminPage::Banner => Route::BannerAdmin {},
        AdminPage::Reviews => Route::Reviews {},
    }
}

fn page_for(route: &Route) -> Option<AdminPage> {
    match route {
        Route::Accessories {} => Some(AdminPage::Accessories),
        Route::Blogs {} => Some(AdminPage::Blogs),
        Route::BannerAdmin {} => Some(AdminPage::Banner),
        Route::Reviews {} => Some(AdminPage::Reviews),
        _ => None,
    }
}

/// Sidebar shell around every `/admin` page.
#[component]
pub fn AdminLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        AdminShell {
            active: page_for(&route),
            on_navigate: move |page: AdminPage| {
                nav.push(route_for(page));
            },
            on_logout: move |_| {
                nav.push(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

/// Redirect `/admin` to `/admin/accessories`
#[component]
pub fn AdminIndex() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Accessories {});
    rsx! {}
}

#[component]
pub fn Accessories() -> Element {
    rsx! { ui::Accessories {} }
}

#[component]
pub fn Blogs() -> Element {
    rsx! { ui::AddBlog {} }
}

#[component]
pub fn BannerAdmin() -> Element {
    rsx! { ui::Banner {} }
}

#[component]
pub fn Reviews() -> Element {
    rsx! { ui::ReviewPage {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "container py-5 text-center",
            h2 { "Page not found" }
            p { class: "text-muted", "/{path}" }
            Link { to: Route::Home {}, "Go home" }
        }
    }
}
