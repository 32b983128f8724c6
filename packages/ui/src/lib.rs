//! This crate contains all shared UI for the workspace.
//!
//! Pages never depend on the router: navigation is reported through event
//! handlers and the binary maps them onto its routes.

use dioxus::prelude::*;

pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

mod context;
pub use context::{sleep_ms, use_api, use_config, ApiProvider};

mod auth;
pub use auth::{mark_signed_in, use_auth, AuthProvider, AuthState, LogoutButton};

mod notice;
pub use notice::{show_notice, use_notice, Alert, Notice, NoticeHost, NoticeKind};

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod sidebar;
pub use sidebar::{AdminPage, AdminShell, AdminSidebar};

mod upload;
pub use upload::read_images;

pub mod views;
pub use views::{Accessories, AddBlog, Banner, HeroSection, Login, ReviewPage, ShowReview};

/// Global stylesheet links shared by every platform entry point.
#[component]
pub fn GlobalStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
    }
}
