use dioxus::prelude::*;

use api::{ApiClient, AppConfig};
use ui::{ApiProvider, AuthProvider, NoticeHost};
use views::{
    Accessories, AdminIndex, AdminLayout, BannerAdmin, Blogs, Home, Login, NotFound, Process,
    Reviews,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/process")]
    Process {},
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/")]
            AdminIndex {},
            #[route("/accessories")]
            Accessories {},
            #[route("/blogs")]
            Blogs {},
            #[route("/banner")]
            BannerAdmin {},
            #[route("/reviews")]
            Reviews {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const APP_TOML: &str = include_str!("../app.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| AppConfig::load(APP_TOML));
    let client = use_hook(|| {
        ApiClient::new(&config, store::default_token_store()).map_err(|e| e.to_string())
    });

    let body = match client {
        Ok(client) => {
            tracing::info!("Using backend at {}", client.base_url());
            rsx! {
                ApiProvider {
                    client,
                    config,
                    AuthProvider {
                        NoticeHost {
                            Router::<Route> {}
                        }
                    }
                }
            }
        }
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            rsx! {
                div { class: "alert alert-danger m-4", "Configuration error: {e}" }
            }
        }
    };

    rsx! {
        // Global app resources
        ui::GlobalStyles {}
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        {body}
    }
}
