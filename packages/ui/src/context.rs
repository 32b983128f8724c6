//! Shared client and configuration handed to every page through context.
//!
//! The web binary builds one [`api::ApiClient`] and one [`api::AppConfig`] at
//! start-up and wraps the router in [`ApiProvider`]. Pages pull them out with
//! [`use_api`] and [`use_config`].

use api::{ApiClient, AppConfig};
use dioxus::prelude::*;

/// The backend client shared by all pages.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Frontend configuration.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Provider component that makes the client and config available below it.
#[component]
pub fn ApiProvider(client: ApiClient, config: AppConfig, children: Element) -> Element {
    use_context_provider(|| client);
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}

/// Wait `ms` milliseconds without blocking the UI.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
