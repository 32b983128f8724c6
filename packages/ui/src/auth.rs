//! Authentication context and hooks for the UI.

use dioxus::prelude::*;

use crate::use_api;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    /// Backend-issued token, mirrored from the token store.
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that seeds the auth state from the token store.
/// Must sit below [`crate::ApiProvider`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_api();
    let mut auth_state = use_signal(AuthState::default);

    use_effect(move || {
        let token = client.tokens().get();
        tracing::debug!("Restored session: authenticated = {}", token.is_some());
        auth_state.set(AuthState {
            token,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Record a freshly stored token in the auth context.
pub fn mark_signed_in(auth: &mut Signal<AuthState>, token: Option<String>) {
    auth.set(AuthState {
        token,
        loading: false,
    });
}

/// Button that forgets the stored token.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let client = use_api();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        client.logout();
        mark_signed_in(&mut auth_state, None);
        tracing::info!("Signed out");
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
