//! Login page: email/password and Google sign-in.

use api::Credentials;
use dioxus::prelude::*;
use serde::Deserialize;

use crate::auth::mark_signed_in;
use crate::context::sleep_ms;
use crate::{use_api, use_auth, use_config, Alert, LogoutButton, NoticeKind};

/// Alert shown above the form.
#[derive(Clone, Debug, Default, PartialEq)]
struct Message {
    kind: Option<NoticeKind>,
    text: String,
}

impl Message {
    fn success(text: String) -> Self {
        Self {
            kind: Some(NoticeKind::Success),
            text,
        }
    }

    fn danger(text: String) -> Self {
        Self {
            kind: Some(NoticeKind::Error),
            text,
        }
    }
}

/// Login page component. `on_success` fires once the post-login delay elapses.
#[component]
pub fn Login(on_success: EventHandler<()>) -> Element {
    let client = use_api();
    let config = use_config();
    let mut auth = use_auth();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut message = use_signal(Message::default);
    let mut busy = use_signal(|| false);

    let delay = config.redirect_delay_ms;

    let handle_sign_in = move |_| {
        let client = client.clone();
        let credentials = Credentials {
            email: email(),
            password: password(),
        };
        async move {
            if let Err(e) = credentials.validate() {
                message.set(Message::danger(e.to_string()));
                return;
            }
            busy.set(true);
            match client.login(&credentials).await {
                Ok(reply) => {
                    mark_signed_in(&mut auth, client.tokens().get());
                    tracing::info!("Signed in as {}", credentials.email);
                    message.set(Message::success(reply.message.unwrap_or_default()));
                    busy.set(false);
                    sleep_ms(delay).await;
                    on_success.call(());
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    message.set(Message::danger(e.user_message("Login failed.")));
                    busy.set(false);
                }
            }
        }
    };

    let current = message();

    rsx! {
        div {
            class: "container d-flex flex-column align-items-center justify-content-center min-vh-100",

            h2 { class: "text-center", "Sign in to your account" }

            if let Some(kind) = current.kind {
                Alert {
                    kind,
                    message: current.text.clone(),
                    class: "w-100 login-width",
                }
            }

            div {
                class: "w-100 login-width",
                input {
                    r#type: "email",
                    name: "email",
                    class: "form-control mb-3",
                    placeholder: "Email address",
                    value: "{email}",
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    name: "password",
                    class: "form-control mb-3",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                div {
                    class: "d-flex justify-content-between mb-3",
                    div {
                        input {
                            r#type: "checkbox",
                            id: "rememberMe",
                        }
                        label { r#for: "rememberMe", class: "ms-2", "Remember me" }
                    }
                }

                button {
                    class: "btn w-100 btn-brand",
                    disabled: busy(),
                    onclick: handle_sign_in,
                    if busy() { "Signing in..." } else { "Sign in" }
                }

                if let Some(client_id) = config.google_client_id() {
                    div {
                        class: "mt-4",
                        GoogleSignIn {
                            client_id: client_id.to_string(),
                            on_message: move |m: Message| message.set(m),
                            on_success: move |_| on_success.call(()),
                        }
                    }
                }

                if auth().is_authenticated() {
                    div {
                        class: "mt-4 text-center small text-muted",
                        "You are already signed in. "
                        LogoutButton {
                            class: "btn btn-link btn-sm p-0 align-baseline",
                            on_logout: move |_| message.set(Message::default()),
                        }
                    }
                }
            }
        }
    }
}

/// What the Google Identity Services bridge sends back.
#[derive(Debug, Deserialize)]
struct GoogleReply {
    #[serde(default)]
    credential: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

const GOOGLE_BUTTON_ID: &str = "google-signin-button";

/// Loads Google Identity Services, renders its button and relays every
/// credential it issues back to Rust.
const GOOGLE_BRIDGE_JS: &str = r#"
const [clientId, buttonId] = await dioxus.recv();
if (!document.getElementById("gsi-client")) {
    const script = document.createElement("script");
    script.id = "gsi-client";
    script.src = "https://accounts.google.com/gsi/client";
    script.async = true;
    document.head.appendChild(script);
}
const ready = () => window.google && window.google.accounts && window.google.accounts.id;
for (let i = 0; i < 100 && !ready(); i++) {
    await new Promise((resolve) => setTimeout(resolve, 100));
}
if (!ready()) {
    dioxus.send({ error: "Google Identity Services did not load" });
} else {
    try {
        google.accounts.id.initialize({
            client_id: clientId,
            callback: (response) => dioxus.send({ credential: response.credential || null }),
        });
        google.accounts.id.renderButton(document.getElementById(buttonId), {
            theme: "outline",
            size: "large",
        });
    } catch (err) {
        dioxus.send({ error: String(err) });
    }
}
"#;

#[component]
fn GoogleSignIn(
    client_id: String,
    on_message: EventHandler<Message>,
    on_success: EventHandler<()>,
) -> Element {
    let client = use_api();
    let config = use_config();
    let mut auth = use_auth();

    use_future(move || {
        let client = client.clone();
        let client_id = client_id.clone();
        let delay = config.redirect_delay_ms;
        async move {
            let mut bridge = document::eval(GOOGLE_BRIDGE_JS);
            if let Err(e) = bridge.send((client_id, GOOGLE_BUTTON_ID)) {
                tracing::error!("Google sign-in bridge failed: {:?}", e);
                return;
            }
            loop {
                let reply = match bridge.recv::<GoogleReply>().await {
                    Ok(reply) => reply,
                    Err(e) => {
                        tracing::debug!("Google sign-in bridge closed: {:?}", e);
                        break;
                    }
                };
                if let Some(error) = reply.error {
                    tracing::error!("Google Login Failed: {}", error);
                    on_message.call(Message::danger("Google Sign-In failed.".to_string()));
                    continue;
                }
                let Some(credential) = reply.credential else {
                    on_message.call(Message::danger("Google Sign-In failed.".to_string()));
                    continue;
                };
                match client.google_login(&credential).await {
                    Ok(reply) => {
                        mark_signed_in(&mut auth, client.tokens().get());
                        let text = reply
                            .message
                            .unwrap_or_else(|| "Google Sign-In Successful".to_string());
                        on_message.call(Message::success(text));
                        sleep_ms(delay).await;
                        on_success.call(());
                    }
                    Err(e) => {
                        tracing::error!("Google login failed: {}", e);
                        on_message.call(Message::danger(e.user_message("Google Sign-In failed.")));
                    }
                }
            }
        }
    });

    rsx! {
        div { id: GOOGLE_BUTTON_ID }
    }
}
